//! Echo-or-return output handling.

use std::io::{self, Write};

/// Write `markup` to `sink` when `echo` is set, otherwise hand it back.
pub fn emit<W: Write + ?Sized>(
    markup: String,
    echo: bool,
    sink: &mut W,
) -> io::Result<Option<String>> {
    if !echo {
        return Ok(Some(markup));
    }
    sink.write_all(markup.as_bytes())?;
    sink.flush()?;
    Ok(None)
}
