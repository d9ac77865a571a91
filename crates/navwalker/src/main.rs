//! Navwalker CLI
//!
//! Renders menu documents into Bootstrap navigation markup on stdout.
//!
//! Usage:
//!   navwalker render menu.yaml --schema-markup --item-spacing discard
//!   navwalker fallback --container nav

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use navwalker::menu::{DocumentFormat, MenuDocument};
use navwalker::theme::{display_fallback, display_nav_menu};
use navwalker::{Config, ItemSpacing, NavMenuArgs};

/// Render menu trees as Bootstrap navigation markup.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a JSON or YAML menu document.
    Render {
        /// Menu document (`.json`, `.yaml`, or `.yml`).
        file: PathBuf,

        #[command(flatten)]
        options: RenderOptions,
    },
    /// Render the markup shown when no menu is assigned.
    Fallback {
        #[command(flatten)]
        options: RenderOptions,
    },
}

/// Per-invocation overrides of the environment configuration.
#[derive(Args, Debug)]
struct RenderOptions {
    /// Add schema.org SiteNavigationElement markup.
    #[arg(long)]
    schema_markup: bool,

    /// Whitespace between items: preserve or discard.
    #[arg(long)]
    item_spacing: Option<ItemSpacing>,

    /// Class of the outer list.
    #[arg(long)]
    menu_class: Option<String>,

    /// Id of the outer list.
    #[arg(long)]
    menu_id: Option<String>,

    /// Container element (div or nav; empty for none).
    #[arg(long)]
    container: Option<String>,

    #[arg(long)]
    container_class: Option<String>,

    #[arg(long)]
    container_id: Option<String>,

    /// Levels to render (0 renders everything).
    #[arg(long)]
    depth: Option<usize>,
}

impl RenderOptions {
    fn apply(self, args: &mut NavMenuArgs) {
        args.schema_markup |= self.schema_markup;
        if let Some(spacing) = self.item_spacing {
            args.item_spacing = spacing;
        }
        if let Some(menu_class) = self.menu_class {
            args.menu_class = menu_class;
        }
        if let Some(menu_id) = self.menu_id {
            args.menu_id = menu_id;
        }
        if let Some(container) = self.container {
            args.container = container;
        }
        if let Some(container_class) = self.container_class {
            args.container_class = container_class;
        }
        if let Some(container_id) = self.container_id {
            args.container_id = container_id;
        }
        if let Some(depth) = self.depth {
            args.depth = depth;
        }
    }
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env().context("failed to load configuration")?;
    let mut args = config.menu_args();
    args.echo = true;

    let mut stdout = io::stdout().lock();
    match cli.command {
        Command::Render { file, options } => {
            options.apply(&mut args);
            let input = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read menu file {}", file.display()))?;
            let tree = MenuDocument::parse(&input, DocumentFormat::from_path(&file))
                .and_then(MenuDocument::into_tree)
                .with_context(|| format!("failed to load menu from {}", file.display()))?;
            info!(file = %file.display(), nodes = tree.len(), "menu loaded");
            display_nav_menu(Some(&tree), &args, &mut stdout)
                .context("failed to write menu markup")?;
        }
        Command::Fallback { options } => {
            options.apply(&mut args);
            display_fallback(&args, &mut stdout).context("failed to write fallback markup")?;
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout carries only markup.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
