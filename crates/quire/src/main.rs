//! Quire CLI - documentation navigation tooling.
//!
//! Provides commands for:
//! - `check`: Report navigation links without a matching document
//! - `nav`: Print the top navigation of a locale
//! - `sidebar`: Print the sidebar shown for a page
//! - `export`: Write the resolved configuration as engine JSON

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ExportArgs, NavArgs, SidebarArgs};
use output::Output;

/// Quire - documentation navigation.
#[derive(Parser)]
#[command(name = "quire", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check navigation links against the docs directory.
    Check(CheckArgs),
    /// Print the top navigation of a locale.
    Nav(NavArgs),
    /// Print the sidebar shown for a page.
    Sidebar(SidebarArgs),
    /// Export the resolved configuration as JSON.
    Export(ExportArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Check(args) => args.site.verbose,
            Self::Nav(args) => args.site.verbose,
            Self::Sidebar(args) => args.site.verbose,
            Self::Export(args) => args.site.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        default_filter()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Nav(args) => args.execute(),
        Commands::Sidebar(args) => args.execute(),
        Commands::Export(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

/// Log filter from `RUST_LOG`, falling back to warnings and errors.
fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}
