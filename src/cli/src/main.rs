/* src/cli/src/main.rs */

mod check;
mod config;
mod pages;
mod status;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ekush", version, about = "Operator CLI for the Ekush bilingual site")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Compare compiled-in fallback keys against the backend's content rows
  Check {
    /// Path to ekush.toml (discovered upward from cwd when omitted)
    #[arg(long)]
    config: Option<PathBuf>,
  },
  /// Print the resolved bilingual content for a page
  Pages {
    /// Page slug (home, about, products)
    slug: String,
    /// Path to ekush.toml (discovered upward from cwd when omitted)
    #[arg(long)]
    config: Option<PathBuf>,
  },
  /// Classify a status string and show its badge treatment
  Status { value: String },
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  match cli.command {
    Command::Check { config } => check::run(config.as_deref()).await,
    Command::Pages { slug, config } => pages::run(&slug, config.as_deref()).await,
    Command::Status { value } => {
      status::run(&value);
      Ok(())
    }
  }
}
