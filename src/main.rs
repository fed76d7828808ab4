use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use connect_four::config::AppConfig;
use connect_four::logging;
use connect_four::ui::App;

/// Play Connect Four in the terminal, two players on one keyboard.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player console Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Color the disks
    #[arg(long)]
    color: bool,

    /// Increase log output on stderr (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init("warn", cli.verbose);

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if cli.color {
        config.display.color = true;
    }

    let stdin = io::stdin();
    let mut app = App::from_config(stdin.lock(), io::stdout(), &config)?;
    let summary = app.run().context("running session")?;
    tracing::debug!(games = summary.results.len(), "session finished");
    Ok(())
}
