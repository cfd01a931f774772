use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use taskbob::config::Config;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "taskbob")]
#[command(author, version, about = "Text-command task manager")]
struct Cli {
    /// Save file to read at startup and write on exit
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load().unwrap_or_else(|e| {
        warn!(error = ?e, "ignoring unreadable config");
        Config::default()
    });
    // --file wins over both the env var and the config file.
    let path = cli.file.unwrap_or_else(|| config.data_path());

    taskbob::repl::run(path)
}
