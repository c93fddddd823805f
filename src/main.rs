use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;
use tracing_subscriber::filter::LevelFilter;

mod config;
mod error;
mod gandi;
mod public_ip;
mod sync;

use config::Config;
use error::Error;
use sync::SyncOutcome;

/// Update Gandi DNS with the public IP address.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path to the config file.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Suppress info level log messages.
    #[arg(long)]
    quiet: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.quiet {
        LevelFilter::ERROR
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    match run(&cli).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("An error occurred: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<SyncOutcome, Error> {
    let config = Config::load(cli.config.as_deref())?;
    sync::run(&config).await
}
