use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod batch;
mod config;
mod document;
mod error;
mod tile;

#[cfg(test)]
mod fixtures;

use config::DumpOptions;

/// Extract the lesion tiles embedded in Vectra JSON exports as PNG files
#[derive(Parser, Debug)]
#[command(name = config::APP_NAME, version = config::APP_VERSION)]
struct Cli {
    /// Folder of *.json exports (scanned non-recursively) or a single export
    #[arg(default_value = ".")]
    input: PathBuf,

    /// Dump the raw `img64` tiles instead of the colour-corrected `img64cc`
    #[arg(long)]
    raw: bool,
}

impl Cli {
    fn dump_options(&self) -> DumpOptions {
        DumpOptions {
            color_corrected: !self.raw,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    let cli = Cli::parse();
    info!("🎨 {} v{} starting", config::APP_NAME, config::APP_VERSION);

    report(batch::run(&cli.input, cli.dump_options()))
}

/// Log how the run ended and pick the exit code
fn report(outcome: error::Result<batch::BatchSummary>) -> ExitCode {
    match outcome {
        Ok(summary) => {
            info!(
                "📊 Wrote {} tiles across {} exports",
                summary.tiles_written(),
                summary.exports.len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("❌ Extraction stopped: {}", e);
            ExitCode::FAILURE
        }
    }
}
