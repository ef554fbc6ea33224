use std::io::{Write, stdout};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use memstat::config::{load_config, load_config_from_path};
use memstat::format::{format_header, format_row, format_totals};
use memstat::logging::init_tracing;
use memstat::system::collector::Collector;

const SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Parser)]
#[command(
    name = "memstat",
    about = "Print host memory usage in kB, MB and percent every second"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };
    init_tracing(&config.general)?;

    run().await
}

async fn run() -> Result<()> {
    let collector = Collector::native();
    let mut out = stdout();

    let total = collector.total()?;
    writeln!(out, "\n{}\n", format_totals(&total))?;
    writeln!(out, "{}", format_header())?;

    let mut ticker = tokio::time::interval(SAMPLE_INTERVAL);
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match collector.sample() {
                    Ok(sample) => {
                        writeln!(out, "{}", format_row(&sample))?;
                        out.flush()?;
                    }
                    Err(err) => tracing::warn!(error = %err, "skipping memory sample"),
                }
            }
            signal = &mut shutdown => {
                signal?;
                tracing::info!("interrupted, exiting");
                break;
            }
        }
    }

    Ok(())
}
