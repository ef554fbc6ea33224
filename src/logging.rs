use color_eyre::eyre::{Result, eyre};
use tracing::Level;

use crate::config::GeneralConfig;

pub fn parse_level(level: &str) -> Level {
    match level.trim().to_ascii_lowercase().as_str() {
        "error" => Level::ERROR,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::WARN,
    }
}

/// Installs the global subscriber. Logs go to stderr; stdout carries only
/// the memory rows.
pub fn init_tracing(general: &GeneralConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(parse_level(&general.log_level))
        .with_writer(std::io::stderr);

    let installed = if general.log_format.eq_ignore_ascii_case("json") {
        tracing::subscriber::set_global_default(builder.with_ansi(false).json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    installed.map_err(|e| eyre!("failed to set tracing subscriber: {e}"))
}
