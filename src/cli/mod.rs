pub mod analyze;
pub mod args;
pub mod sponsor;
pub mod valuation;

pub use analyze::handle_analyze_command;
pub use args::{Cli, CliCommand, OutputFormat};
pub use sponsor::handle_sponsor_command;
pub use valuation::handle_valuation_command;

use crate::config::Config;
use clap::ValueEnum;
use tracing::warn;

/// Resolve the output format: CLI flag first, then the config file, then
/// the command's own default.
pub(crate) fn resolve_format(
    flag: Option<OutputFormat>,
    config: &Config,
    default: OutputFormat,
) -> OutputFormat {
    if let Some(format) = flag {
        return format;
    }

    if let Some(configured) = config.output.format.as_deref() {
        match OutputFormat::from_str(configured, true) {
            Ok(format) => return format,
            Err(_) => warn!("Ignoring unknown output format {:?} in config", configured),
        }
    }

    default
}

/// Load the config without letting a broken config file fail the command.
pub(crate) fn load_config_or_default() -> Config {
    Config::load().unwrap_or_else(|err| {
        warn!("Falling back to default config: {err:#}");
        Config::default()
    })
}
