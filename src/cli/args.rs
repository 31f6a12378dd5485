//! Command-line argument parsing for the portal client.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

use thiserror::Error;

use crate::config::PortalConfig;

/// Values given on the command line. They take precedence over the
/// environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    pub backend_url: Option<String>,
    pub viewer: Option<String>,
}

impl CliOverrides {
    pub fn apply(self, mut config: PortalConfig) -> PortalConfig {
        if let Some(url) = self.backend_url {
            config = config.with_backend_url(url);
        }
        if let Some(viewer) = self.viewer {
            config = config.with_viewer(viewer);
        }
        config
    }
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    RunTui(CliOverrides),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("{0} requires a value")]
    MissingValue(&'static str),
}

/// Parse command-line arguments and return the appropriate command.
///
/// The first item is the program name and is skipped. Unknown arguments are
/// ignored.
///
/// # Examples
///
/// ```
/// use littleyears::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["littleyears".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut overrides = CliOverrides::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--backend" => {
                let value = args.next().ok_or(ArgsError::MissingValue("--backend"))?;
                overrides.backend_url = Some(value);
            }
            "--viewer" => {
                let value = args.next().ok_or(ArgsError::MissingValue("--viewer"))?;
                overrides.viewer = Some(value);
            }
            other => {
                if let Some(url) = other.strip_prefix("--backend=") {
                    overrides.backend_url = Some(url.to_string());
                } else if let Some(viewer) = other.strip_prefix("--viewer=") {
                    overrides.viewer = Some(viewer.to_string());
                }
            }
        }
    }

    Ok(CliCommand::RunTui(overrides))
}
