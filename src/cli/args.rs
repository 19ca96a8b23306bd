//! Command-line argument parsing for the ClgMate client.

use std::path::PathBuf;

use crate::ads::Platform;
use crate::error::ConfigError;
use crate::startup::parse_budget;

pub const HELP_TEXT: &str = "\
clgmate - campus discovery in your terminal

USAGE:
    clgmate [OPTIONS]

OPTIONS:
    --profiles <PATH>      Load the discovery queue from a JSON file
    --chat-budget <N>      Chat requests available this session (default 3)
    --platform <NAME>      Simulate a device platform (ios, android)
    --skip-splash          Start at the vibe check
    --no-ads               Never show banner ads
    -V, --version          Print version information
    -h, --help             Print this help

KEYS (discovery):
    p / Left               Pass
    c / Right / Enter      Send a chat request
    a                      Open or close the banner ad
    r                      Retry a failed profile load
    q / Ctrl+C             Quit
";

/// Flags that adjust the environment-derived configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    pub chat_budget: Option<u32>,
    pub profiles_path: Option<PathBuf>,
    pub platform: Option<Platform>,
    pub skip_splash: bool,
    pub no_ads: bool,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI (default)
    Run(CliOverrides),
}

/// Parse command-line arguments, skipping the program name.
///
/// # Examples
///
/// ```
/// use clgmate::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["clgmate".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap(), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ConfigError>
where
    I: Iterator<Item = String>,
{
    let mut overrides = CliOverrides::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--skip-splash" => overrides.skip_splash = true,
            "--no-ads" => overrides.no_ads = true,
            "--profiles" => {
                overrides.profiles_path = Some(PathBuf::from(value_for(&arg, args.next())?));
            }
            "--chat-budget" => {
                let raw = value_for(&arg, args.next())?;
                overrides.chat_budget = Some(parse_budget(&arg, &raw)?);
            }
            "--platform" => {
                overrides.platform = Some(value_for(&arg, args.next())?.parse()?);
            }
            _ => {}
        }
    }
    Ok(CliCommand::Run(overrides))
}

fn value_for(flag: &str, value: Option<String>) -> Result<String, ConfigError> {
    value.ok_or_else(|| ConfigError::MissingArgument {
        flag: flag.to_string(),
    })
}
