//! Command-line argument definitions using clap.

use crate::output::OutputFormat;
use chrono::NaiveDate;
use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

/// Command-line interface for the GreyNoise API
///
/// Find out whether IP addresses are internet background noise, look up
/// their context, and query the GreyNoise dataset.
///
/// Save your API key once with `greynoise setup -k <KEY>`.
#[derive(Parser, Debug)]
#[command(name = "greynoise")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Key to include in API requests (overrides the saved key)
    #[arg(short = 'k', long, global = true)]
    pub api_key: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Read IP addresses from FILE ('-' for stdin) when none are given
    #[arg(short, long, global = true, value_name = "FILE")]
    pub input: Option<String>,

    /// Use this configuration file instead of the per-user default
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Base URL of the GreyNoise API
    #[arg(long, global = true, hide = true, env = "GREYNOISE_API_SERVER")]
    pub api_server: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Parse the process arguments, exiting with a usage error on failure.
    pub fn parse_checked() -> Self {
        Self::try_parse_checked_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Parse arguments, then apply the checks clap cannot express.
    ///
    /// `setup` needs `-k/--api-key`, which is a global option, so its
    /// presence is checked after parsing.
    pub fn try_parse_checked_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = Self::try_parse_from(args)?;

        if let Commands::Setup(setup) = &cli.command {
            if setup.api_key.as_deref().map_or(true, |key| key.trim().is_empty()) {
                return Err(Self::command().error(
                    ErrorKind::MissingRequiredArgument,
                    "the following required arguments were not provided:\n  --api-key <API_KEY>",
                ));
            }
        }

        Ok(cli)
    }
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Save the API key to the configuration file
    Setup(SetupArgs),

    #[command(flatten)]
    Api(ApiCommand),
}

/// Subcommands that query the GreyNoise API.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ApiCommand {
    /// Get all noise IPs generated by internet scanners, search engines and worms
    Noise(NoiseArgs),

    /// Get everything GreyNoise knows about IP addresses
    #[command(alias = "ip")]
    Context(IpArgs),

    /// Check whether IP addresses are internet background noise
    #[command(name = "quick_check", alias = "quick")]
    QuickCheck(IpArgs),

    /// Check several IP addresses with a single request
    #[command(name = "multi_quick_check")]
    MultiQuickCheck(IpArgs),

    /// List the profiles of known scanning actors
    Actors,

    /// Run a GNQL query
    Query(QueryArgs),

    /// Get aggregate statistics for a GNQL query
    Stats(QueryArgs),
}

impl ApiCommand {
    /// Name as typed on the command line
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Noise(_) => "noise",
            Self::Context(_) => "context",
            Self::QuickCheck(_) => "quick_check",
            Self::MultiQuickCheck(_) => "multi_quick_check",
            Self::Actors => "actors",
            Self::Query(_) => "query",
            Self::Stats(_) => "stats",
        }
    }

    /// Whether the plain text format has a summary for this command
    pub const fn supports_text(&self) -> bool {
        matches!(self, Self::QuickCheck(_) | Self::MultiQuickCheck(_))
    }
}

// ============================================================================
// Setup command
// ============================================================================

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct SetupArgs {
    /// Key to save, taken from the global `-k/--api-key`
    #[arg(from_global)]
    pub api_key: Option<String>,
}

// ============================================================================
// Noise command
// ============================================================================

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct NoiseArgs {
    /// Only return IPs seen on this day
    #[arg(short, long, value_name = "YYYY-MM-DD", value_parser = parse_date)]
    pub date: Option<NaiveDate>,
}

// ============================================================================
// IP commands
// ============================================================================

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct IpArgs {
    /// IP addresses to look up (read from --input when omitted)
    #[arg(value_name = "IP_ADDRESS", value_parser = parse_ip)]
    pub ip_addresses: Vec<String>,
}

// ============================================================================
// Query commands
// ============================================================================

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct QueryArgs {
    /// GNQL query (e.g., "classification:malicious tags:Mirai")
    pub query: String,
}

fn parse_ip(value: &str) -> Result<String, String> {
    greynoise::validate_ip(value)
        .map(|_| value.to_string())
        .map_err(|e| e.to_string())
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("expected a date formatted as YYYY-MM-DD, got '{value}'"))
}
