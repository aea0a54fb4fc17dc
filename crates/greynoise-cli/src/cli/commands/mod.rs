//! Command implementations.

pub mod actors;
pub mod context;
pub mod gnql;
pub mod noise;
pub mod quick;
pub mod setup;

#[cfg(test)]
pub(crate) mod testing;

use greynoise::{validate_ip, GreyNoiseApi, GreyNoiseError, Value};
use thiserror::Error;

use crate::cli::args::ApiCommand;
use crate::input::InputSource;
use crate::output::{self, OutputFormat};

/// Name of the positional IP argument, as shown in usage errors.
const IP_PARAM: &str = "[IP_ADDRESS]...";

/// Exit status for usage and validation errors.
pub const EXIT_USAGE: u8 = 2;

/// Exit status for failed requests.
pub const EXIT_FAILURE: u8 = 1;

/// Errors raised while running an API command.
#[derive(Error, Debug)]
pub enum CommandError {
    /// An argument failed validation before any request was made
    #[error("Invalid value for \"{param}\": {value}")]
    InvalidValue { param: &'static str, value: String },

    /// The selected output format has no rendering for this command
    #[error("output format '{format}' is not supported by '{command}'")]
    UnsupportedFormat {
        format: OutputFormat,
        command: &'static str,
    },

    /// The input source could not be read
    #[error("failed to read input: {0}")]
    Input(#[from] std::io::Error),

    /// Rendering the result failed
    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),

    /// The API client failed
    #[error(transparent)]
    Api(#[from] GreyNoiseError),
}

impl CommandError {
    /// Process exit status for this error.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidValue { .. } | Self::UnsupportedFormat { .. } => EXIT_USAGE,
            Self::Api(e) if e.is_validation_error() => EXIT_USAGE,
            Self::Input(_) | Self::Render(_) | Self::Api(_) => EXIT_FAILURE,
        }
    }

    /// Line shown to the user.
    ///
    /// API failures read `API error: <message>`; everything else is
    /// prefixed with `Error:`.
    pub fn report(&self) -> String {
        match self {
            Self::Api(e @ GreyNoiseError::RequestFailure { .. }) => e.to_string(),
            other => format!("Error: {other}"),
        }
    }
}

/// Shared context for all API commands.
pub struct Context<A> {
    /// Client the commands query
    pub api: A,

    /// Where to read IP addresses from when none are passed as arguments
    pub input: Option<InputSource>,
}

impl<A: GreyNoiseApi> Context<A> {
    pub const fn new(api: A, input: Option<InputSource>) -> Self {
        Self { api, input }
    }

    /// IP addresses to work on: the arguments if any, else the lines of the
    /// input source, else nothing. Every address is validated.
    pub fn ip_addresses(&self, args: Vec<String>) -> Result<Vec<String>, CommandError> {
        let ips = match &self.input {
            Some(input) if args.is_empty() => input.read_lines()?,
            _ => args,
        };

        for ip in &ips {
            if validate_ip(ip).is_err() {
                return Err(CommandError::InvalidValue {
                    param: IP_PARAM,
                    value: ip.clone(),
                });
            }
        }

        Ok(ips)
    }
}

/// Fail early when the output format cannot render this command's result.
pub fn check_format(command: &ApiCommand, format: OutputFormat) -> Result<(), CommandError> {
    match format {
        OutputFormat::Txt if !command.supports_text() => Err(CommandError::UnsupportedFormat {
            format,
            command: command.name(),
        }),
        _ => Ok(()),
    }
}

/// Run one API command and return its records in output order.
pub async fn dispatch<A: GreyNoiseApi>(
    ctx: &Context<A>,
    command: ApiCommand,
) -> Result<Vec<Value>, CommandError> {
    match command {
        ApiCommand::Noise(args) => noise::execute(ctx, args).await,
        ApiCommand::Context(args) => context::execute(ctx, args).await,
        ApiCommand::QuickCheck(args) => quick::execute(ctx, args).await,
        ApiCommand::MultiQuickCheck(args) => quick::execute_multi(ctx, args).await,
        ApiCommand::Actors => actors::execute(ctx).await,
        ApiCommand::Query(args) => gnql::query(ctx, args).await,
        ApiCommand::Stats(args) => gnql::stats(ctx, args).await,
    }
}

/// Serialize records in the selected format.
pub fn render(format: OutputFormat, records: &[Value]) -> Result<String, CommandError> {
    Ok(match format {
        OutputFormat::Json => output::json::render(records)?,
        OutputFormat::Xml => output::xml::render(records),
        OutputFormat::Txt => output::text::quick_check(records),
    })
}

/// Treat a list result as the record sequence; wrap anything else.
pub(crate) fn flatten(value: Value) -> Vec<Value> {
    match value {
        Value::List(items) => items,
        other => vec![other],
    }
}
