//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use greynoise::GreyNoiseClient;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::config::{resolve_api_key, ConfigStore, API_KEY_ENV};
use crate::input::InputSource;

/// Run the CLI application.
///
/// Usage errors exit with status 2 (clap's own parse errors included),
/// everything else that fails exits with status 1.
pub async fn run() -> ExitCode {
    let cli = Cli::parse_checked();
    init_logging(cli.verbose);

    match execute(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<commands::CommandError>() {
            Some(command_err) => {
                eprintln!("{}", command_err.report());
                ExitCode::from(command_err.exit_code())
            }
            None => {
                eprintln!("Error: {err:#}");
                ExitCode::from(commands::EXIT_FAILURE)
            }
        },
    }
}

async fn execute(cli: Cli) -> Result<()> {
    let store = match cli.config {
        Some(path) => ConfigStore::at(path),
        None => ConfigStore::default_location()?,
    };

    let command = match cli.command {
        Commands::Setup(args) => {
            println!("{}", commands::setup::execute(&store, args)?);
            return Ok(());
        }
        Commands::Api(command) => command,
    };

    commands::check_format(&command, cli.format)?;

    // Get API key from flag, config file, or env
    let api_key = resolve_api_key(cli.api_key, &store, std::env::var(API_KEY_ENV).ok())?;

    let mut builder = GreyNoiseClient::builder(api_key);
    if let Some(url) = cli.api_server {
        builder = builder.base_url(url);
    }
    let client = builder.build()?;

    let ctx = commands::Context::new(client, cli.input.as_deref().map(InputSource::from_arg));
    let records = commands::dispatch(&ctx, command).await?;

    let output = commands::render(cli.format, &records)?;
    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}

/// Send logs to stderr. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("greynoise_client=debug,greynoise_cli=debug")
    } else {
        EnvFilter::new("error")
    };

    // Ignore error if a subscriber is already set
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
