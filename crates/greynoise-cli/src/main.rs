//! greynoise - GreyNoise threat intelligence from the command line
//!
//! Quick checks, IP context, GNQL queries and actor lookups against the
//! GreyNoise API.

use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    greynoise_cli::run().await
}
