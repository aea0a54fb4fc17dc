//! `greynoise context` - Everything GreyNoise knows about IP addresses.

use greynoise::{GreyNoiseApi, Value};
use tracing::debug;

use super::{CommandError, Context};
use crate::cli::args::IpArgs;

pub async fn execute<A: GreyNoiseApi>(ctx: &Context<A>, args: IpArgs) -> Result<Vec<Value>, CommandError> {
    let ips = ctx.ip_addresses(args.ip_addresses)?;
    debug!(count = ips.len(), "looking up IP context");

    // One request per address, answered in input order
    let mut records = Vec::with_capacity(ips.len());
    for ip in &ips {
        records.push(ctx.api.get_context(ip).await?);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::testing::MockApi;
    use crate::cli::commands::{render, EXIT_FAILURE, EXIT_USAGE};
    use crate::input::InputSource;
    use crate::output::OutputFormat;
    use serde_json::json;
    use std::io::Write;

    fn ip_args(ips: &[&str]) -> IpArgs {
        IpArgs {
            ip_addresses: ips.iter().map(ToString::to_string).collect(),
        }
    }

    #[tokio::test]
    async fn test_context() {
        let ctx = Context::new(MockApi::returning_json("{}"), None);
        let records = execute(&ctx, ip_args(&["0.0.0.0"])).await.unwrap();

        assert_eq!(render(OutputFormat::Json, &records).unwrap(), "[\n    {}\n]");
        assert_eq!(ctx.api.calls(), ["get_context(0.0.0.0)"]);
    }

    #[tokio::test]
    async fn test_one_request_per_ip() {
        let ctx = Context::new(MockApi::returning_json("{}"), None);
        let records = execute(&ctx, ip_args(&["0.0.0.0", "0.0.0.1"])).await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(ctx.api.calls(), ["get_context(0.0.0.0)", "get_context(0.0.0.1)"]);
    }

    #[tokio::test]
    async fn test_input_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "0.0.0.0").unwrap();
        let ctx = Context::new(
            MockApi::returning_json("{}"),
            Some(InputSource::File(file.path().into())),
        );

        let records = execute(&ctx, IpArgs::default()).await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(ctx.api.calls(), ["get_context(0.0.0.0)"]);
    }

    #[tokio::test]
    async fn test_missing_ip_address() {
        let ctx = Context::new(MockApi::returning_json("{}"), None);
        let records = execute(&ctx, IpArgs::default()).await.unwrap();

        assert_eq!(render(OutputFormat::Json, &records).unwrap(), "[]");
        assert!(ctx.api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_ip_address() {
        let ctx = Context::new(MockApi::returning_json("{}"), None);
        let err = execute(&ctx, ip_args(&["not-an-ip"])).await.unwrap_err();

        assert_eq!(err.exit_code(), EXIT_USAGE);
        assert!(err.report().contains("not-an-ip"));
        assert!(ctx.api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_request_failure() {
        let ctx = Context::new(
            MockApi::failing(401, json!({"error": "forbidden", "status": "error"})),
            None,
        );
        let err = execute(&ctx, ip_args(&["0.0.0.0"])).await.unwrap_err();

        assert_eq!(err.report(), "API error: forbidden");
        assert_eq!(err.exit_code(), EXIT_FAILURE);
    }
}
