//! `greynoise query` / `greynoise stats` - GNQL queries.

use greynoise::{GreyNoiseApi, Value};

use super::{CommandError, Context};
use crate::cli::args::QueryArgs;

pub async fn query<A: GreyNoiseApi>(ctx: &Context<A>, args: QueryArgs) -> Result<Vec<Value>, CommandError> {
    Ok(vec![ctx.api.run_query(&args.query).await?])
}

pub async fn stats<A: GreyNoiseApi>(ctx: &Context<A>, args: QueryArgs) -> Result<Vec<Value>, CommandError> {
    Ok(vec![ctx.api.run_stats_query(&args.query).await?])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::testing::MockApi;
    use crate::cli::commands::{render, EXIT_FAILURE};
    use crate::output::OutputFormat;
    use serde_json::json;

    fn query_args() -> QueryArgs {
        QueryArgs {
            query: "<query>".to_string(),
        }
    }

    #[tokio::test]
    async fn test_query() {
        let ctx = Context::new(MockApi::returning_json("[]"), None);
        let records = query(&ctx, query_args()).await.unwrap();

        assert_eq!(render(OutputFormat::Json, &records).unwrap(), "[\n    []\n]");
        assert_eq!(ctx.api.calls(), ["run_query(<query>)"]);
    }

    #[tokio::test]
    async fn test_stats() {
        let ctx = Context::new(MockApi::returning_json("[]"), None);
        let records = stats(&ctx, query_args()).await.unwrap();

        assert_eq!(render(OutputFormat::Json, &records).unwrap(), "[\n    []\n]");
        assert_eq!(ctx.api.calls(), ["run_stats_query(<query>)"]);
    }

    #[tokio::test]
    async fn test_request_failure() {
        let ctx = Context::new(
            MockApi::failing(401, json!({"error": "forbidden", "status": "error"})),
            None,
        );

        let err = query(&ctx, query_args()).await.unwrap_err();
        assert_eq!(err.report(), "API error: forbidden");
        assert_eq!(err.exit_code(), EXIT_FAILURE);

        let err = stats(&ctx, query_args()).await.unwrap_err();
        assert_eq!(err.report(), "API error: forbidden");
    }
}
