//! GNQL (GreyNoise Query Language) endpoints.

use crate::GreyNoiseClient;
use greynoise_core::{Result, Value};

/// GNQL query endpoints
pub struct GnqlApi<'a> {
    client: &'a GreyNoiseClient,
}

impl<'a> GnqlApi<'a> {
    pub(crate) const fn new(client: &'a GreyNoiseClient) -> Self {
        Self { client }
    }

    /// Run a GNQL query and return the matching records
    ///
    /// The query is passed through untouched, e.g.
    /// `classification:malicious tags:Mirai`.
    pub async fn query(&self, query: &str) -> Result<Value> {
        self.client
            .get_with_query("/v2/experimental/gnql", &[("query", query)])
            .await
    }

    /// Get aggregate statistics for a GNQL query
    pub async fn stats(&self, query: &str) -> Result<Value> {
        self.client
            .get_with_query("/v2/experimental/gnql/stats", &[("query", query)])
            .await
    }
}
