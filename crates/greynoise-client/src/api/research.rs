//! Research API endpoints.

use crate::GreyNoiseClient;
use greynoise_core::{Result, Value};

/// Research API endpoints
pub struct ResearchApi<'a> {
    client: &'a GreyNoiseClient,
}

impl<'a> ResearchApi<'a> {
    pub(crate) const fn new(client: &'a GreyNoiseClient) -> Self {
        Self { client }
    }

    /// Get the profiles of known scanning actors
    pub async fn actors(&self) -> Result<Value> {
        self.client.get("/v2/research/actors").await
    }
}
