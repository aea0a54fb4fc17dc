//! The query surface command front-ends program against.

use crate::GreyNoiseClient;
use async_trait::async_trait;
use chrono::NaiveDate;
use greynoise_core::{Result, Value};
use tracing::instrument;

/// One method per supported GreyNoise query.
///
/// Each call issues at most one HTTP request and never retries.
#[async_trait]
pub trait GreyNoiseApi: Send + Sync {
    /// Noise IP list, optionally restricted to one day
    async fn get_noise(&self, date: Option<NaiveDate>) -> Result<Value>;

    /// Full context for one IP address
    async fn get_context(&self, ip_address: &str) -> Result<Value>;

    /// Noise classification for one IP address
    async fn get_noise_status(&self, ip_address: &str) -> Result<Value>;

    /// Noise classification for several IP addresses, in input order
    async fn get_noise_status_bulk(&self, ip_addresses: &[String]) -> Result<Value>;

    /// Known actor profiles
    async fn get_actors(&self) -> Result<Value>;

    /// Records matching a GNQL query
    async fn run_query(&self, query: &str) -> Result<Value>;

    /// Aggregate statistics for a GNQL query
    async fn run_stats_query(&self, query: &str) -> Result<Value>;
}

#[async_trait]
impl GreyNoiseApi for GreyNoiseClient {
    #[instrument(skip(self))]
    async fn get_noise(&self, date: Option<NaiveDate>) -> Result<Value> {
        self.noise().bulk(date).await
    }

    #[instrument(skip(self))]
    async fn get_context(&self, ip_address: &str) -> Result<Value> {
        self.noise().context(ip_address).await
    }

    #[instrument(skip(self))]
    async fn get_noise_status(&self, ip_address: &str) -> Result<Value> {
        self.noise().quick(ip_address).await
    }

    #[instrument(skip(self))]
    async fn get_noise_status_bulk(&self, ip_addresses: &[String]) -> Result<Value> {
        self.noise().multi_quick(ip_addresses).await
    }

    #[instrument(skip(self))]
    async fn get_actors(&self) -> Result<Value> {
        self.research().actors().await
    }

    #[instrument(skip(self))]
    async fn run_query(&self, query: &str) -> Result<Value> {
        self.gnql().query(query).await
    }

    #[instrument(skip(self))]
    async fn run_stats_query(&self, query: &str) -> Result<Value> {
        self.gnql().stats(query).await
    }
}
