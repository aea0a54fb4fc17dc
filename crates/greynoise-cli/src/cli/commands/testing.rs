//! Test double for the API client.

use async_trait::async_trait;
use greynoise::chrono::NaiveDate;
use greynoise::{GreyNoiseApi, GreyNoiseError, Result, Value};
use std::sync::Mutex;

/// Records every call and answers with a canned value or failure.
#[derive(Default)]
pub struct MockApi {
    response: Option<Value>,
    failure: Option<(u16, serde_json::Value)>,
    calls: Mutex<Vec<String>>,
}

impl MockApi {
    /// Answer every call with `value`.
    pub fn returning(value: Value) -> Self {
        Self {
            response: Some(value),
            ..Self::default()
        }
    }

    /// Answer every call with `value` parsed from JSON text.
    pub fn returning_json(text: &str) -> Self {
        Self::returning(serde_json::from_str(text).unwrap())
    }

    /// Fail every call with a request failure.
    pub fn failing(status: u16, body: serde_json::Value) -> Self {
        Self {
            failure: Some((status, body)),
            ..Self::default()
        }
    }

    /// Calls made so far, e.g. `get_context(0.0.0.0)`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self, call: String) -> Result<Value> {
        self.calls.lock().unwrap().push(call);
        if let Some((status, body)) = &self.failure {
            return Err(GreyNoiseError::RequestFailure {
                status: *status,
                body: body.clone(),
            });
        }
        Ok(self.response.clone().unwrap_or(Value::Null))
    }
}

#[async_trait]
impl GreyNoiseApi for MockApi {
    async fn get_noise(&self, date: Option<NaiveDate>) -> Result<Value> {
        let date = date.map(|d| d.to_string()).unwrap_or_default();
        self.answer(format!("get_noise({date})"))
    }

    async fn get_context(&self, ip_address: &str) -> Result<Value> {
        self.answer(format!("get_context({ip_address})"))
    }

    async fn get_noise_status(&self, ip_address: &str) -> Result<Value> {
        self.answer(format!("get_noise_status({ip_address})"))
    }

    async fn get_noise_status_bulk(&self, ip_addresses: &[String]) -> Result<Value> {
        self.answer(format!("get_noise_status_bulk({})", ip_addresses.join(",")))
    }

    async fn get_actors(&self) -> Result<Value> {
        self.answer("get_actors()".to_string())
    }

    async fn run_query(&self, query: &str) -> Result<Value> {
        self.answer(format!("run_query({query})"))
    }

    async fn run_stats_query(&self, query: &str) -> Result<Value> {
        self.answer(format!("run_stats_query({query})"))
    }
}
