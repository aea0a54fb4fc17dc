//! Noise classification endpoints.

use crate::GreyNoiseClient;
use chrono::NaiveDate;
use greynoise_core::{code_message, validate_ip, Result, Value};
use serde::Serialize;
use std::net::IpAddr;
use tracing::debug;

/// Noise API endpoints
pub struct NoiseApi<'a> {
    client: &'a GreyNoiseClient,
}

#[derive(Serialize)]
struct MultiQuickRequest<'a> {
    ips: &'a [String],
}

impl<'a> NoiseApi<'a> {
    pub(crate) const fn new(client: &'a GreyNoiseClient) -> Self {
        Self { client }
    }

    /// Get the IPs generated by internet scanners, search engines and worms
    ///
    /// With a date, only the IPs observed on that day are returned.
    pub async fn bulk(&self, date: Option<NaiveDate>) -> Result<Value> {
        let path = match date {
            Some(date) => format!("/v2/noise/bulk/{}", date.format("%Y-%m-%d")),
            None => "/v2/noise/bulk".to_string(),
        };
        self.client.get(&path).await
    }

    /// Get everything known about an IP address
    pub async fn context(&self, ip: &str) -> Result<Value> {
        validate_ip(ip)?;
        self.client.get(&format!("/v2/noise/context/{ip}")).await
    }

    /// Check whether an IP address is internet background noise
    pub async fn quick(&self, ip: &str) -> Result<Value> {
        validate_ip(ip)?;
        let mut status = self.client.get(&format!("/v2/noise/quick/{ip}")).await?;
        annotate_code(&mut status);
        Ok(status)
    }

    /// Check several IP addresses in a single request
    ///
    /// Results come back in the same order as `ips`, whatever order the
    /// service answered in.
    pub async fn multi_quick(&self, ips: &[String]) -> Result<Value> {
        for ip in ips {
            validate_ip(ip)?;
        }
        if ips.is_empty() {
            return Ok(Value::List(Vec::new()));
        }

        debug!(count = ips.len(), "multi quick check");
        let response: Value = self
            .client
            .post("/v2/noise/multi/quick", &MultiQuickRequest { ips })
            .await?;

        match response {
            Value::List(records) => {
                let mut ordered = order_by_input(ips, records);
                ordered.iter_mut().for_each(annotate_code);
                Ok(Value::List(ordered))
            }
            other => Ok(other),
        }
    }
}

/// Append a `code_message` field describing a known classification code.
fn annotate_code(status: &mut Value) {
    let Value::Dict(record) = status else {
        return;
    };
    let message = record
        .get("code")
        .and_then(Value::as_str)
        .and_then(code_message);
    if let Some(message) = message {
        record.insert("code_message", Value::from(message));
    }
}

/// Pair each requested IP with the record echoing it.
///
/// Addresses are compared parsed, so `2001:DB8::1` matches `2001:db8::1` and
/// an IPv4-mapped IPv6 address matches its IPv4 form. Records that match no
/// requested IP keep their relative order and are appended at the end. If
/// any echoed `ip` does not parse, the service order is kept as is.
fn order_by_input(ips: &[String], records: Vec<Value>) -> Vec<Value> {
    let keys: Option<Vec<Option<IpAddr>>> = records
        .iter()
        .map(|record| match record.get("ip").and_then(Value::as_str) {
            Some(ip) => validate_ip(ip).ok().map(|addr| Some(addr.to_canonical())),
            None => Some(None),
        })
        .collect();
    let Some(keys) = keys else {
        return records;
    };

    let mut pending: Vec<(Option<IpAddr>, Option<Value>)> =
        keys.into_iter().zip(records.into_iter().map(Some)).collect();
    let mut ordered = Vec::with_capacity(pending.len());

    for addr in ips.iter().filter_map(|ip| validate_ip(ip).ok()) {
        let addr = addr.to_canonical();
        let slot = pending
            .iter_mut()
            .find(|slot| slot.1.is_some() && slot.0 == Some(addr));
        if let Some(record) = slot.and_then(|slot| slot.1.take()) {
            ordered.push(record);
        }
    }

    ordered.extend(pending.into_iter().filter_map(|(_, record)| record));
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use greynoise_core::Record;

    fn status(ip: &str, noise: bool) -> Value {
        let mut record = Record::new();
        record.insert("ip", Value::from(ip));
        record.insert("noise", Value::from(noise));
        Value::Dict(record)
    }

    fn ips_of(records: &[Value]) -> Vec<&str> {
        records
            .iter()
            .filter_map(|r| r.get("ip").and_then(Value::as_str))
            .collect()
    }

    #[test]
    fn test_order_by_input() {
        let ips = vec!["0.0.0.0".to_string(), "0.0.0.1".to_string()];
        let records = vec![status("0.0.0.1", false), status("0.0.0.0", true)];
        let ordered = order_by_input(&ips, records);
        assert_eq!(ips_of(&ordered), ["0.0.0.0", "0.0.0.1"]);
    }

    #[test]
    fn test_order_by_input_compares_addresses() {
        let ips = vec!["2001:DB8::1".to_string(), "1.1.1.1".to_string()];
        let records = vec![status("2001:db8::1", true), status("1.1.1.1", false)];
        let ordered = order_by_input(&ips, records);
        assert_eq!(ips_of(&ordered), ["2001:db8::1", "1.1.1.1"]);

        let ips = vec!["1.1.1.1".to_string(), "2001:db8:0:0:0:0:0:2".to_string()];
        let records = vec![status("2001:db8::2", false), status("::ffff:1.1.1.1", true)];
        let ordered = order_by_input(&ips, records);
        assert_eq!(ips_of(&ordered), ["::ffff:1.1.1.1", "2001:db8::2"]);
    }

    #[test]
    fn test_order_by_input_unparsable_echo_keeps_service_order() {
        let ips = vec!["0.0.0.0".to_string(), "0.0.0.1".to_string()];
        let records = vec![status("0.0.0.1", false), status("bogus", true)];
        let ordered = order_by_input(&ips, records);
        assert_eq!(ips_of(&ordered), ["0.0.0.1", "bogus"]);
    }

    #[test]
    fn test_order_by_input_keeps_unmatched_records() {
        let ips = vec!["1.1.1.1".to_string(), "2.2.2.2".to_string()];
        let records = vec![status("9.9.9.9", true), status("2.2.2.2", false)];
        let ordered = order_by_input(&ips, records);
        assert_eq!(ips_of(&ordered), ["2.2.2.2", "9.9.9.9"]);
    }

    #[test]
    fn test_order_by_input_duplicate_ips() {
        let ips = vec!["1.1.1.1".to_string(), "1.1.1.1".to_string()];
        let records = vec![status("1.1.1.1", true), status("1.1.1.1", true)];
        assert_eq!(order_by_input(&ips, records).len(), 2);
    }

    #[test]
    fn test_annotate_code() {
        let mut value: Value = serde_json::from_str(r#"{"code": "0x00", "ip": "8.8.8.8", "noise": false}"#).unwrap();
        annotate_code(&mut value);
        assert_eq!(
            value.get("code_message").and_then(Value::as_str),
            Some("IP has never been observed scanning the Internet")
        );

        let mut unknown: Value = serde_json::from_str(r#"{"code": "0xff"}"#).unwrap();
        annotate_code(&mut unknown);
        assert!(unknown.get("code_message").is_none());
    }
}
