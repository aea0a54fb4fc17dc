//! Plain text summaries.

use greynoise::Value;

/// One line per quick-check record, e.g. `8.8.8.8 is classified as NOT NOISE.`
///
/// A record without a boolean `noise` field counts as not noise.
pub fn quick_check(records: &[Value]) -> String {
    records
        .iter()
        .map(|record| {
            let ip = record.get("ip").and_then(Value::as_str).unwrap_or("unknown");
            let noise = record.get("noise").and_then(Value::as_bool).unwrap_or(false);
            let label = if noise { "NOISE" } else { "NOT NOISE" };
            format!("{ip} is classified as {label}.")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
