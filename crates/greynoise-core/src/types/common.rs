use crate::{GreyNoiseError, Result};
use std::net::IpAddr;

/// Check that `ip` is a syntactically valid IPv4 or IPv6 address.
///
/// Surrounding whitespace is not accepted; callers reading from files are
/// expected to trim lines first.
pub fn validate_ip(ip: &str) -> Result<IpAddr> {
    ip.parse::<IpAddr>()
        .map_err(|_| GreyNoiseError::InvalidIp(ip.to_string()))
}
