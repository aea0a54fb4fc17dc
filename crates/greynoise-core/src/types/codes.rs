/// Meaning of a quick-check classification code such as `0x01`.
///
/// Returns `None` for codes the service has not documented.
#[must_use]
pub fn code_message(code: &str) -> Option<&'static str> {
    let message = match code {
        "0x00" => "IP has never been observed scanning the Internet",
        "0x01" => "IP has been observed by the GreyNoise sensor network",
        "0x02" => {
            "IP has been observed scanning the GreyNoise sensor network, \
             but has not completed a full connection, meaning this can be spoofed"
        }
        "0x03" => "IP is adjacent to another host that has been directly observed by the GreyNoise sensor network",
        "0x04" => "RESERVED",
        "0x05" => "IP is commonly spoofed in Internet-scan activity",
        "0x06" => {
            "IP has been observed as noise, but this host belongs to a cloud provider \
             where IPs can be cycled frequently"
        }
        "0x07" => "IP is invalid",
        "0x08" => {
            "IP was classified as noise, but has not been observed engaging in \
             Internet-wide scans or attacks in over 60 days"
        }
        _ => return None,
    };
    Some(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(
            code_message("0x01"),
            Some("IP has been observed by the GreyNoise sensor network")
        );
        assert_eq!(code_message("0x07"), Some("IP is invalid"));
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(code_message("0x99"), None);
        assert_eq!(code_message(""), None);
    }
}
