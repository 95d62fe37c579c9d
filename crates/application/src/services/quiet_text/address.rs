use std::fmt::Write;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Text form of raw address bytes from a dnstap record.
///
/// IPv4-mapped IPv6 addresses print as dotted quads. Lengths other than 4 or 16
/// print as `?` and the hex bytes, an empty slice as `<nil>`.
pub fn format_address(bytes: &[u8]) -> String {
    if let Ok(octets) = <[u8; 4]>::try_from(bytes) {
        return Ipv4Addr::from(octets).to_string();
    }

    if let Ok(octets) = <[u8; 16]>::try_from(bytes) {
        let v6 = Ipv6Addr::from(octets);
        return match v6.to_ipv4_mapped() {
            Some(v4) => v4.to_string(),
            None => v6.to_string(),
        };
    }

    if bytes.is_empty() {
        return "<nil>".to_string();
    }

    let mut out = String::with_capacity(1 + bytes.len() * 2);
    out.push('?');
    for byte in bytes {
        let _ = write!(out, "{:02x}", byte);
    }
    out
}
