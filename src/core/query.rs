//! Request URL construction.

use crate::config::endpoints;
use crate::models::Endpoint;

/// Percent-encode a query component.
///
/// Leaves the same characters unescaped as `encodeURIComponent`, so the
/// result is identical to what the browser would produce.
pub fn encode_query_component(value: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    let mut out = String::with_capacity(value.len());
    for &byte in value.as_bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => {
                out.push('%');
                out.push(HEX[(byte >> 4) as usize] as char);
                out.push(HEX[(byte & 0x0f) as usize] as char);
            }
        }
    }
    out
}

/// URL of the market listing for `category`.
pub fn market_url(category: &str) -> String {
    format!(
        "{}?{}={}",
        Endpoint::Market.path(),
        endpoints::MARKET_CATEGORY_PARAM,
        encode_query_component(category)
    )
}
