//! Tiny percent-encoder for building query strings.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

/// Percent-encode a value for use in a query string component.
///
/// Unreserved characters pass through untouched; everything else is encoded
/// byte by byte, so multi-byte UTF-8 sequences come out as one `%XX` per byte.
pub fn encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                out.push('%');
                out.push(char::from_digit(u32::from(byte >> 4), 16).unwrap_or('0').to_ascii_uppercase());
                out.push(char::from_digit(u32::from(byte & 0xf), 16).unwrap_or('0').to_ascii_uppercase());
            }
        }
    }
    out
}
