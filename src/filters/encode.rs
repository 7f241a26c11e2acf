//! Query string encoding helpers.

/// Percent-encodes `s` the way `encodeURIComponent` does: everything except
/// ASCII alphanumerics and `-_.!~*'()` becomes `%XX` per UTF-8 byte.
pub fn encode_component(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 2);
    for b in s.bytes() {
        match b {
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
            | b')' => result.push(b as char),
            _ => result.push_str(&format!("%{:02X}", b)),
        }
    }
    result
}

/// Collapses whitespace runs to one space, trims, and lowercases.
pub fn normalize_value(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
