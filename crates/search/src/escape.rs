//! Escaping of user-supplied text for embedding in JSON string literals.

/// Escape `input` so it can sit inside a JSON string literal.
///
/// Quotes, backslashes, and the common whitespace controls get their
/// two-character escapes; any other control character becomes `\u00xx`.
/// U+2028 and U+2029 are JSON-legal but terminate lines inside JavaScript
/// string literals, so they are always escaped as well.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if (c as u32) <= 0x1f => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}
