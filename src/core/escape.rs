//! HTML escaping for values interpolated into rendered fragments.
//!
//! Every backend-supplied string passes through one of these before it
//! reaches `innerHTML`.

/// Escape text for use inside an element body.
///
/// Matches what a browser produces when a string is assigned as text
/// content and read back as HTML: `&`, `<`, `>` and non-breaking spaces
/// are replaced with entities.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text for use inside a double- or single-quoted attribute value.
pub fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
