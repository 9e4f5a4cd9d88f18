//! HTML escaping for code span contents

/// Escape the characters HTML assigns meaning to
///
/// Ampersand first, so the entities emitted by the later replacements are
/// not themselves re-escaped.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}
