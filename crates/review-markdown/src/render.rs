//! Markdown-to-markup rendering passes

use crate::escape::escape_html;
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Render chat-message markdown into markup safe to inject into the DOM
///
/// Recognizes fenced and inline code spans, bold and italic emphasis, and
/// newlines. Code span contents are HTML-escaped before any markup is added,
/// so embedded tags cannot execute; text outside code spans is left as-is.
///
/// The passes run in a fixed order: fenced code, inline code, bold, italic,
/// line breaks. Bold runs before italic so a `**pair**` is not consumed as
/// two italic markers, and the code passes run first so their delimiters are
/// gone before emphasis matching starts.
///
/// Never fails: unmatched delimiters are left as literal characters, so an
/// unterminated fence renders as plain text rather than unbalanced markup.
///
/// # Example
///
/// ```
/// use review_markdown::render_markdown;
///
/// assert_eq!(
///     render_markdown("run `cargo test` **now**"),
///     "run <code>cargo test</code> <strong>now</strong>"
/// );
/// ```
pub fn render_markdown(text: &str) -> String {
    static FENCED: OnceLock<Regex> = OnceLock::new();
    static INLINE: OnceLock<Regex> = OnceLock::new();
    static BOLD: OnceLock<Regex> = OnceLock::new();
    static ITALIC: OnceLock<Regex> = OnceLock::new();

    let fenced = FENCED.get_or_init(|| Regex::new(r"(?s)```(.*?)```").unwrap());
    let inline = INLINE.get_or_init(|| Regex::new(r"`([^`]+)`").unwrap());
    let bold = BOLD.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
    let italic = ITALIC.get_or_init(|| Regex::new(r"\*(.*?)\*").unwrap());

    let text = fenced.replace_all(text, |caps: &Captures| {
        format!(
            "<pre class=\"code-block\"><code>{}</code></pre>",
            escape_html(&caps[1])
        )
    });

    let text = inline.replace_all(&text, |caps: &Captures| {
        format!("<code>{}</code>", escape_html(&caps[1]))
    });

    let text = bold.replace_all(&text, "<strong>$1</strong>");
    let text = italic.replace_all(&text, "<em>$1</em>");

    text.replace('\n', "<br />")
}
