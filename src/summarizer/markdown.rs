// Light Markdown to HTML conversion for model output
// Author: kelexine (https://github.com/kelexine)

use once_cell::sync::Lazy;
use regex::Regex;

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*]+?)\*\*").unwrap());
// Applied after BOLD so no double-star sequences remain.
static EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*\n]+?)\*").unwrap());

/// Convert the model's light Markdown (bold, emphasis, blank-line paragraphs)
/// into HTML. Models are instructed to answer in plain text; this catches the
/// formatting they emit anyway.
pub fn to_html(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }

    let text = BOLD.replace_all(text, "<strong>$1</strong>");
    let text = EMPHASIS.replace_all(&text, "<em>$1</em>");

    text.split("\n\n")
        .filter_map(|para| {
            let para = para.trim();
            if para.is_empty() {
                None
            } else if para.starts_with('<') {
                Some(para.to_string())
            } else {
                Some(format!("<p>{para}</p>"))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(to_html(""), "");
        assert_eq!(to_html("   \n  "), "");
    }

    #[test]
    fn test_bold_conversion() {
        assert_eq!(
            to_html("Rust is **fast** and **safe**."),
            "<p>Rust is <strong>fast</strong> and <strong>safe</strong>.</p>"
        );
    }

    #[test]
    fn test_emphasis_conversion() {
        assert_eq!(
            to_html("An *important* point."),
            "<p>An <em>important</em> point.</p>"
        );
    }

    #[test]
    fn test_bold_takes_precedence_over_emphasis() {
        // The converted text now starts with markup, so it is not re-wrapped.
        assert_eq!(
            to_html("**bold** and *em*"),
            "<strong>bold</strong> and <em>em</em>"
        );
    }

    #[test]
    fn test_paragraph_wrapping() {
        let html = to_html("First paragraph.\n\nSecond paragraph.");
        assert_eq!(html, "<p>First paragraph.</p>\n<p>Second paragraph.</p>");
    }

    #[test]
    fn test_existing_markup_left_unwrapped() {
        let html = to_html("<p>Already wrapped.</p>\n\nPlain text.");
        assert_eq!(html, "<p>Already wrapped.</p>\n<p>Plain text.</p>");
    }
}
