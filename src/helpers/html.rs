//! HTML helper functions

/// Escape HTML special characters
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Strip HTML tags from content
pub fn strip_html(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

/// Prune plain text to at most `length` characters, cutting on a word
/// boundary and appending an ellipsis when anything was removed.
pub fn prune_text(text: &str, length: usize) -> String {
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if text.chars().count() <= length {
        return text;
    }

    let cut: String = text.chars().take(length).collect();
    let pruned = match cut.rfind(' ') {
        Some(pos) if pos > 0 => &cut[..pos],
        _ => cut.as_str(),
    };

    format!("{}…", pruned.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>&</b>"), "&lt;b&gt;&amp;&lt;/b&gt;");
    }

    #[test]
    fn test_strip_html() {
        assert_eq!(strip_html("<p>Hello <em>world</em></p>"), "Hello world");
    }

    #[test]
    fn test_prune_short_text_is_untouched() {
        assert_eq!(prune_text("short text", 160), "short text");
    }

    #[test]
    fn test_prune_cuts_on_word_boundary() {
        let pruned = prune_text("alpha beta gamma delta", 12);
        assert_eq!(pruned, "alpha beta…");
    }

    #[test]
    fn test_prune_collapses_whitespace() {
        assert_eq!(prune_text("one\n  two\tthree", 160), "one two three");
    }
}
