const MARKDOWN_HARD_BREAK: &str = "  ";

pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Strip trailing whitespace unless the line ends in exactly two spaces after
/// some content, which is a hard line break.
pub(crate) fn strip_trailing_whitespace(line: &str) -> &str {
    let content = line.trim_end();
    let trailing = &line[content.len()..];
    if trailing == MARKDOWN_HARD_BREAK && !content.is_empty() {
        line
    } else {
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_hard_breaks() {
        assert_eq!(strip_trailing_whitespace("line break  "), "line break  ");
    }

    #[test]
    fn strips_everything_else() {
        assert_eq!(strip_trailing_whitespace("one "), "one");
        assert_eq!(strip_trailing_whitespace("three   "), "three");
        assert_eq!(strip_trailing_whitespace("tab\t"), "tab");
        assert_eq!(strip_trailing_whitespace("tab then spaces\t  "), "tab then spaces");
        assert_eq!(strip_trailing_whitespace("  "), "");
        assert_eq!(strip_trailing_whitespace("clean"), "clean");
    }

    #[test]
    fn blank_lines() {
        assert!(is_blank(""));
        assert!(is_blank(" \t "));
        assert!(!is_blank("  x"));
    }
}
