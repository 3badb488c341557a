use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

/// An ATX heading: up to 3 spaces of indentation, 1-6 `#`, then whitespace or
/// the end of the line.
static ATX_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ {0,3}#{1,6}(?:[ \t]|$)").expect("ATX_HEADING regex is valid")
});

static EXTRA_SPACE_AFTER_HASHES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^( {0,3}#{1,6})[ \t]{2,}(\S)").expect("EXTRA_SPACE_AFTER_HASHES regex is valid")
});

const TRAILING_PUNCTUATION: &[char] = &[':', '.', '!', '?'];

pub(crate) fn is_heading(line: &str) -> bool {
    ATX_HEADING.is_match(line)
}

/// `##   Title` -> `## Title`
pub(crate) fn collapse_hash_spacing(line: &str) -> Cow<'_, str> {
    EXTRA_SPACE_AFTER_HASHES.replace(line, "$1 $2")
}

/// `## Title:` -> `## Title`
///
/// Every trailing punctuation mark goes, along with any whitespace around
/// them, so `## Really?!` becomes `## Really` in one step.
pub(crate) fn strip_trailing_punctuation(line: &str) -> Cow<'_, str> {
    let content = line.trim_end();
    if !content.ends_with(TRAILING_PUNCTUATION) {
        return line.into();
    }
    content
        .trim_end_matches(|c: char| TRAILING_PUNCTUATION.contains(&c) || c.is_whitespace())
        .to_owned()
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_atx_headings() {
        assert!(is_heading("# Title"));
        assert!(is_heading("###### Title"));
        assert!(is_heading("   ## Indented"));
        assert!(is_heading("##"));
        assert!(!is_heading("####### Too deep"));
        assert!(!is_heading("#hashtag"));
        assert!(!is_heading("    # code block"));
        assert!(!is_heading("text # not a heading"));
    }

    #[test]
    fn collapses_spacing_after_hashes() {
        assert_eq!(collapse_hash_spacing("##   Title"), "## Title");
        assert_eq!(collapse_hash_spacing("#\t\tTabs"), "# Tabs");
        assert_eq!(collapse_hash_spacing(" ###  Indented"), " ### Indented");
        assert!(matches!(collapse_hash_spacing("## Title"), Cow::Borrowed(_)));
        // nothing to keep after the marker
        assert!(matches!(collapse_hash_spacing("##   "), Cow::Borrowed(_)));
    }

    #[test]
    fn strips_trailing_punctuation() {
        assert_eq!(strip_trailing_punctuation("## Title:"), "## Title");
        assert_eq!(strip_trailing_punctuation("## Done."), "## Done");
        assert_eq!(strip_trailing_punctuation("## Really?!"), "## Really");
        assert_eq!(strip_trailing_punctuation("## Wait ...  "), "## Wait");
        assert_eq!(strip_trailing_punctuation("## Title :"), "## Title");
        assert_eq!(
            strip_trailing_punctuation("## Step 1: install"),
            "## Step 1: install"
        );
        assert!(matches!(
            strip_trailing_punctuation("## v1.0 release"),
            Cow::Borrowed(_)
        ));
    }
}
