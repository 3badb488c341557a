use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

// Content has to start and end on something other than whitespace or the
// marker character, so `** a ** b **` pairs the first two markers only.
static STRONG_ASTERISKS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*[ \t]*([^*\s][^*]*?)[ \t]*\*\*").expect("STRONG_ASTERISKS regex is valid")
});

static STRONG_UNDERSCORES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"__[ \t]*([^_\s][^_]*?)[ \t]*__").expect("STRONG_UNDERSCORES regex is valid")
});

/// `** bold **` -> `**bold**`, and the same for `__`.
pub(crate) fn tighten_strong_markers(text: &str) -> Cow<'_, str> {
    match tighten(&STRONG_ASTERISKS, "**", text) {
        Cow::Borrowed(_) => tighten(&STRONG_UNDERSCORES, "__", text),
        Cow::Owned(rewritten) => tighten(&STRONG_UNDERSCORES, "__", &rewritten)
            .into_owned()
            .into(),
    }
}

/// Rebuild `text` only when some span actually had whitespace inside its markers.
fn tighten<'a>(regex: &Regex, marker: &str, text: &'a str) -> Cow<'a, str> {
    let mut rewritten = String::new();
    let mut last = 0;
    for captures in regex.captures_iter(text) {
        let (Some(span), Some(inner)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        if span.len() == inner.len() + 2 * marker.len() {
            continue;
        }
        rewritten.push_str(&text[last..span.start()]);
        rewritten.push_str(marker);
        rewritten.push_str(inner.as_str());
        rewritten.push_str(marker);
        last = span.end();
    }
    if last == 0 {
        return text.into();
    }
    rewritten.push_str(&text[last..]);
    rewritten.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_inner_spaces() {
        assert_eq!(tighten_strong_markers("**  bold text  **"), "**bold text**");
        assert_eq!(tighten_strong_markers("** leading**"), "**leading**");
        assert_eq!(tighten_strong_markers("**trailing **"), "**trailing**");
        assert_eq!(tighten_strong_markers("__ under __"), "__under__");
        assert_eq!(
            tighten_strong_markers("a ** b ** and ** c ** d"),
            "a **b** and **c** d"
        );
    }

    #[test]
    fn pairs_markers_from_the_left() {
        assert_eq!(tighten_strong_markers("**a** b **c**"), "**a** b **c**");
        assert_eq!(tighten_strong_markers("**a** ** b**"), "**a** **b**");
        assert_eq!(tighten_strong_markers("a ** b ** c ** d"), "a **b** c ** d");
    }

    #[test]
    fn leaves_other_markup_alone() {
        for text in [
            "**already tight**",
            "***bold italic***",
            "* * *",
            "**   **",
            "2 ** 8",
            "__init__.py and __main__",
            "*single emphasis*",
            "** a * b **",
            "__ a _ b __",
        ] {
            assert!(
                matches!(tighten_strong_markers(text), Cow::Borrowed(_)),
                "{text}"
            );
        }
    }
}
