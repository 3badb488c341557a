const FENCE: &str = "```";

/// Prefixes of the first line of code that hint at its language, checked in
/// order. Matching is against the trimmed line.
const LANGUAGE_HINTS: &[(&[&str], &str)] = &[
    (&["import", "def ", "class ", "print("], "python"),
    (&["const ", "let ", "var ", "function"], "javascript"),
    (&["docker", "FROM", "RUN"], "dockerfile"),
    (&["$", "#"], "bash"),
];

/// A line whose trimmed content starts with three or more backticks.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct FenceMarker<'a> {
    pub(crate) indent: &'a str,
    pub(crate) backticks: usize,
    /// Language tag and anything else after the backticks, trimmed.
    pub(crate) info: &'a str,
}

impl<'a> FenceMarker<'a> {
    pub(crate) fn parse(line: &'a str) -> Option<Self> {
        let rest = line.trim_start();
        if !rest.starts_with(FENCE) {
            return None;
        }
        let indent = &line[..line.len() - rest.len()];
        let backticks = rest.bytes().take_while(|b| *b == b'`').count();
        Some(Self {
            indent,
            backticks,
            info: rest[backticks..].trim(),
        })
    }

    /// A closing fence has no info string and at least as many backticks as
    /// the fence it closes.
    pub(crate) fn closes(&self, opening_backticks: usize) -> bool {
        self.info.is_empty() && self.backticks >= opening_backticks
    }

    /// Rebuild the marker with `language` as its info string.
    pub(crate) fn with_language(&self, language: &str) -> String {
        format!("{}{}{language}", self.indent, "`".repeat(self.backticks))
    }
}

/// Guess a fence's language from its first line of code, falling back to
/// `fallback` when nothing matches.
pub(crate) fn infer_language<'a>(first_line: Option<&str>, fallback: &'a str) -> &'a str {
    let Some(line) = first_line.map(str::trim) else {
        return fallback;
    };
    LANGUAGE_HINTS
        .iter()
        .find(|(prefixes, _)| prefixes.iter().any(|prefix| line.starts_with(prefix)))
        .map_or(fallback, |(_, language)| *language)
}
