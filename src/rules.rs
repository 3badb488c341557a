use std::{borrow::Cow, fmt, str::FromStr};

pub(crate) mod emphasis;
pub(crate) mod heading;
pub(crate) mod links;
pub(crate) mod list;
pub(crate) mod whitespace;

/// One of the fixes applied by the [MarkdownFixer](crate::MarkdownFixer).
///
/// Each rule is named after the markdownlint check it satisfies. A [`Rule`]
/// parses from its ID (`MD034`, case-insensitive) or from its kebab-case
/// name (`bare-urls`).
///
/// ```rust
/// # use markdown_fix::Rule;
/// assert_eq!("md034".parse::<Rule>(), Ok(Rule::BareUrls));
/// assert_eq!("bare-urls".parse::<Rule>(), Ok(Rule::BareUrls));
/// assert_eq!(Rule::BareUrls.to_string(), "MD034");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Collapse multiple spaces after a heading's `#` marker.
    HeadingSpacing,
    /// Drop trailing `:`, `.`, `!`, and `?` from headings.
    HeadingPunctuation,
    /// Surround headings with blank lines.
    HeadingBlankLines,
    /// Strip trailing whitespace, keeping two-space hard breaks.
    TrailingWhitespace,
    /// Remove spaces just inside `**` and `__` markers.
    EmphasisSpacing,
    /// Collapse multiple spaces after a list marker.
    ListMarkerSpacing,
    /// Surround lists with blank lines.
    ListBlankLines,
    /// Surround fenced code blocks with blank lines.
    FenceBlankLines,
    /// Tag fenced code blocks that have no language.
    FenceLanguage,
    /// Wrap bare URLs in angle brackets.
    BareUrls,
    /// Collapse long runs of blank lines.
    ConsecutiveBlankLines,
}

impl Rule {
    /// Every rule, in the order the fixes are described.
    pub const ALL: [Rule; 11] = [
        Rule::HeadingSpacing,
        Rule::HeadingPunctuation,
        Rule::HeadingBlankLines,
        Rule::TrailingWhitespace,
        Rule::EmphasisSpacing,
        Rule::ListMarkerSpacing,
        Rule::ListBlankLines,
        Rule::FenceBlankLines,
        Rule::FenceLanguage,
        Rule::BareUrls,
        Rule::ConsecutiveBlankLines,
    ];

    /// The markdownlint rule ID, e.g. `MD019`.
    pub fn id(self) -> &'static str {
        match self {
            Rule::HeadingSpacing => "MD019",
            Rule::HeadingPunctuation => "MD026",
            Rule::HeadingBlankLines => "MD022",
            Rule::TrailingWhitespace => "MD009",
            Rule::EmphasisSpacing => "MD037",
            Rule::ListMarkerSpacing => "MD030",
            Rule::ListBlankLines => "MD032",
            Rule::FenceBlankLines => "MD031",
            Rule::FenceLanguage => "MD040",
            Rule::BareUrls => "MD034",
            Rule::ConsecutiveBlankLines => "MD012",
        }
    }

    /// Kebab-case name, e.g. `heading-spacing`.
    pub fn name(self) -> &'static str {
        match self {
            Rule::HeadingSpacing => "heading-spacing",
            Rule::HeadingPunctuation => "heading-punctuation",
            Rule::HeadingBlankLines => "heading-blank-lines",
            Rule::TrailingWhitespace => "trailing-whitespace",
            Rule::EmphasisSpacing => "emphasis-spacing",
            Rule::ListMarkerSpacing => "list-marker-spacing",
            Rule::ListBlankLines => "list-blank-lines",
            Rule::FenceBlankLines => "fence-blank-lines",
            Rule::FenceLanguage => "fence-language",
            Rule::BareUrls => "bare-urls",
            Rule::ConsecutiveBlankLines => "consecutive-blank-lines",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A string that names no known [`Rule`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseRuleError(String);

impl fmt::Display for ParseRuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown rule `{}`", self.0)
    }
}

impl std::error::Error for ParseRuleError {}

impl FromStr for Rule {
    type Err = ParseRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Rule::ALL
            .into_iter()
            .find(|rule| rule.id().eq_ignore_ascii_case(s) || rule.name() == s)
            .ok_or_else(|| ParseRuleError(s.to_owned()))
    }
}

/// Replace `text` with the output of `rewrite` when the rewrite allocated.
pub(crate) fn apply<F>(text: &mut String, rewrite: F)
where
    F: for<'a> FnOnce(&'a str) -> Cow<'a, str>,
{
    let rewritten = match rewrite(text.as_str()) {
        Cow::Borrowed(_) => None,
        Cow::Owned(rewritten) => Some(rewritten),
    };
    if let Some(rewritten) = rewritten {
        *text = rewritten;
    }
}
