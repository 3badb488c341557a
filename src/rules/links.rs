use std::{borrow::Cow, ops::Range, sync::LazyLock};

use regex::Regex;

use crate::inline;

static BARE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s<>]+").expect("BARE_URL regex is valid"));

/// `[text](url)` and `![alt](src)`.
static INLINE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!?\[[^\]]*\]\([^)]*\)").expect("INLINE_LINK regex is valid")
});

/// `<https://example.com>`
static AUTOLINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^<>\s]+>").expect("AUTOLINK regex is valid"));

/// `[label]: https://example.com`
static REFERENCE_DEFINITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ {0,3}\[[^\]]+\]:").expect("REFERENCE_DEFINITION regex is valid")
});

/// A URL right after one of these is already part of some markup.
const OPENERS: &[char] = &['(', '[', '<', '"', '\'', '='];

/// Punctuation that ends a sentence rather than the URL.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', '\'', '"'];

/// Only trimmed when the same marker opens emphasis earlier on the line.
const EMPHASIS_MARKERS: &[char] = &['*', '_'];

const SCHEMES: &[&str] = &["http://", "https://"];

pub(crate) fn is_reference_definition(line: &str) -> bool {
    REFERENCE_DEFINITION.is_match(line)
}

/// `See https://example.com.` -> `See <https://example.com>.`
///
/// URLs inside inline links, images, autolinks, and code spans are left
/// alone. Links are found on the whole line, so a code span in the link
/// text doesn't hide the link.
pub(crate) fn wrap_bare_urls(line: &str) -> Cow<'_, str> {
    let protected = INLINE_LINK
        .find_iter(line)
        .chain(AUTOLINK.find_iter(line))
        .map(|m| m.range())
        .collect::<Vec<_>>();
    let code_spans = inline::code_spans(line);

    let mut rewritten = String::new();
    let mut last = 0;
    let mut search_from = 0;
    while let Some(candidate) = BARE_URL.find_at(line, search_from) {
        let start = candidate.start();
        if let Some(span) = code_spans.iter().find(|span| span.contains(&start)) {
            search_from = span.end;
            continue;
        }
        // a URL stops where a code span starts
        let end = code_spans
            .iter()
            .map(|span| span.start)
            .filter(|span_start| *span_start > start)
            .fold(candidate.end(), usize::min);
        search_from = end;
        if overlaps_any(&protected, start..end) || line[..start].ends_with(OPENERS) {
            continue;
        }
        let url = trim_url(&line[start..end], &line[..start]);
        if SCHEMES.contains(&url) {
            continue;
        }
        tracing::trace!(url, "wrapping bare url");
        rewritten.push_str(&line[last..start]);
        rewritten.push('<');
        rewritten.push_str(url);
        rewritten.push('>');
        last = start + url.len();
    }

    if last == 0 {
        return line.into();
    }
    rewritten.push_str(&line[last..]);
    rewritten.into()
}

fn overlaps_any(ranges: &[Range<usize>], range: Range<usize>) -> bool {
    ranges
        .iter()
        .any(|r| r.start < range.end && range.start < r.end)
}

/// Drop sentence punctuation, closing emphasis markers, and an unmatched `)`
/// from the end of `url`. `before` is the text in front of the URL.
fn trim_url<'a>(mut url: &'a str, before: &str) -> &'a str {
    let is_trailing = |c: char| {
        TRAILING_PUNCTUATION.contains(&c) || (EMPHASIS_MARKERS.contains(&c) && before.contains(c))
    };
    loop {
        let trimmed = url.trim_end_matches(is_trailing);
        let trimmed = match trimmed.strip_suffix(')') {
            Some(without_paren) if !balanced_parens(trimmed) => without_paren,
            _ => trimmed,
        };
        if trimmed.len() == url.len() {
            return url;
        }
        url = trimmed;
    }
}

/// Check if the parens are balanced
fn balanced_parens(url: &str) -> bool {
    let mut depth = 0usize;
    let mut was_last_escape = false;

    for c in url.chars() {
        if !was_last_escape && c == '(' {
            depth += 1;
        } else if !was_last_escape && c == ')' {
            let Some(remaining) = depth.checked_sub(1) else {
                return false;
            };
            depth = remaining;
        }
        was_last_escape = c == '\\';
    }
    depth == 0
}
