//! Inline code spans are literal text. Rewrites that work on prose go through
//! [`rewrite_prose`] so they never see the inside of a `` `code span` ``.

use std::{borrow::Cow, ops::Range};

/// Apply `rewrite` to every part of `line` outside of inline code spans.
pub(crate) fn rewrite_prose<'a, F>(line: &'a str, mut rewrite: F) -> Cow<'a, str>
where
    F: for<'b> FnMut(&'b str) -> Cow<'b, str>,
{
    let spans = code_spans(line);
    if spans.is_empty() {
        return rewrite(line);
    }

    let mut rewritten = String::with_capacity(line.len());
    let mut changed = false;
    let mut last = 0;
    for span in spans.into_iter().chain(std::iter::once(line.len()..line.len())) {
        let prose = rewrite(&line[last..span.start]);
        changed |= matches!(prose, Cow::Owned(_));
        rewritten.push_str(&prose);
        rewritten.push_str(&line[span.clone()]);
        last = span.end;
    }

    if changed {
        rewritten.into()
    } else {
        line.into()
    }
}

/// Byte ranges of `` `code` `` spans, backticks included.
///
/// A span closes on the next run of exactly as many backticks as opened it.
/// A run with no matching closer is literal text.
pub(crate) fn code_spans(line: &str) -> Vec<Range<usize>> {
    let bytes = line.as_bytes();
    let backtick_run = |start: usize| bytes[start..].iter().take_while(|b| **b == b'`').count();

    let mut spans = vec![];
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'`' {
            i += 1;
            continue;
        }
        let opener = backtick_run(i);
        let mut j = i + opener;
        let mut end = None;
        while j < bytes.len() {
            if bytes[j] != b'`' {
                j += 1;
                continue;
            }
            let run = backtick_run(j);
            if run == opener {
                end = Some(j + run);
                break;
            }
            j += run;
        }
        match end {
            Some(end) => {
                spans.push(i..end);
                i = end;
            }
            None => i += opener,
        }
    }
    spans
}
