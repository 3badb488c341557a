use std::{fs, io, path::Path};

use crate::{
    document::{Document, Line, LineKind},
    fence::{self, FenceMarker},
    inline,
    rules::{self, emphasis, heading, links, list, whitespace, Rule},
    Config,
};

mod blocks;

/// Runs of this many blank lines or more are collapsed.
const MIN_COLLAPSED_BLANK_RUN: usize = 3;
/// What a collapsed run of blank lines is reduced to.
const COLLAPSED_BLANK_RUN: usize = 2;

/// Used to fix Markdown inputs.
#[derive(Clone, Debug, Default)]
pub struct MarkdownFixer {
    pub(crate) config: Config,
}

impl MarkdownFixer {
    /// Create a [`MarkdownFixer`] with custom [`Config`].
    ///
    /// ```rust
    /// # use markdown_fix::{Config, MarkdownFixer};
    /// let fixer = MarkdownFixer::with_config(Config {
    ///     fallback_language: "plaintext".into(),
    ///     ..Default::default()
    /// });
    /// assert_eq!(fixer.fix("```\nhello\n```"), "```plaintext\nhello\n```");
    /// ```
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Fix Markdown input.
    ///
    /// Line rewrites run first, then fence tagging, then blank lines are
    /// inserted around headings, lists, and fences, and finally long runs of
    /// blank lines are collapsed. Nothing between an opening and a closing
    /// code fence is changed.
    ///
    /// ```rust
    /// # use markdown_fix::MarkdownFixer;
    /// let fixer = MarkdownFixer::default();
    /// let input = "para\n## Heading\npara2";
    /// assert_eq!(fixer.fix(input), "para\n\n## Heading\n\npara2");
    /// ```
    pub fn fix(&self, input: &str) -> String {
        let mut document = Document::parse(input);
        for line in document.lines.iter_mut() {
            self.rewrite_line(line);
        }
        self.tag_bare_fences(&mut document.lines);
        let lines = std::mem::take(&mut document.lines);
        document.lines = blocks::separate_blocks(&self.config, lines);
        if self.config.is_enabled(Rule::ConsecutiveBlankLines) {
            document.lines = collapse_blank_runs(std::mem::take(&mut document.lines));
        }
        document.render()
    }

    /// Fix the markdown file at `path` in place.
    ///
    /// The whole file is read and decoded before anything is written. If the
    /// file can't be read or isn't valid UTF-8 the error is returned and the
    /// file is left untouched.
    pub fn fix_file<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();
        let input = fs::read_to_string(path)?;
        let output = self.fix(&input);
        tracing::debug!(path = %path.display(), changed = input != output, "fixed file");
        fs::write(path, output)
    }

    /// Apply the single-line rules to one line outside of a code fence.
    fn rewrite_line(&self, line: &mut Line) {
        let config = &self.config;
        match line.kind {
            LineKind::FenceBody => return,
            LineKind::FenceOpen | LineKind::FenceClose => {
                if config.is_enabled(Rule::TrailingWhitespace) {
                    strip_trailing_whitespace(&mut line.text);
                }
                return;
            }
            LineKind::Text => {}
        }

        let text = &mut line.text;
        if heading::is_heading(text) {
            if config.is_enabled(Rule::HeadingSpacing) {
                rules::apply(text, heading::collapse_hash_spacing);
            }
            if config.is_enabled(Rule::HeadingPunctuation) {
                rules::apply(text, heading::strip_trailing_punctuation);
            }
        }
        if config.is_enabled(Rule::TrailingWhitespace) {
            strip_trailing_whitespace(text);
        }
        if config.is_enabled(Rule::EmphasisSpacing) {
            rules::apply(text, |text| {
                inline::rewrite_prose(text, emphasis::tighten_strong_markers)
            });
        }
        if config.is_enabled(Rule::ListMarkerSpacing) {
            rules::apply(text, list::collapse_marker_spacing);
        }
        if config.is_enabled(Rule::BareUrls) && !links::is_reference_definition(text) {
            rules::apply(text, links::wrap_bare_urls);
        }
        tracing::trace!(line = text.as_str());
    }

    /// Give every fence without an info string a language tag.
    fn tag_bare_fences(&self, lines: &mut [Line]) {
        if !self.config.is_enabled(Rule::FenceLanguage) {
            return;
        }
        let fallback: &str = &self.config.fallback_language;

        for i in 0..lines.len() {
            if lines[i].kind != LineKind::FenceOpen {
                continue;
            }
            let Some(fence) = FenceMarker::parse(&lines[i].text) else {
                continue;
            };
            if !fence.info.is_empty() {
                continue;
            }

            let first_code_line = lines[i + 1..]
                .iter()
                .take_while(|line| line.kind == LineKind::FenceBody)
                .map(|line| line.text.as_str())
                .find(|text| !whitespace::is_blank(text));
            let language = fence::infer_language(first_code_line, fallback);
            if language.is_empty() {
                continue;
            }
            tracing::debug!(line = i + 1, language, "tagging bare code fence");
            let tagged = fence.with_language(language);
            lines[i].text = tagged;
        }
    }
}

fn strip_trailing_whitespace(text: &mut String) {
    let len = whitespace::strip_trailing_whitespace(text).len();
    text.truncate(len);
}

/// Reduce every run of [`MIN_COLLAPSED_BLANK_RUN`] or more blank lines
/// outside of code fences to [`COLLAPSED_BLANK_RUN`].
fn collapse_blank_runs(lines: Vec<Line>) -> Vec<Line> {
    let mut output = Vec::with_capacity(lines.len());
    let mut run = vec![];
    for line in lines {
        if line.kind == LineKind::Text && whitespace::is_blank(&line.text) {
            run.push(line);
            continue;
        }
        flush_blank_run(&mut output, &mut run);
        output.push(line);
    }
    flush_blank_run(&mut output, &mut run);
    output
}

fn flush_blank_run(output: &mut Vec<Line>, run: &mut Vec<Line>) {
    if run.len() >= MIN_COLLAPSED_BLANK_RUN {
        tracing::debug!(run = run.len(), "collapsing blank lines");
        run.truncate(COLLAPSED_BLANK_RUN);
    }
    output.append(run);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_runs(input: &[&str]) -> Vec<String> {
        let lines = input
            .iter()
            .map(|text| Line {
                text: text.to_string(),
                kind: LineKind::Text,
            })
            .collect();
        collapse_blank_runs(lines)
            .into_iter()
            .map(|line| line.text)
            .collect()
    }

    #[test]
    fn collapses_three_or_more_blank_lines() {
        assert_eq!(blank_runs(&["a", "", "", "", "b"]), ["a", "", "", "b"]);
        assert_eq!(blank_runs(&["a", "", "", "", "", "b"]), ["a", "", "", "b"]);
        assert_eq!(
            blank_runs(&["a", "", "", "", "", "", "b"]),
            ["a", "", "", "b"]
        );
        assert_eq!(blank_runs(&["a", "", "", "", "", ""]), ["a", "", ""]);
    }

    #[test]
    fn keeps_shorter_runs() {
        assert_eq!(blank_runs(&["a", "", "", "b"]), ["a", "", "", "b"]);
        assert_eq!(
            blank_runs(&["a", "", "b", "", "", "c"]),
            ["a", "", "b", "", "", "c"]
        );
    }

    #[test]
    fn rewrites_single_lines() {
        let fixer = MarkdownFixer::default();
        let fixed = |text: &str| {
            let mut line = Line {
                text: text.to_string(),
                kind: LineKind::Text,
            };
            fixer.rewrite_line(&mut line);
            line.text
        };
        assert_eq!(fixed("##   Title:"), "## Title");
        assert_eq!(
            fixed("-   item with **  bold  ** and https://example.com"),
            "- item with **bold** and <https://example.com>"
        );
        assert_eq!(fixed("`** code **` and ** prose **"), "`** code **` and **prose**");
        assert_eq!(fixed("[docs]: https://docs.rs"), "[docs]: https://docs.rs");
        assert_eq!(fixed("keep this hard break  "), "keep this hard break  ");
        assert_eq!(
            fixed("[`x` https://a.com](https://b.com)"),
            "[`x` https://a.com](https://b.com)"
        );
        assert_eq!(fixed("**  https://a.com/x_  **"), "**<https://a.com/x_>**");
    }

    #[test]
    fn fence_bodies_are_untouched() {
        let fixer = MarkdownFixer::default();
        let mut line = Line {
            text: "##   not a heading   ".to_string(),
            kind: LineKind::FenceBody,
        };
        fixer.rewrite_line(&mut line);
        assert_eq!(line.text, "##   not a heading   ");
    }
}
