use itertools::Itertools;

use crate::fence::FenceMarker;

/// Where a line sits relative to fenced code blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LineKind {
    /// Regular markdown, where every rule applies.
    Text,
    FenceOpen,
    /// Code between an opening and closing fence. Never modified.
    FenceBody,
    FenceClose,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Line {
    pub(crate) text: String,
    pub(crate) kind: LineKind,
}

impl Line {
    /// An inserted blank line.
    pub(crate) fn blank() -> Self {
        Self {
            text: String::new(),
            kind: LineKind::Text,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// A markdown file as a sequence of lines.
///
/// The final line ending, if any, is remembered separately so it never reads
/// as an extra blank line.
#[derive(Clone, Debug)]
pub(crate) struct Document {
    pub(crate) lines: Vec<Line>,
    line_ending: LineEnding,
    trailing_newline: bool,
}

impl Document {
    pub(crate) fn parse(input: &str) -> Self {
        let line_ending = if input.contains("\r\n") {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        };
        let trailing_newline = input.ends_with('\n');
        let body = input.strip_suffix('\n').unwrap_or(input);

        // Number of backticks in the fence we're inside of, if any.
        // An unterminated fence runs to the end of the document.
        let mut open_fence = None;
        let lines = body
            .split('\n')
            .map(|raw| {
                let text = match line_ending {
                    LineEnding::CrLf => raw.strip_suffix('\r').unwrap_or(raw),
                    LineEnding::Lf => raw,
                };
                let marker = FenceMarker::parse(text);
                let kind = match (open_fence, marker) {
                    (None, Some(opening)) => {
                        open_fence = Some(opening.backticks);
                        LineKind::FenceOpen
                    }
                    (None, None) => LineKind::Text,
                    (Some(backticks), Some(closing)) if closing.closes(backticks) => {
                        open_fence = None;
                        LineKind::FenceClose
                    }
                    (Some(_), _) => LineKind::FenceBody,
                };
                Line {
                    text: text.to_owned(),
                    kind,
                }
            })
            .collect::<Vec<_>>();

        if let Some(backticks) = open_fence {
            tracing::debug!(backticks, "code fence is never closed");
        }

        Self {
            lines,
            line_ending,
            trailing_newline,
        }
    }

    pub(crate) fn render(&self) -> String {
        let mut output = self
            .lines
            .iter()
            .map(|line| line.text.as_str())
            .join(self.line_ending.as_str());
        if self.trailing_newline {
            output.push_str(self.line_ending.as_str());
        }
        output
    }
}
