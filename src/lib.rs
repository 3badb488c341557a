//! Fix the markdownlint complaints that come up again and again in
//! hand-written Markdown: heading spacing and punctuation, emphasis and list
//! marker spacing, trailing whitespace, blank lines around headings, lists,
//! and code fences, bare URLs, missing fence languages, and runs of blank
//! lines.
//!
//! [markdown_fix] is a line-oriented best-effort fixer, not a Markdown
//! parser. Every rule is a local rewrite; the only state carried across
//! lines is whether we are inside a fenced code block, and nothing inside a
//! fence is ever touched.
//!
//! [markdown_fix]: index.html
//!
//! # Getting Started
//!
//! ```rust
//! use markdown_fix::fix;
//!
//! let markdown = "##   Getting Started:
//! Install it from https://crates.io
//! -   then run it
//! ";
//!
//! let fixed = "## Getting Started
//!
//! Install it from <https://crates.io>
//!
//! - then run it
//! ";
//!
//! assert_eq!(fix(markdown), fixed);
//! ```
//!
//! # Using the [Builder](builder::FixerBuilder)
//!
//! The builder lets you skip rules and pick the tag used for code fences
//! whose language can't be guessed.
//!
//! ````rust
//! use markdown_fix::{fix_with_builder, FixerBuilder, Rule};
//!
//! let mut builder = FixerBuilder::default();
//! builder
//!     .disable_rule(Rule::BareUrls)
//!     .fallback_language("console");
//!
//! let markdown = "See https://example.com
//! ```
//! ok
//! ```
//! ";
//!
//! let fixed = "See https://example.com
//!
//! ```console
//! ok
//! ```
//! ";
//!
//! assert_eq!(fix_with_builder(markdown, builder), fixed);
//! ````

use std::{io, path::Path};

mod builder;
mod config;
mod document;
mod fence;
mod fixer;
mod inline;
mod rules;

pub use builder::FixerBuilder;
pub use config::Config;
pub use fixer::MarkdownFixer;
pub use rules::{ParseRuleError, Rule};

/// Fix a markdown snippet with all rules enabled.
///
/// Applying `fix` to its own output changes nothing.
///
/// ```rust
/// # use markdown_fix::fix;
/// let markdown = "# Checklist:
/// 1.  Read **  the book  **
/// ";
///
/// let fixed = "# Checklist
///
/// 1. Read **the book**
/// ";
///
/// assert_eq!(fix(markdown), fixed);
/// assert_eq!(fix(fixed), fixed);
/// ```
pub fn fix(input: &str) -> String {
    fix_with_builder(input, FixerBuilder::default())
}

/// Fix a markdown snippet with user specified settings.
///
/// ```rust
/// # use markdown_fix::{fix_with_builder, FixerBuilder, Rule};
/// let mut builder = FixerBuilder::default();
/// builder.disable_rule(Rule::HeadingPunctuation);
///
/// assert_eq!(fix_with_builder("##  FAQ?", builder), "## FAQ?");
/// ```
pub fn fix_with_builder(input: &str, builder: FixerBuilder) -> String {
    tracing::trace!(?builder);
    let fixer = builder.build();
    fixer.fix(input)
}

/// Fix the markdown file at `path` in place with all rules enabled.
///
/// The file is read and decoded completely before anything is written, so a
/// file that is missing, unreadable, or not valid UTF-8 is left as it was.
pub fn fix_file<P: AsRef<Path>>(path: P) -> io::Result<()> {
    MarkdownFixer::default().fix_file(path)
}
