use std::borrow::Cow;

use crate::{Config, MarkdownFixer, Rule};

/// Builder for the [MarkdownFixer](crate::MarkdownFixer)
#[derive(Clone, Debug, Default)]
pub struct FixerBuilder {
    config: Config,
}

impl FixerBuilder {
    /// Start from an existing [`Config`].
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Build a [MarkdownFixer](crate::MarkdownFixer) using the current configuration.
    pub fn build(self) -> MarkdownFixer {
        MarkdownFixer::with_config(self.config)
    }

    /// Language tag given to code fences when none of the content hints match.
    ///
    /// Defaults to `text`. An empty string leaves such fences untagged.
    pub fn fallback_language<S>(&mut self, language: S) -> &mut Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.config.fallback_language = language.into();
        self
    }

    /// Skip `rule` entirely.
    pub fn disable_rule(&mut self, rule: Rule) -> &mut Self {
        self.config.disable(rule);
        self
    }
}
