use std::borrow::Cow;

use crate::Rule;

/// Settings shared by every fix.
#[derive(Clone, Debug)]
pub struct Config {
    /// Tag added to a bare code fence when its content gives no hint.
    pub fallback_language: Cow<'static, str>,
    /// Rules that are skipped.
    pub disabled_rules: Vec<Rule>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fallback_language: "text".into(),
            disabled_rules: vec![],
        }
    }
}

impl Config {
    /// Check if `rule` should run.
    pub fn is_enabled(&self, rule: Rule) -> bool {
        !self.disabled_rules.contains(&rule)
    }

    /// Turn `rule` off. Disabling a rule twice is a no-op.
    pub fn disable(&mut self, rule: Rule) {
        if self.is_enabled(rule) {
            self.disabled_rules.push(rule);
        }
    }
}
