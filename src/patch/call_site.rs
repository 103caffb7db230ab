use regex::{NoExpand, Regex};
use std::fmt;
use tracing::{debug, info};

use crate::error::{PatchError, PatchResult};

/// Which lookup located the call site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// The literal call expression was present
    Exact,
    /// The literal was absent and the whitespace-tolerant regex was used
    Fallback,
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStrategy::Exact => write!(f, "exact"),
            MatchStrategy::Fallback => write!(f, "regex"),
        }
    }
}

/// Result of rewiring the call site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSiteOutcome {
    pub content: String,
    pub strategy: MatchStrategy,
    pub replacements: usize,
}

impl CallSiteOutcome {
    /// Status line printed after the rewrite.
    ///
    /// The fallback line is emitted whether or not the regex matched;
    /// use [`CallSiteOutcome::is_applied`] to know if anything changed.
    pub fn status_line(&self) -> &'static str {
        match self.strategy {
            MatchStrategy::Exact => "✅ Updated CheckLogsView sheet binding",
            MatchStrategy::Fallback => "✅ Updated CheckLogsView sheet binding (regex)",
        }
    }

    pub fn is_applied(&self) -> bool {
        self.replacements > 0
    }
}

/// Literal-first rewrite of a call expression with a regex fallback
#[derive(Debug, Clone)]
pub struct CallSiteRewrite {
    literal: String,
    fallback: Regex,
    replacement: String,
}

impl CallSiteRewrite {
    pub fn new(
        literal: impl Into<String>,
        fallback: &str,
        replacement: impl Into<String>,
    ) -> PatchResult<Self> {
        let fallback =
            Regex::new(fallback).map_err(|e| PatchError::pattern_error("call-site", e))?;
        Ok(Self {
            literal: literal.into(),
            fallback,
            replacement: replacement.into(),
        })
    }

    pub fn apply(&self, text: &str) -> CallSiteOutcome {
        let exact = text.matches(self.literal.as_str()).count();
        if exact > 0 {
            debug!("Call site matched literally {} time(s)", exact);
            return CallSiteOutcome {
                content: text.replace(self.literal.as_str(), &self.replacement),
                strategy: MatchStrategy::Exact,
                replacements: exact,
            };
        }

        let replacements = self.fallback.find_iter(text).count();
        if replacements == 0 {
            info!(
                "Call site fallback /{}/ matched nothing",
                self.fallback.as_str()
            );
        } else {
            debug!("Call site matched by regex {} time(s)", replacements);
        }

        CallSiteOutcome {
            content: self
                .fallback
                .replace_all(text, NoExpand(&self.replacement))
                .into_owned(),
            strategy: MatchStrategy::Fallback,
            replacements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite() -> CallSiteRewrite {
        CallSiteRewrite::new(
            "Detail(log: log)",
            r"Detail\(log:\s*log\)",
            "Detail(log: log, onFollow: { x in y = x })",
        )
        .unwrap()
    }

    #[test]
    fn test_exact_takes_priority() {
        let outcome = rewrite().apply("a Detail(log: log) b Detail(log: log)");
        assert_eq!(outcome.strategy, MatchStrategy::Exact);
        assert_eq!(outcome.replacements, 2);
        assert_eq!(
            outcome.content,
            "a Detail(log: log, onFollow: { x in y = x }) b Detail(log: log, onFollow: { x in y = x })"
        );
    }

    #[test]
    fn test_fallback_handles_spacing() {
        let outcome = rewrite().apply("Detail(log:\n   log)");
        assert_eq!(outcome.strategy, MatchStrategy::Fallback);
        assert_eq!(outcome.replacements, 1);
        assert_eq!(outcome.content, "Detail(log: log, onFollow: { x in y = x })");
    }

    #[test]
    fn test_fallback_without_match_is_unchanged() {
        let outcome = rewrite().apply("Other(log: log)");
        assert_eq!(outcome.strategy, MatchStrategy::Fallback);
        assert_eq!(outcome.content, "Other(log: log)");
        assert!(!outcome.is_applied());
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(MatchStrategy::Exact.to_string(), "exact");
        assert_eq!(MatchStrategy::Fallback.to_string(), "regex");
    }
}
