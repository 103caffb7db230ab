use regex::{NoExpand, Regex};
use std::fmt;
use tracing::debug;

use crate::error::{PatchError, PatchResult};

/// How the replacement text is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replacement {
    /// `$1` / `${name}` capture references are expanded
    Template,
    /// Inserted verbatim, `$` has no special meaning
    Literal,
}

/// Result of running one pass over a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassOutcome {
    /// Document after the pass
    pub content: String,
    /// Number of matches that were replaced
    pub replacements: usize,
}

impl PassOutcome {
    pub fn is_applied(&self) -> bool {
        self.replacements > 0
    }
}

/// A named regex substitution applied to every match in a document
#[derive(Debug, Clone)]
pub struct Substitution {
    name: String,
    pattern: Regex,
    replacement: String,
    mode: Replacement,
}

impl Substitution {
    /// Compile a substitution whose replacement may reference capture groups
    pub fn new(
        name: impl Into<String>,
        pattern: &str,
        replacement: impl Into<String>,
    ) -> PatchResult<Self> {
        Self::build(name.into(), pattern, replacement.into(), Replacement::Template)
    }

    /// Compile a substitution whose replacement is inserted as-is
    pub fn literal(
        name: impl Into<String>,
        pattern: &str,
        replacement: impl Into<String>,
    ) -> PatchResult<Self> {
        Self::build(name.into(), pattern, replacement.into(), Replacement::Literal)
    }

    fn build(
        name: String,
        pattern: &str,
        replacement: String,
        mode: Replacement,
    ) -> PatchResult<Self> {
        let pattern = Regex::new(pattern).map_err(|e| PatchError::pattern_error(&name, e))?;
        Ok(Self {
            name,
            pattern,
            replacement,
            mode,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace every match in `text`. No match leaves the text untouched.
    pub fn apply(&self, text: &str) -> PassOutcome {
        let replacements = self.pattern.find_iter(text).count();
        if replacements == 0 {
            debug!("Pass '{}' found no match", self.name);
            return PassOutcome {
                content: text.to_string(),
                replacements,
            };
        }

        let content = match self.mode {
            Replacement::Template => self
                .pattern
                .replace_all(text, self.replacement.as_str())
                .into_owned(),
            Replacement::Literal => self
                .pattern
                .replace_all(text, NoExpand(&self.replacement))
                .into_owned(),
        };

        debug!("Pass '{}' replaced {} match(es)", self.name, replacements);
        PassOutcome {
            content,
            replacements,
        }
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: /{}/", self.name, self.pattern.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_expands_captures() {
        let sub = Substitution::new("insert", r"(let x = 1;)", "$1\nlet y = 2;").unwrap();
        let outcome = sub.apply("fn f() {\nlet x = 1;\n}\n");
        assert_eq!(outcome.content, "fn f() {\nlet x = 1;\nlet y = 2;\n}\n");
        assert_eq!(outcome.replacements, 1);
    }

    #[test]
    fn test_literal_does_not_expand_dollar() {
        let sub = Substitution::literal("price", r"PRICE", "$1.00").unwrap();
        let outcome = sub.apply("cost: PRICE, again PRICE");
        assert_eq!(outcome.content, "cost: $1.00, again $1.00");
        assert_eq!(outcome.replacements, 2);
    }

    #[test]
    fn test_no_match_is_noop() {
        let sub = Substitution::new("absent", r"nothing\s+here", "x").unwrap();
        let text = "some unrelated text\n";
        let outcome = sub.apply(text);
        assert_eq!(outcome.content, text);
        assert_eq!(outcome.replacements, 0);
        assert!(!outcome.is_applied());
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let err = Substitution::new("broken", r"(unclosed", "x").unwrap_err();
        match err {
            PatchError::Pattern { name, .. } => assert_eq!(name, "broken"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_display() {
        let sub = Substitution::literal("b", r"a+", "b").unwrap();
        assert_eq!(sub.to_string(), "b: /a+/");
    }
}
