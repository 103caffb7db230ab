use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

use super::call_site::CallSiteOutcome;
use super::rules::{check_log_follow_rules, PatchRules};
use crate::error::{map_io_err, PatchError, PatchResult};

/// Options for a single patch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatchOptions {
    /// Run the passes but leave the file untouched
    pub dry_run: bool,
    /// Refuse to write when any pass replaced nothing
    pub strict: bool,
}

/// Per-pass replacement count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassSummary {
    pub name: String,
    pub replacements: usize,
}

/// Everything one run of the passes produced
#[derive(Debug, Clone)]
pub struct PatchReport {
    /// Document as loaded
    pub original: String,
    /// Document after all passes
    pub content: String,
    /// Substitution passes, in the order they ran
    pub passes: Vec<PassSummary>,
    /// Outcome of the final call-site pass
    pub call_site: CallSiteOutcome,
    /// Whether the result was written back
    pub written: bool,
}

impl PatchReport {
    pub fn status_line(&self) -> &'static str {
        self.call_site.status_line()
    }

    /// Names of every pass, call site included, that replaced nothing
    pub fn unmatched_passes(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .passes
            .iter()
            .filter(|p| p.replacements == 0)
            .map(|p| p.name.clone())
            .collect();
        if !self.call_site.is_applied() {
            names.push("call-site".to_string());
        }
        names
    }

    pub fn is_changed(&self) -> bool {
        self.content != self.original
    }
}

/// Convert `\r\n` and lone `\r` to `\n`
pub(crate) fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Loads a file, runs the patch passes over it and writes the result back
pub struct Patcher {
    path: PathBuf,
    rules: &'static PatchRules,
}

impl Patcher {
    /// Patcher for `path` using the built-in `onFollowLog` passes
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            rules: check_log_follow_rules(),
        }
    }

    /// Read the whole target as UTF-8 text with `\n` line endings
    pub fn load(&self) -> PatchResult<String> {
        let raw = fs::read_to_string(&self.path).map_err(map_io_err(&self.path))?;
        let content = normalize_newlines(&raw);
        if content.len() != raw.len() {
            debug!("Converted CRLF/CR line endings in {}", self.path.display());
        }
        info!("Loaded {} ({} bytes)", self.path.display(), content.len());
        Ok(content)
    }

    /// Run every pass over `content` in order. Touches no file.
    pub fn apply(&self, content: &str) -> PatchReport {
        let mut current = content.to_string();
        let mut passes = Vec::with_capacity(self.rules.substitutions.len());

        for substitution in &self.rules.substitutions {
            debug!("Running pass {}", substitution);
            let outcome = substitution.apply(&current);
            if !outcome.is_applied() {
                info!("Pass '{}' matched nothing; left unchanged", substitution.name());
            }
            passes.push(PassSummary {
                name: substitution.name().to_string(),
                replacements: outcome.replacements,
            });
            current = outcome.content;
        }

        let call_site = self.rules.call_site.apply(&current);
        debug!(
            "Call site pass used {} strategy, {} replacement(s)",
            call_site.strategy, call_site.replacements
        );

        PatchReport {
            original: content.to_string(),
            content: call_site.content.clone(),
            passes,
            call_site,
            written: false,
        }
    }

    /// Overwrite the target with `content` in one write
    pub fn persist(&self, content: &str) -> PatchResult<()> {
        fs::write(&self.path, content).map_err(map_io_err(&self.path))?;
        info!("Wrote {} ({} bytes)", self.path.display(), content.len());
        Ok(())
    }

    /// Load, patch and (unless told otherwise) persist the target
    pub fn run(&self, options: PatchOptions) -> PatchResult<PatchReport> {
        let original = self.load()?;
        let mut report = self.apply(&original);

        if options.strict {
            let unmatched = report.unmatched_passes();
            if !unmatched.is_empty() {
                return Err(PatchError::unmatched(unmatched));
            }
        }

        if options.dry_run {
            debug!("Dry run, not writing {}", self.path.display());
            return Ok(report);
        }

        self.persist(&report.content)?;
        report.written = true;
        Ok(report)
    }
}
