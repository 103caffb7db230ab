//! Anchors and replacement texts for wiring `onFollowLog` into
//! `CheckLogDetailView` in `MainWindowView.swift`.

use lazy_static::lazy_static;

use super::call_site::CallSiteRewrite;
use super::substitution::Substitution;
use crate::error::PatchResult;

/// File patched when no target is given on the command line
pub const DEFAULT_TARGET: &str =
    "/private/var/www/html/stacks/movida/app/GitPilot/GitPilot/Views/MainWindowView.swift";

pub const VIEW_PROPERTY_PATTERN: &str =
    r"(struct CheckLogDetailView: View \{\s*let log: CheckLog)";
pub const VIEW_PROPERTY_REPLACEMENT: &str = "$1\n    var onFollowLog: ((CheckLog) -> Void)? = nil";

pub const PULL_ACTION_PATTERN: &str = r"_\s*=\s*await\s+gitMonitor\.pullRepository\(repo\)";
pub const PULL_ACTION_REPLACEMENT: &str =
    "if let newLog = await gitMonitor.pullRepository(repo) { onFollowLog?(newLog) }";

pub const SHEET_CALL_LITERAL: &str = "CheckLogDetailView(log: log)";
pub const SHEET_CALL_PATTERN: &str = r"CheckLogDetailView\(log:\s*log\)";
pub const SHEET_CALL_REPLACEMENT: &str =
    "CheckLogDetailView(log: log, onFollowLog: { newLog in selectedLog = newLog })";

/// The ordered passes of one patch run
#[derive(Debug, Clone)]
pub struct PatchRules {
    /// Passes run first, in order
    pub substitutions: Vec<Substitution>,
    /// Call-site rewrite run last
    pub call_site: CallSiteRewrite,
}

impl PatchRules {
    /// Passes that add the `onFollowLog` callback and hook it up
    pub fn check_log_follow() -> PatchResult<Self> {
        Ok(Self {
            substitutions: vec![
                Substitution::new(
                    "view-property",
                    VIEW_PROPERTY_PATTERN,
                    VIEW_PROPERTY_REPLACEMENT,
                )?,
                Substitution::literal(
                    "pull-action",
                    PULL_ACTION_PATTERN,
                    PULL_ACTION_REPLACEMENT,
                )?,
            ],
            call_site: CallSiteRewrite::new(
                SHEET_CALL_LITERAL,
                SHEET_CALL_PATTERN,
                SHEET_CALL_REPLACEMENT,
            )?,
        })
    }
}

lazy_static! {
    static ref CHECK_LOG_FOLLOW: PatchRules =
        PatchRules::check_log_follow().expect("built-in patterns must compile");
}

/// Shared, compiled-once copy of [`PatchRules::check_log_follow`]
pub fn check_log_follow_rules() -> &'static PatchRules {
    &CHECK_LOG_FOLLOW
}
