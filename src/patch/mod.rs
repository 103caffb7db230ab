pub mod call_site;
pub mod pipeline;
pub mod rules;
pub mod substitution;

pub use call_site::{CallSiteOutcome, CallSiteRewrite, MatchStrategy};
pub use pipeline::{PassSummary, PatchOptions, PatchReport, Patcher};
pub use rules::{check_log_follow_rules, PatchRules, DEFAULT_TARGET};
pub use substitution::{PassOutcome, Replacement, Substitution};
