use similar::{ChangeTag, TextDiff};
use std::path::Path;

/// Number of inserted and deleted lines between two texts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeStats {
    pub insertions: usize,
    pub deletions: usize,
}

pub fn change_stats(old: &str, new: &str) -> ChangeStats {
    let diff = TextDiff::from_lines(old, new);
    let mut stats = ChangeStats::default();

    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Insert => stats.insertions += 1,
            ChangeTag::Delete => stats.deletions += 1,
            ChangeTag::Equal => {}
        }
    }

    stats
}

/// Render a unified diff of `old` -> `new` with three lines of context.
/// Identical inputs give an empty string.
pub fn unified_diff(path: &Path, old: &str, new: &str) -> String {
    if old == new {
        return String::new();
    }

    let name = path.display().to_string();
    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(3)
        .header(&format!("a/{}", name), &format!("b/{}", name))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_is_empty() {
        assert_eq!(unified_diff(Path::new("x.swift"), "a\n", "a\n"), "");
        assert_eq!(change_stats("a\n", "a\n"), ChangeStats::default());
    }

    #[test]
    fn test_inserted_line() {
        let old = "struct V {\n    let log: CheckLog\n}\n";
        let new = "struct V {\n    let log: CheckLog\n    var cb: (() -> Void)? = nil\n}\n";
        let diff = unified_diff(Path::new("View.swift"), old, new);
        assert!(diff.starts_with("--- a/View.swift\n+++ b/View.swift\n"));
        assert!(diff.contains("@@"));
        assert!(diff.contains("+    var cb: (() -> Void)? = nil\n"));
        assert_eq!(
            change_stats(old, new),
            ChangeStats {
                insertions: 1,
                deletions: 0
            }
        );
    }

    #[test]
    fn test_replaced_line() {
        let stats = change_stats("a\nb\nc\n", "a\nB\nc\n");
        assert_eq!(stats.insertions, 1);
        assert_eq!(stats.deletions, 1);
    }
}
