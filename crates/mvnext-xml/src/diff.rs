//! Text diffs for previewing edits

use similar::TextDiff;

/// Render a unified diff between two versions of the file at `path`.
///
/// Returns an empty string when the texts are equal. A missing old version
/// is diffed against the empty string.
pub fn unified_diff(path: &str, old: Option<&str>, new: &str) -> String {
    let old = old.unwrap_or("");
    if old == new {
        return String::new();
    }

    let old_header = if old.is_empty() {
        "/dev/null".to_string()
    } else {
        format!("a/{path}")
    };
    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(3)
        .header(&old_header, &format!("b/{path}"))
        .to_string()
}
