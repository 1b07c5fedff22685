//! Edit types for content modification.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// The kind of edit operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditKind {
    /// Insert new content.
    Insert,
    /// Replace existing content.
    Replace,
    /// Delete content.
    Delete,
}

/// A text edit on document source, recorded for reporting and rollback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit {
    /// The kind of edit.
    pub kind: EditKind,
    /// Byte span in the source the edit was applied to.
    pub span: Range<usize>,
    /// Content that occupied `span` before the edit.
    pub old_content: String,
    /// Content that occupies the span after the edit.
    pub new_content: String,
}

impl Edit {
    /// Build an edit replacing `span` (holding `old_content`) with `new_content`.
    ///
    /// The kind is derived from which side is empty.
    pub fn splice(
        span: Range<usize>,
        old_content: impl Into<String>,
        new_content: impl Into<String>,
    ) -> Self {
        let old_content = old_content.into();
        let new_content = new_content.into();
        let kind = match (old_content.is_empty(), new_content.is_empty()) {
            (true, _) => EditKind::Insert,
            (false, true) => EditKind::Delete,
            (false, false) => EditKind::Replace,
        };
        Self {
            kind,
            span,
            old_content,
            new_content,
        }
    }

    /// Apply this edit to `source`.
    pub fn apply(&self, source: &str) -> String {
        let mut result = String::with_capacity(
            source.len() - self.span.len() + self.new_content.len(),
        );
        result.push_str(&source[..self.span.start]);
        result.push_str(&self.new_content);
        result.push_str(&source[self.span.end..]);
        result
    }

    /// The edit that undoes this one when applied to the edited source.
    pub fn inverse(&self) -> Self {
        let kind = match self.kind {
            EditKind::Insert => EditKind::Delete,
            EditKind::Delete => EditKind::Insert,
            EditKind::Replace => EditKind::Replace,
        };
        Self {
            kind,
            span: self.span.start..self.span.start + self.new_content.len(),
            old_content: self.new_content.clone(),
            new_content: self.old_content.clone(),
        }
    }
}
