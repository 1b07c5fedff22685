//! Edit phase: ensure the target element is present in a document

use mvnext_xml::{Edit, Error as XmlError, NodeMatch, XmlDocument};
use serde::Serialize;

use crate::descriptor::TargetElementDescriptor;
use crate::error::{Error, Result};

/// Result of editing one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// An equivalent element exists; the document is untouched
    AlreadyPresent,
    /// The element was inserted by this edit
    Inserted(Edit),
}

impl EditOutcome {
    pub fn is_inserted(&self) -> bool {
        matches!(self, Self::Inserted(_))
    }
}

/// Where a document stands within one run.
///
/// Each document moves forward once: `Unseen`, `Scanned`, then either
/// `NoOpMatched` or `Inserted`. A document whose edit failed stays `Scanned`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentState {
    Unseen,
    Scanned,
    NoOpMatched,
    Inserted,
}

impl DocumentState {
    /// True once the editor has decided on the document
    pub fn is_final(&self) -> bool {
        matches!(self, Self::NoOpMatched | Self::Inserted)
    }
}

impl From<&EditOutcome> for DocumentState {
    fn from(outcome: &EditOutcome) -> Self {
        match outcome {
            EditOutcome::AlreadyPresent => Self::NoOpMatched,
            EditOutcome::Inserted(_) => Self::Inserted,
        }
    }
}

/// Locates or inserts a target element in a document.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeEditor;

impl TreeEditor {
    pub fn new() -> Self {
        Self
    }

    /// First detection match carrying the descriptor's identity, if any.
    pub fn detect(
        &self,
        doc: &XmlDocument,
        descriptor: &TargetElementDescriptor,
    ) -> Result<Option<NodeMatch>> {
        Ok(doc.find(descriptor.detection(), |node| descriptor.is_identity(node))?)
    }

    /// Make sure the descriptor's element is present in `doc`.
    ///
    /// The template is appended as the last child of the anchor element,
    /// splicing the source so that every other byte is kept.
    ///
    /// # Errors
    ///
    /// Returns `MalformedContainer` when no single anchor element exists. The
    /// document is unchanged on error.
    pub fn edit(
        &self,
        doc: &mut XmlDocument,
        descriptor: &TargetElementDescriptor,
    ) -> Result<EditOutcome> {
        if let Some(found) = self.detect(doc, descriptor)? {
            tracing::debug!(
                identity = descriptor.identity(),
                offset = found.span.start,
                "target element already present"
            );
            return Ok(EditOutcome::AlreadyPresent);
        }

        let edit = doc
            .append_child(descriptor.anchor(), descriptor.template())
            .map_err(|e| {
                let reason = match &e {
                    XmlError::MalformedContainer { .. } => "no element matches".to_string(),
                    XmlError::AmbiguousAnchor { count, .. } => format!("{count} elements match"),
                    _ => return Error::Xml(e),
                };
                Error::MalformedContainer {
                    anchor: descriptor.anchor().to_string(),
                    reason,
                }
            })?;
        tracing::debug!(
            identity = descriptor.identity(),
            span = ?edit.span,
            "inserted target element"
        );
        Ok(EditOutcome::Inserted(edit))
    }
}
