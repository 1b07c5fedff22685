//! Documents handed to the pipeline

use mvnext_fs::{NormalizedPath, ProjectFile};
use mvnext_xml::LineEnding;

/// Formatting convention observed in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatStyle {
    pub line_ending: LineEnding,
}

impl FormatStyle {
    /// Detect the style of `text`.
    ///
    /// Returns `None` when the text has no line break to learn from.
    pub fn detect(text: &str) -> Option<Self> {
        text.contains('\n').then(|| Self {
            line_ending: LineEnding::detect(text),
        })
    }

    pub fn uses_crlf(&self) -> bool {
        self.line_ending.is_crlf()
    }
}

/// A document as seen by the pipeline: a logical path plus its text.
///
/// Implemented by [`ProjectFile`]; tests and embedders can provide their own.
pub trait SourceFile {
    /// Path relative to the project root, forward slashes
    fn source_path(&self) -> &NormalizedPath;

    /// Text content
    fn content(&self) -> &str;

    /// Formatting style, when the content reveals one
    fn format_style(&self) -> Option<FormatStyle> {
        FormatStyle::detect(self.content())
    }
}

impl SourceFile for ProjectFile {
    fn source_path(&self) -> &NormalizedPath {
        &self.path
    }

    fn content(&self) -> &str {
        &self.content
    }
}

impl<T: SourceFile + ?Sized> SourceFile for &T {
    fn source_path(&self) -> &NormalizedPath {
        (**self).source_path()
    }

    fn content(&self) -> &str {
        (**self).content()
    }

    fn format_style(&self) -> Option<FormatStyle> {
        (**self).format_style()
    }
}
