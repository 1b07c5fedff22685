//! Line ending detection and indentation helpers

use serde::{Deserialize, Serialize};

/// Indentation unit used when a document gives no better hint
pub const DEFAULT_INDENT: &str = "  ";

/// Newline convention of a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    /// Detect the convention used by `text`.
    ///
    /// The more frequent kind of line break wins. Ties and text without
    /// line breaks are LF.
    pub fn detect(text: &str) -> Self {
        let crlf = text.matches("\r\n").count();
        let lf = text.matches('\n').count() - crlf;
        if crlf > lf { Self::CrLf } else { Self::Lf }
    }

    /// Pick the convention from a "use CRLF" flag
    pub fn from_crlf(use_crlf: bool) -> Self {
        if use_crlf { Self::CrLf } else { Self::Lf }
    }

    pub fn is_crlf(&self) -> bool {
        matches!(self, Self::CrLf)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

impl std::fmt::Display for LineEnding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lf => write!(f, "LF"),
            Self::CrLf => write!(f, "CRLF"),
        }
    }
}

/// Whitespace that precedes `pos` on its line, if nothing else does.
///
/// Returns `None` when `pos` shares its line with other content.
pub(crate) fn line_indent(source: &str, pos: usize) -> Option<&str> {
    let line_start = source[..pos].rfind('\n').map_or(0, |i| i + 1);
    let prefix = &source[line_start..pos];
    prefix
        .chars()
        .all(|c| c == ' ' || c == '\t')
        .then_some(prefix)
}

/// Escape character data for use inside an element.
pub(crate) fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape an attribute value for use inside double quotes.
pub(crate) fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
