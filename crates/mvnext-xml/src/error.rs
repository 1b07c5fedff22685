//! Error types for mvnext-xml

/// Result type for mvnext-xml operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in mvnext-xml operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to parse XML at {line}:{column}: {message}")]
    Parse {
        line: u32,
        column: u32,
        message: String,
    },

    #[error("Invalid path expression `{expression}`: {reason}")]
    InvalidPath { expression: String, reason: String },

    #[error("Malformed container: no element matches anchor `{anchor}`")]
    MalformedContainer { anchor: String },

    #[error("Ambiguous anchor `{anchor}`: {count} elements match")]
    AmbiguousAnchor { anchor: String, count: usize },
}

impl Error {
    pub fn invalid_path(expression: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            expression: expression.into(),
            reason: reason.into(),
        }
    }
}

impl From<roxmltree::Error> for Error {
    fn from(err: roxmltree::Error) -> Self {
        let pos = err.pos();
        Self::Parse {
            line: pos.row,
            column: pos.col,
            message: err.to_string(),
        }
    }
}
