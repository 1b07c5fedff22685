//! Error types for mvnext-core

/// Result type for mvnext-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in mvnext-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Generated content could not be rendered as a valid document
    #[error("Failed to render {path}: {message}")]
    Serialization { path: String, message: String },

    /// Options rejected before the run starts
    #[error("Invalid option `{option}`: {reason}")]
    InvalidOptions { option: String, reason: String },

    /// The document lacks a single container element to insert into
    #[error("Malformed container `{anchor}`: {reason}")]
    MalformedContainer { anchor: String, reason: String },

    /// XML error from mvnext-xml
    #[error(transparent)]
    Xml(#[from] mvnext_xml::Error),

    /// Filesystem error from mvnext-fs
    #[error(transparent)]
    Fs(#[from] mvnext_fs::Error),
}

impl Error {
    pub fn invalid_option(option: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOptions {
            option: option.into(),
            reason: reason.into(),
        }
    }
}
