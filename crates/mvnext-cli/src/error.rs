//! Error types for mvnext-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from mvnext-core
    #[error(transparent)]
    Core(#[from] mvnext_core::Error),

    /// Error from mvnext-fs
    #[error(transparent)]
    Fs(#[from] mvnext_fs::Error),

    /// Report could not be encoded as JSON
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// `check` found changes to apply
    #[error("{count} pending change(s); run `mvnext apply` to apply them")]
    ChangesPending { count: usize },

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
