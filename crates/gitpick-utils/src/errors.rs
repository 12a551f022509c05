//! Error types for gitpick operations.
//!
//! Engine errors carry libgit2's own message verbatim; an empty engine
//! message is replaced with "Unknown error" so a failure is never silent.

use thiserror::Error;

/// Fallback when libgit2 reports a failure without a message.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Errors from clone and tag-listing operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to initialize git engine: {message}")]
    EngineInit { message: String },

    #[error("Failed to connect to {url}: {message}")]
    Connection { url: String, message: String },

    #[error("Failed to resolve reference '{reference}': {message}")]
    ReferenceResolution { reference: String, message: String },

    #[error("Clone of {url} failed: {message}")]
    Clone { url: String, message: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Validation errors for newtypes and path filters.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Empty value not allowed for {field}")]
    EmptyValue { field: String },

    #[error("Invalid remote URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid commit id: {0}")]
    InvalidCommitId(String),

    #[error("Invalid path filter '{path}': {reason}")]
    InvalidPathSpec { path: String, reason: String },
}

/// Result type alias for gitpick operations.
pub type GitResult<T> = Result<T, GitError>;

impl GitError {
    /// Connection-stage failure against `url`.
    #[must_use]
    pub fn connection(url: impl Into<String>, err: &git2::Error) -> Self {
        Self::Connection {
            url: url.into(),
            message: engine_message(err),
        }
    }

    /// Clone-stage failure against `url`.
    #[must_use]
    pub fn clone_failed(url: impl Into<String>, err: &git2::Error) -> Self {
        Self::Clone {
            url: url.into(),
            message: engine_message(err),
        }
    }

    /// Reference-resolution failure for `reference`.
    #[must_use]
    pub fn reference(reference: impl Into<String>, err: &git2::Error) -> Self {
        Self::ReferenceResolution {
            reference: reference.into(),
            message: engine_message(err),
        }
    }

    /// The human-readable message for this error.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Extract libgit2's message, falling back to [`UNKNOWN_ERROR`] when empty.
#[must_use]
pub fn engine_message(err: &git2::Error) -> String {
    let message = err.message().trim().to_owned();
    if message.is_empty() {
        UNKNOWN_ERROR.to_owned()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_message_falls_back_when_empty() {
        let err = git2::Error::from_str("");
        assert_eq!(engine_message(&err), UNKNOWN_ERROR);
    }

    #[test]
    fn engine_message_passes_through() {
        let err = git2::Error::from_str("remote rejected");
        assert_eq!(engine_message(&err), "remote rejected");
    }

    #[test]
    fn error_display_is_never_empty() {
        let err = GitError::connection("file:///missing", &git2::Error::from_str(""));
        assert!(err.message().contains(UNKNOWN_ERROR));
        assert!(err.message().contains("file:///missing"));
    }
}
