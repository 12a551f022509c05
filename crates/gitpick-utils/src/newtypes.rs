//! NewType wrappers to avoid primitive obsession.

use std::fmt;

use serde::Serialize;

use crate::errors::ValidationError;

/// A remote repository URL.
///
/// Deliberately scheme-agnostic: git remotes may be `https://`, `ssh://`,
/// scp-like `user@host:path`, `file://` or a plain local path. The only
/// rejected inputs are empty strings and strings with interior NUL bytes,
/// which libgit2 cannot represent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoteUrl(String);

impl RemoteUrl {
    /// Parse and validate a remote URL string.
    pub fn parse(s: impl AsRef<str>) -> Result<Self, ValidationError> {
        let s = s.as_ref().trim();
        if s.is_empty() {
            return Err(ValidationError::EmptyValue {
                field: "url".to_owned(),
            });
        }
        if s.contains('\0') {
            return Err(ValidationError::InvalidUrl(
                "contains NUL byte".to_owned(),
            ));
        }
        Ok(Self(s.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RemoteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A commit id: exactly 40 lowercase hexadecimal characters, no prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CommitId(String);

impl CommitId {
    /// Parse and validate a hex commit id string.
    pub fn parse(s: impl AsRef<str>) -> Result<Self, ValidationError> {
        let s = s.as_ref();
        if s.len() != 40 {
            return Err(ValidationError::InvalidCommitId(format!(
                "expected 40 hex characters, got {}",
                s.len()
            )));
        }
        if !s
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        {
            return Err(ValidationError::InvalidCommitId(format!(
                "not lowercase hex: {s}"
            )));
        }
        Ok(Self(s.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<git2::Oid> for CommitId {
    fn from(oid: git2::Oid) -> Self {
        // Oid renders as 40 lowercase hex characters.
        Self(oid.to_string())
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
