//! Serializable boundary forms of the two operations' results.
//!
//! The library surfaces `Result`s; callers that want the flat
//! success/message shape (CLI output, embedding hosts) build these reports
//! from them. `error_message` is non-empty exactly when `success` is false.

use gitpick_utils::{CommitId, GitError};
use serde::Serialize;

use crate::clone::CloneOutcome;
use crate::tags::TagInfo;

/// Boundary form of a filtered clone result.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloneReport {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_id: Option<CommitId>,
    pub error_message: String,
}

impl From<Result<CloneOutcome, GitError>> for CloneReport {
    fn from(result: Result<CloneOutcome, GitError>) -> Self {
        match result {
            Ok(outcome) => Self {
                success: true,
                commit_id: outcome.commit_id,
                error_message: String::new(),
            },
            Err(err) => Self {
                success: false,
                commit_id: None,
                error_message: err.message(),
            },
        }
    }
}

/// Boundary form of a remote tag listing result.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagListReport {
    pub success: bool,
    /// Tags in the remote's advertised order; empty on failure.
    pub tags: Vec<TagInfo>,
    pub error_message: String,
}

impl From<Result<Vec<TagInfo>, GitError>> for TagListReport {
    fn from(result: Result<Vec<TagInfo>, GitError>) -> Self {
        match result {
            Ok(tags) => Self {
                success: true,
                tags,
                error_message: String::new(),
            },
            Err(err) => Self {
                success: false,
                tags: Vec::new(),
                error_message: err.message(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_report_from_success() {
        let outcome = CloneOutcome {
            commit_id: Some(CommitId::parse("1".repeat(40)).unwrap()),
        };
        let report = CloneReport::from(Ok(outcome));
        assert!(report.success);
        assert!(report.error_message.is_empty());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["commitId"], "1".repeat(40));
        assert_eq!(json["success"], true);
    }

    #[test]
    fn clone_report_from_failure_carries_message() {
        let err = GitError::Clone {
            url: "file:///missing".to_owned(),
            message: "repository not found".to_owned(),
        };
        let report = CloneReport::from(Err(err));
        assert!(!report.success);
        assert!(report.commit_id.is_none());
        assert!(report.error_message.contains("repository not found"));

        // commitId is omitted from JSON entirely when absent.
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("commitId").is_none());
    }

    #[test]
    fn tag_report_serializes_camel_case() {
        let report = TagListReport::from(Ok(vec![TagInfo {
            tag_name: "v1.0.0".to_owned(),
            commit_sha: "2".repeat(40),
        }]));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["tags"][0]["tagName"], "v1.0.0");
        assert_eq!(json["tags"][0]["commitSha"], "2".repeat(40));
        assert_eq!(json["errorMessage"], "");
    }
}
