//! Remote tag enumeration over the reference-listing handshake.

use git2::{Direction, Remote};
use gitpick_utils::{GitError, GitResult, RemoteUrl};
use serde::Serialize;

use crate::session::Session;

const TAG_PREFIX: &str = "refs/tags/";

/// A tag advertised by a remote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagInfo {
    /// Name with the `refs/tags/` prefix stripped, otherwise exactly as
    /// advertised. Annotated tags typically appear twice: once under the tag
    /// name (tag object id) and once with a `^{}` suffix (peeled commit id).
    pub tag_name: String,
    /// Advertised object id as hex.
    pub commit_sha: String,
}

/// List the tags advertised by the remote at `url`, in the remote's order.
///
/// Uses a detached anonymous remote: no local repository is created and
/// nothing is written to disk. A single fetch-direction handshake retrieves
/// the advertised reference list; every entry under `refs/tags/` is kept
/// with no normalization beyond the prefix strip.
///
/// # Errors
/// [`GitError::Connection`] when the remote cannot be created, connected, or
/// listed. No partial list is ever returned on error.
pub fn list_remote_tags(url: &RemoteUrl) -> GitResult<Vec<TagInfo>> {
    let _session = Session::acquire()?;

    let mut remote =
        Remote::create_detached(url.as_str()).map_err(|e| GitError::connection(url.as_str(), &e))?;
    remote
        .connect(Direction::Fetch)
        .map_err(|e| GitError::connection(url.as_str(), &e))?;

    let tags: Vec<TagInfo> = remote
        .list()
        .map_err(|e| GitError::connection(url.as_str(), &e))?
        .iter()
        .filter_map(|head| {
            let short = head.name().strip_prefix(TAG_PREFIX)?;
            Some(TagInfo {
                tag_name: short.to_owned(),
                commit_sha: head.oid().to_string(),
            })
        })
        .collect();

    tracing::debug!(url = %url, count = tags.len(), "listed remote tags");
    if let Err(err) = remote.disconnect() {
        tracing::debug!(error = %err, "remote disconnect failed");
    }
    Ok(tags)
}
