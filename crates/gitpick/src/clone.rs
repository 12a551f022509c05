//! Filtered clone of a single remote branch.

use std::path::PathBuf;

use git2::Repository;
use git2::build::{CheckoutBuilder, RepoBuilder};
use gitpick_utils::{CommitId, GitError, GitResult, RemoteUrl};

use crate::paths::PathFilter;
use crate::session::Session;

/// Parameters for a filtered clone.
#[derive(Debug, Clone)]
pub struct CloneRequest {
    /// Remote repository to clone from.
    pub url: RemoteUrl,
    /// Branch to check out. Validity is deferred to the engine: an empty or
    /// unknown name surfaces as the clone primitive's own error.
    pub branch: String,
    /// Path prefixes the checkout is restricted to. Empty means all paths.
    pub path_filters: Vec<String>,
    /// Directory the working tree is created in. On failure it may be left
    /// partially populated; the caller owns cleanup.
    pub output_dir: PathBuf,
    /// Resolve the branch tip to a commit id after checkout.
    pub resolve_commit: bool,
}

impl CloneRequest {
    /// Request an unrestricted clone of `branch` with commit resolution on.
    #[must_use]
    pub fn new(url: RemoteUrl, branch: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            url,
            branch: branch.into(),
            path_filters: Vec::new(),
            output_dir: output_dir.into(),
            resolve_commit: true,
        }
    }
}

/// Result of a successful filtered clone.
#[derive(Debug, Clone)]
pub struct CloneOutcome {
    /// Tip commit of the cloned branch. `None` when resolution was not
    /// requested, or when best-effort resolution failed.
    pub commit_id: Option<CommitId>,
}

/// Clone `request.branch` from `request.url` into `request.output_dir`,
/// restricting the working tree to `request.path_filters`.
///
/// The restriction applies to what is written to the working tree, not to
/// what is fetched: the full branch history still lands under `.git`.
///
/// # Errors
/// [`GitError::Clone`] when the transfer or checkout fails, carrying the
/// engine's last message. Commit-id resolution failure is not an error; it
/// leaves [`CloneOutcome::commit_id`] empty.
pub fn clone_filtered(request: &CloneRequest) -> GitResult<CloneOutcome> {
    let _session = Session::acquire()?;

    let filter = PathFilter::new(request.path_filters.clone());
    let mut checkout = CheckoutBuilder::new();
    filter.apply(&mut checkout)?;

    let mut builder = RepoBuilder::new();
    builder.branch(&request.branch);
    builder.with_checkout(checkout);

    tracing::info!(
        url = %request.url,
        branch = %request.branch,
        filters = filter.len(),
        "cloning"
    );
    let repo = builder
        .clone(request.url.as_str(), &request.output_dir)
        .map_err(|e| GitError::clone_failed(request.url.as_str(), &e))?;

    let commit_id = if request.resolve_commit {
        match resolve_head_commit(&repo) {
            Ok(id) => Some(id),
            Err(err) => {
                // Best-effort by contract: the clone itself succeeded.
                tracing::debug!(error = %err, "commit id resolution failed");
                None
            }
        }
    } else {
        None
    };
    Ok(CloneOutcome { commit_id })
}

/// Resolve HEAD, which after checkout refers to the branch tip, to a commit.
fn resolve_head_commit(repo: &Repository) -> GitResult<CommitId> {
    let oid = repo
        .refname_to_id("HEAD")
        .map_err(|e| GitError::reference("HEAD", &e))?;
    let commit = repo
        .find_commit(oid)
        .map_err(|e| GitError::reference("HEAD", &e))?;
    Ok(CommitId::from(commit.id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn commit_all(repo: &Repository, message: &str) -> git2::Oid {
        let mut index = repo.index().unwrap();
        index
            .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
            .unwrap();
        index.write().unwrap();
        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let sig = git2::Signature::now("test", "test@example.com").unwrap();
        let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap()
    }

    /// Local source repo on branch `main` with `docs/readme.md` and
    /// `src/main.rs` at the tip.
    fn fixture_repo(dir: &Path) -> git2::Oid {
        let mut opts = git2::RepositoryInitOptions::new();
        opts.initial_head("main");
        let repo = Repository::init_opts(dir, &opts).unwrap();
        std::fs::create_dir_all(dir.join("docs")).unwrap();
        std::fs::write(dir.join("docs/readme.md"), "# docs\n").unwrap();
        std::fs::create_dir_all(dir.join("src")).unwrap();
        std::fs::write(dir.join("src/main.rs"), "fn main() {}\n").unwrap();
        commit_all(&repo, "initial")
    }

    fn request_for(src: &Path, out: &Path) -> CloneRequest {
        CloneRequest::new(
            RemoteUrl::parse(src.to_str().unwrap()).unwrap(),
            "main",
            out,
        )
    }

    #[test]
    fn filtered_clone_restricts_working_tree() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let tip = fixture_repo(src.path());
        let out_dir = out.path().join("clone");

        let mut request = request_for(src.path(), &out_dir);
        request.path_filters = vec!["docs/".to_owned()];
        let outcome = clone_filtered(&request).unwrap();

        assert!(out_dir.join("docs/readme.md").exists());
        assert!(!out_dir.join("src/main.rs").exists());
        assert_eq!(outcome.commit_id, Some(CommitId::from(tip)));
    }

    #[test]
    fn empty_filter_checks_out_everything() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        fixture_repo(src.path());
        let out_dir = out.path().join("clone");

        let request = request_for(src.path(), &out_dir);
        assert!(request.path_filters.is_empty());
        clone_filtered(&request).unwrap();

        assert!(out_dir.join("docs/readme.md").exists());
        assert!(out_dir.join("src/main.rs").exists());
    }

    #[test]
    fn commit_id_is_40_lowercase_hex() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        fixture_repo(src.path());
        let out_dir = out.path().join("clone");

        let outcome = clone_filtered(&request_for(src.path(), &out_dir)).unwrap();
        let id = outcome.commit_id.unwrap();
        assert!(CommitId::parse(id.as_str()).is_ok());
    }

    #[test]
    fn commit_id_skipped_when_not_requested() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        fixture_repo(src.path());
        let out_dir = out.path().join("clone");

        let mut request = request_for(src.path(), &out_dir);
        request.resolve_commit = false;
        let outcome = clone_filtered(&request).unwrap();
        assert!(outcome.commit_id.is_none());
    }

    #[test]
    fn unknown_branch_fails_with_engine_message() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        fixture_repo(src.path());
        let out_dir = out.path().join("clone");

        let mut request = request_for(src.path(), &out_dir);
        request.branch = "no-such-branch".to_owned();
        let err = clone_filtered(&request).unwrap_err();
        assert!(matches!(err, GitError::Clone { .. }));
        assert!(!err.message().is_empty());
    }

    #[test]
    fn unreachable_source_fails() {
        let out = tempfile::tempdir().unwrap();
        let missing = out.path().join("missing-repo");
        let out_dir = out.path().join("clone");

        let request = request_for(&missing, &out_dir);
        let err = clone_filtered(&request).unwrap_err();
        assert!(matches!(err, GitError::Clone { .. }));
        assert!(!err.message().is_empty());
    }
}
