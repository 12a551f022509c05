//! gitpick — filtered clones and remote tag listing.
//!
//! Two independent, stateless-per-call operations over libgit2:
//!
//! - [`clone_filtered`] clones a single named branch of a remote, restricts
//!   the working tree to a set of path prefixes, and reports the resolved
//!   tip commit id.
//! - [`list_remote_tags`] enumerates the tags a remote advertises via the
//!   reference-listing handshake, without cloning or fetching object data.
//!
//! Both operations bracket their work with a [`Session`] and release every
//! native resource on every exit path. Neither mutates the remote.

mod clone;
mod paths;
mod report;
mod session;
mod tags;

pub use self::clone::{CloneOutcome, CloneRequest, clone_filtered};
pub use self::paths::PathFilter;
pub use self::report::{CloneReport, TagListReport};
pub use self::session::Session;
pub use self::tags::{TagInfo, list_remote_tags};

pub use gitpick_utils::{CommitId, GitError, GitResult, RemoteUrl, ValidationError};
