pub mod errors;
pub mod newtypes;

pub use self::errors::{GitError, GitResult, ValidationError};
pub use self::newtypes::{CommitId, RemoteUrl};
