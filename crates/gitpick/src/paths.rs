//! Path filter builder for restricted checkouts.
//!
//! libgit2's checkout filtering takes a contiguous array of NUL-terminated
//! pathspec strings. [`PathFilter`] owns that buffer for the duration of one
//! operation: it is materialized lazily and exactly once, and freed with the
//! operation scope.

use std::cell::OnceCell;
use std::ffi::CString;

use git2::build::CheckoutBuilder;
use gitpick_utils::ValidationError;

/// An owned set of checkout pathspecs.
///
/// An empty filter means "no restriction": applying it leaves the checkout
/// options untouched, and libgit2 treats an empty pathspec list as matching
/// every path.
#[derive(Debug, Default)]
pub struct PathFilter {
    paths: Vec<String>,
    specs: OnceCell<Vec<CString>>,
}

impl PathFilter {
    /// Create a filter from an ordered sequence of path prefixes.
    #[must_use]
    pub fn new(paths: Vec<String>) -> Self {
        Self {
            paths,
            specs: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// The NUL-terminated pathspec array, built on first call and reused on
    /// every subsequent one.
    ///
    /// # Errors
    /// A path containing an interior NUL byte cannot be represented and is
    /// rejected as [`ValidationError::InvalidPathSpec`].
    pub fn specs(&self) -> Result<&[CString], ValidationError> {
        if let Some(built) = self.specs.get() {
            return Ok(built);
        }
        let mut built = Vec::with_capacity(self.paths.len());
        for path in &self.paths {
            let spec =
                CString::new(path.as_str()).map_err(|_| ValidationError::InvalidPathSpec {
                    path: path.clone(),
                    reason: "contains NUL byte".to_owned(),
                })?;
            built.push(spec);
        }
        Ok(self.specs.get_or_init(|| built))
    }

    /// Feed every pathspec into the checkout options.
    pub fn apply(&self, checkout: &mut CheckoutBuilder<'_>) -> Result<(), ValidationError> {
        for spec in self.specs()? {
            checkout.path(spec.as_bytes());
        }
        Ok(())
    }
}
