use std::path::PathBuf;
use std::sync::Arc;

use crate::error::LdxError;
use crate::matcher::ExtensionMatcher;
use crate::traits::Matcher;
use crate::walk::{Entries, Names, WalkConfig};

// ---------------------------------------------------------------------------
// ScanBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring and running a directory scan.
///
/// Created via [`ldx::scan()`](crate::scan). Configure with chained builder
/// methods, then call [`entries()`](ScanBuilder::entries) for full
/// [`Entry`](crate::Entry) records or [`names()`](ScanBuilder::names) for
/// base file names only.
///
/// # Example
///
/// ```rust,no_run
/// let names = ldx::scan("photos")
///     .extensions(&["jpg", "png"])
///     .names()?
///     .collect::<Result<Vec<_>, _>>()?;
/// # Ok::<(), ldx::LdxError>(())
/// ```
pub struct ScanBuilder {
    root: PathBuf,
    at_depth: Option<usize>,
    filter: Option<NameFilter>,
}

/// Name filter slot. Extension sets are validated and compiled only when the
/// scan starts, so the shorthand stays chainable.
enum NameFilter {
    Extensions(Vec<String>),
    Custom(Box<dyn Matcher>),
}

impl ScanBuilder {
    pub(crate) fn new(root: PathBuf) -> Self {
        Self {
            root,
            at_depth: None,
            filter: None,
        }
    }

    // ── Filters ───────────────────────────────────────────────────────────

    /// Keep only entries directly inside a directory `d` levels below the
    /// root. `at_depth(0)` keeps the root's immediate children and nothing
    /// deeper; the root itself never survives a depth filter.
    ///
    /// Subtrees deeper than the target are pruned rather than walked and
    /// discarded.
    pub fn at_depth(mut self, d: usize) -> Self {
        self.at_depth = Some(d);
        self
    }

    /// Shorthand for extension filtering.
    ///
    /// Equivalent to `.with_matcher(ExtensionMatcher::new(extensions)?)`,
    /// except validation is deferred to [`entries()`](ScanBuilder::entries)
    /// / [`names()`](ScanBuilder::names) so the chain stays infallible.
    /// Matching is case-sensitive.
    ///
    /// Calling this and [`with_matcher`](ScanBuilder::with_matcher) on the
    /// same builder is last-call-wins.
    pub fn extensions<S: AsRef<str>>(mut self, extensions: &[S]) -> Self {
        self.filter = Some(NameFilter::Extensions(
            extensions.iter().map(|s| s.as_ref().to_string()).collect(),
        ));
        self
    }

    /// Set a custom name filter.
    ///
    /// Any type implementing [`Matcher`] is accepted. For the common case of
    /// extension filtering, prefer `.extensions()`.
    pub fn with_matcher(mut self, m: impl Matcher + 'static) -> Self {
        self.filter = Some(NameFilter::Custom(Box::new(m)));
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Start the scan, yielding full [`Entry`](crate::Entry) records lazily.
    ///
    /// With no filters configured this is the raw walk: the root entry
    /// first, then every descendant exactly once, in native walk order.
    ///
    /// # Errors
    ///
    /// Fails before producing any entry if the root does not exist
    /// ([`LdxError::NotFound`]), is not a directory
    /// ([`LdxError::NotADirectory`]), or cannot be inspected, or if a
    /// configured extension set is empty or malformed. Failures on
    /// subdirectories during the walk surface as `Err` items in the
    /// sequence instead — the walk continues past them.
    pub fn entries(self) -> Result<Entries, LdxError> {
        let root = self.root;
        check_root(&root)?;

        let matcher: Option<Arc<dyn Matcher>> = match self.filter {
            None => None,
            Some(NameFilter::Custom(m)) => Some(Arc::from(m)),
            Some(NameFilter::Extensions(exts)) => {
                Some(Arc::new(ExtensionMatcher::new(&exts)?))
            }
        };

        Ok(Entries::new(WalkConfig {
            root,
            at_depth: self.at_depth,
            matcher,
        }))
    }

    /// Start the scan, yielding base file names lazily.
    ///
    /// Applies every configured filter, keeps regular files only, and
    /// strips the path — each item is just the file's name, in the order
    /// the walk discovered it.
    ///
    /// # Errors
    ///
    /// Same contract as [`entries()`](ScanBuilder::entries).
    pub fn names(self) -> Result<Names, LdxError> {
        Ok(Names::new(self.entries()?))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Validate the scan root before any entry is produced.
fn check_root(root: &std::path::Path) -> Result<(), LdxError> {
    let meta = std::fs::metadata(root).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => LdxError::NotFound(root.to_path_buf()),
        std::io::ErrorKind::PermissionDenied => LdxError::PermissionDenied(root.to_path_buf()),
        _ => LdxError::Io {
            path: root.to_path_buf(),
            source: e,
        },
    })?;

    if !meta.is_dir() {
        return Err(LdxError::NotADirectory(root.to_path_buf()));
    }
    Ok(())
}
