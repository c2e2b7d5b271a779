//! # ldx
//!
//! Lazy directory listing — depth filters, extension filters, zero eagerness.
//!
//! ldx walks a directory tree and hands back a lazy sequence: the root entry
//! first, then every descendant depth-first in native walk order. Filters —
//! a depth-equality filter and a name predicate ([`Matcher`]) — compose onto
//! the walk; nothing is collected until the caller pulls. It does **not**
//! watch for changes, search file contents, or cache between scans — a scan
//! is a one-shot, consume-once iterator.
//!
//! # Quick Start
//!
//! ```rust
//! use std::fs;
//!
//! let dir = tempfile::tempdir()?;
//! fs::write(dir.path().join("a.jpg"), "")?;
//! fs::write(dir.path().join("b.bmp"), "")?;
//! fs::create_dir(dir.path().join("sub"))?;
//! fs::write(dir.path().join("sub").join("c.txt"), "")?;
//!
//! let mut names = ldx::scan(dir.path())
//!     .extensions(&["jpg", "txt"])
//!     .names()?
//!     .collect::<Result<Vec<_>, _>>()?;
//! names.sort();
//!
//! assert_eq!(names, ["a.jpg", "c.txt"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Full Entries
//!
//! [`ScanBuilder::entries()`] yields [`Entry`] records instead of bare
//! names — path, kind, and depth relative to the scan root:
//!
//! ```rust
//! use ldx::EntryKind;
//!
//! let dir = tempfile::tempdir()?;
//! std::fs::write(dir.path().join("a.txt"), "")?;
//!
//! for entry in ldx::scan(dir.path()).entries()? {
//!     let entry = entry?;
//!     if entry.depth == 0 {
//!         assert_eq!(entry.kind, EntryKind::Dir); // the root itself
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Custom Matchers
//!
//! Implement [`Matcher`] for filtering logic beyond extension sets:
//!
//! ```rust
//! use ldx::Matcher;
//!
//! struct PrefixMatcher(&'static str);
//!
//! impl Matcher for PrefixMatcher {
//!     fn is_match(&self, name: &str) -> bool {
//!         name.starts_with(self.0)
//!     }
//! }
//! ```
//!
//! # Error Policy
//!
//! A missing or non-directory root fails the scan up front — before the
//! first entry — with [`LdxError::NotFound`] / [`LdxError::NotADirectory`].
//! An unreadable subdirectory mid-walk does **not** abort: it surfaces as an
//! `Err(`[`LdxError::PermissionDenied`]`)` item in the sequence and the walk
//! continues with the rest of the tree. Nothing is silently swallowed;
//! callers wanting abort-on-first-error semantics stop at the first `Err`.

#![forbid(unsafe_code)]

mod builder;
mod entry;
mod error;
mod matcher;
mod traits;
mod walk;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::ScanBuilder;
pub use entry::{Entry, EntryKind};
pub use error::LdxError;
pub use matcher::ExtensionMatcher;
pub use traits::Matcher;
pub use walk::{depth_of, Entries, Names};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a new [`ScanBuilder`] rooted at `root`.
///
/// The root is not touched until [`entries()`](ScanBuilder::entries) or
/// [`names()`](ScanBuilder::names) starts the scan; it must reference an
/// existing directory at that point.
///
/// # Example
///
/// ```rust
/// let dir = tempfile::tempdir()?;
/// std::fs::write(dir.path().join("report.txt"), "")?;
///
/// let names = ldx::scan(dir.path())
///     .names()?
///     .collect::<Result<Vec<_>, _>>()?;
///
/// assert_eq!(names, ["report.txt"]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn scan(root: impl Into<std::path::PathBuf>) -> ScanBuilder {
    ScanBuilder::new(root.into())
}
