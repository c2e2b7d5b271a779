use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use ignore::WalkBuilder;

use crate::entry::{Entry, EntryKind};
use crate::error::LdxError;
use crate::traits::Matcher;

// ---------------------------------------------------------------------------
// depth_of
// ---------------------------------------------------------------------------

/// Path segments strictly between `root` and `path`, both normalized.
///
/// `Some(0)` for the root itself, `Some(1)` for its direct children, and so
/// on. `None` if `path` is not under `root`. Trailing separators and `.`
/// segments on either argument do not affect the result — depth is counted
/// over normal components only, so it comes out the same whether the root
/// was spelled relative or absolute.
///
/// ```rust
/// use std::path::Path;
///
/// assert_eq!(ldx::depth_of(Path::new("/tmp/x/"), Path::new("/tmp/x")), Some(0));
/// assert_eq!(ldx::depth_of(Path::new("/tmp/x"), Path::new("/tmp/x/a/b.txt")), Some(2));
/// assert_eq!(ldx::depth_of(Path::new("/tmp/x"), Path::new("/tmp/y")), None);
/// ```
pub fn depth_of(root: &Path, path: &Path) -> Option<usize> {
    let rel = path.strip_prefix(root).ok()?;
    Some(
        rel.components()
            .filter(|c| matches!(c, Component::Normal(_)))
            .count(),
    )
}

// ---------------------------------------------------------------------------
// WalkConfig
// ---------------------------------------------------------------------------

/// Parameters passed from the builder to the walk.
///
/// `pub(crate)` — not part of the public API. Callers configure these via
/// the builder methods (`.at_depth()`, `.extensions()`, `.with_matcher()`).
pub(crate) struct WalkConfig {
    pub root: PathBuf,
    pub at_depth: Option<usize>,
    pub matcher: Option<Arc<dyn Matcher>>,
}

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// Lazy sequence of [`Entry`] values for one scan.
///
/// Produced by [`ScanBuilder::entries()`](crate::ScanBuilder::entries).
/// The root entry comes first at depth 0, then descendants depth-first in
/// native walk order (not sorted). Entries are discovered as the consumer
/// advances — a large tree starts producing results before it has been
/// fully walked.
///
/// Unreadable subtrees do not abort the scan: the failure is yielded inline
/// as an `Err` item and the walk continues with the rest of the tree.
///
/// Consume-once. Re-scanning means building a fresh iterator via
/// [`scan()`](crate::scan).
pub struct Entries {
    walker: ignore::Walk,
    config: WalkConfig,
}

impl Entries {
    pub(crate) fn new(config: WalkConfig) -> Self {
        log::debug!("scanning {}", config.root.display());

        let mut builder = WalkBuilder::new(&config.root);
        builder
            .standard_filters(false)
            .ignore(false)
            .parents(false)
            .hidden(false)
            .follow_links(false)
            .same_file_system(false);

        // A depth-equality filter prunes everything deeper than its target.
        if let Some(d) = config.at_depth {
            builder.max_depth(Some(d + 1));
        }

        Self {
            walker: builder.build(),
            config,
        }
    }

    /// Keep or drop an already-built entry per the configured filters.
    fn keep(&self, entry: &Entry) -> bool {
        if let Some(d) = self.config.at_depth {
            if entry.depth != d + 1 {
                return false;
            }
        }
        if let Some(matcher) = &self.config.matcher {
            if !matcher.is_match(&entry.name) {
                return false;
            }
        }
        true
    }

    fn to_entry(&self, dirent: ignore::DirEntry) -> Option<Entry> {
        // file_type() is None only for stdin entries, which a directory
        // walk never produces. Unclassifiable entries are dropped.
        let kind = match dirent.file_type() {
            Some(ft) if ft.is_dir() => EntryKind::Dir,
            Some(ft) if ft.is_file() => EntryKind::File,
            Some(ft) if ft.is_symlink() => EntryKind::Symlink,
            Some(_) => EntryKind::Other,
            None => return None,
        };

        let path = dirent.path().to_path_buf();
        let name = dirent.file_name().to_string_lossy().into_owned();

        // Counted against the normalized root rather than trusting the
        // walker's notion of depth, so the value is stable however the root
        // path was spelled. The walker's count backs the rare strip failure.
        let depth = depth_of(&self.config.root, &path).unwrap_or_else(|| dirent.depth());

        Some(Entry {
            path,
            name,
            kind,
            depth,
        })
    }
}

// The wrapped ignore::Walk is not Debug, so the impl is by hand.
impl fmt::Debug for Entries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entries")
            .field("root", &self.config.root)
            .field("at_depth", &self.config.at_depth)
            .finish_non_exhaustive()
    }
}

impl Iterator for Entries {
    type Item = Result<Entry, LdxError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.walker.next()? {
                Ok(dirent) => {
                    let entry = match self.to_entry(dirent) {
                        Some(e) => e,
                        None => continue,
                    };
                    if !self.keep(&entry) {
                        continue;
                    }
                    return Some(Ok(entry));
                }
                Err(e) => {
                    let err = map_walk_error(e);
                    if let Some(path) = err.path() {
                        log::warn!("skipped {}: {}", path.display(), err);
                    }
                    return Some(Err(err));
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Names
// ---------------------------------------------------------------------------

/// Lazy sequence of base file names for one scan.
///
/// Produced by [`ScanBuilder::names()`](crate::ScanBuilder::names). Applies
/// every filter [`Entries`] applies, keeps regular files only, and yields
/// just the base name — no path component — in discovery order. Errors pass
/// through unchanged.
pub struct Names {
    entries: Entries,
}

impl Names {
    pub(crate) fn new(entries: Entries) -> Self {
        Self { entries }
    }
}

impl fmt::Debug for Names {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Names")
            .field("entries", &self.entries)
            .finish()
    }
}

impl Iterator for Names {
    type Item = Result<String, LdxError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.entries.next()? {
                Ok(entry) if entry.is_file() => return Some(Ok(entry.name)),
                Ok(_) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Map ignore::Error to LdxError
// ---------------------------------------------------------------------------

fn map_walk_error(e: ignore::Error) -> LdxError {
    match e {
        ignore::Error::WithPath { path, err } => match *err {
            ignore::Error::Io(io_err) => {
                if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                    LdxError::PermissionDenied(path)
                } else {
                    LdxError::Io {
                        path,
                        source: io_err,
                    }
                }
            }
            _ => LdxError::Walk(format!("{}", err)),
        },
        ignore::Error::Io(io_err) => LdxError::Io {
            path: PathBuf::new(),
            source: io_err,
        },
        other => LdxError::Walk(other.to_string()),
    }
}
