use std::path::PathBuf;

/// A single filesystem node produced by a scan.
///
/// `depth` is computed against the normalized scan root, independent of how
/// the root path was spelled (relative vs. absolute, trailing separator or
/// not). The root itself is depth 0, its direct children are depth 1.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Full path to the entry, rooted at the path the scan was given.
    pub path: PathBuf,

    /// The entry's base name, no path component.
    pub name: String,

    /// What kind of node this is.
    pub kind: EntryKind,

    /// Path segments between the scan root and this entry. Root = 0.
    pub depth: usize,
}

impl Entry {
    /// `true` only for regular files.
    ///
    /// Symlinks are never followed during a scan and are reported as
    /// [`EntryKind::Symlink`] — their own type, not their target's — so this
    /// returns `false` for a link even when it points at a file. Directories
    /// and special files (devices, pipes, sockets) are also `false`.
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// `true` for directories, including the scan root itself.
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// The kind of a traversed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,

    /// A directory.
    Dir,

    /// A symbolic link (never followed).
    Symlink,

    /// Anything else (device files, pipes, sockets, etc.).
    Other,
}
