use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LdxError {
    // Traversal
    #[error("root not found")]
    NotFound(PathBuf),

    #[error("root is not a directory")]
    NotADirectory(PathBuf),

    #[error("permission denied")]
    PermissionDenied(PathBuf),

    #[error("IO error")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("walk error: {0}")]
    Walk(String),

    // Config
    #[error("extension set is empty")]
    EmptyExtensionSet,

    #[error("invalid extension: {0:?}")]
    InvalidExtension(String),

    #[error("invalid pattern")]
    InvalidPattern(#[from] regex::Error),
}

impl LdxError {
    /// The path this error occurred at, if applicable.
    /// Callers use this to present "skipped: <path>" without pattern matching on variants.
    ///
    /// Mid-walk IO errors do not always carry a path; those report `None`
    /// rather than an empty placeholder.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::NotFound(p) | Self::NotADirectory(p) | Self::PermissionDenied(p) => Some(p),
            Self::Io { path, .. } if !path.as_os_str().is_empty() => Some(path),
            _ => None,
        }
    }

    /// Whether a scan can continue past this error.
    ///
    /// Recoverable errors (permission denied, mid-walk IO) are yielded as
    /// `Err` items and the walk keeps going. Everything else is reported
    /// before the first entry is produced and halts the scan outright.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::PermissionDenied(_) | Self::Io { .. } | Self::Walk(_))
    }
}
