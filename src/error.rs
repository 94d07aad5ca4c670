use std::io;
use std::path::PathBuf;

/// Errors that abort a walk.
#[derive(Debug, thiserror::Error)]
pub enum WalkError {
    /// The archive destination exists but is not a directory.
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("{op} {}: {err}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        err: io::Error,
    },

    /// Reported by the directory iterator, e.g. permission denied on a subtree.
    #[error(transparent)]
    Traversal(#[from] ignore::Error),

    #[error("{} is not under {}", .path.display(), .root.display())]
    OutsideRoot { path: PathBuf, root: PathBuf },

    /// Writing to stdout or the deletion log failed.
    #[error("write output: {0}")]
    Output(io::Error),
}

impl WalkError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, err: io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            err,
        }
    }
}

pub type WalkResult<T> = std::result::Result<T, WalkError>;
