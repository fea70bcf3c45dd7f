// crates/fs_probe/src/error.rs

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors for probe operations that refuse to guess.
#[derive(Error, Debug)]
pub enum FsProbeError {
    /// A file name was requested without a base name.
    #[error("file name is empty")]
    EmptyName,

    /// A temporary-folder name part would escape the temp root.
    #[error("invalid folder name part: {part:?}")]
    InvalidNamePart { part: String },

    /// The directory a name was requested for does not exist.
    #[error("directory does not exist: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
