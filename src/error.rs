//! Error taxonomy for manifest generation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the crate.
pub type BuildResult<T> = Result<T, GenerateError>;

/// Failures that can stop a manifest run.
#[derive(Debug, Error)]
pub enum GenerateError {
  /// The resolved source directory does not exist. Nothing was written.
  #[error("'{name}' folder not found at: {}", path.display())]
  DirectoryNotFound {
    /// Configured directory name.
    name: String,
    /// Fully resolved path that was checked.
    path: PathBuf,
  },
  /// A configured name is not a single relative path segment.
  #[error("invalid {role} name {value:?}: expected a single non-empty path segment")]
  InvalidName {
    /// Which setting carried the bad value.
    role: &'static str,
    /// Offending value.
    value: String,
  },
  /// The output path points at the source directory itself.
  #[error("output {} is the source directory", path.display())]
  OutputIsSourceDirectory {
    /// Resolved output path.
    path: PathBuf,
  },
  /// Listing the source directory failed.
  #[error("failed to list {}", path.display())]
  ReadDir {
    /// Directory being listed.
    path: PathBuf,
    /// Underlying I/O error.
    #[source]
    source: io::Error,
  },
  /// Writing the manifest failed.
  #[error("failed to write manifest to {}", path.display())]
  Write {
    /// Path being written.
    path: PathBuf,
    /// Underlying I/O error.
    #[source]
    source: io::Error,
  },
  /// JSON serialisation of the manifest failed.
  #[error("failed to serialise manifest")]
  Serialize(#[from] serde_json::Error),
  /// The program directory could not be determined.
  #[error("failed to locate the program directory")]
  Locate(#[source] io::Error),
}

impl GenerateError {
  /// True when the run aborted because the source directory is missing.
  pub fn is_directory_not_found(&self) -> bool {
    matches!(self, Self::DirectoryNotFound { .. })
  }
}
