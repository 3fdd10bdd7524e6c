//! Resolving the directory the tool treats as its home.

use std::env;
use std::io;
use std::path::PathBuf;

use crate::error::{BuildResult, GenerateError};

/// Directory containing the running executable.
///
/// Sticker paths resolve against this rather than the working directory, so
/// the tool finds its sibling `sticker/` folder from wherever it is invoked.
pub fn program_dir() -> BuildResult<PathBuf> {
    let exe = env::current_exe().map_err(GenerateError::Locate)?;
    let exe = exe.canonicalize().unwrap_or(exe);
    exe.parent().map(PathBuf::from).ok_or_else(|| {
        GenerateError::Locate(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} has no parent directory", exe.display()),
        ))
    })
}

/// Explicit override if one was given, otherwise [`program_dir`].
pub fn resolve_base_dir(explicit: Option<PathBuf>) -> BuildResult<PathBuf> {
    match explicit {
        Some(dir) => Ok(dir),
        None => program_dir(),
    }
}
