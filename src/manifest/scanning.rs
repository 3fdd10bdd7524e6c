//! Directory listing utilities for harvesting sticker names.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

use log::{debug, warn};

use crate::error::{BuildResult, GenerateError};
use crate::selection::StickerInclusion;

/// Names accepted from a single, non-recursive directory listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StickerListing {
    /// Accepted names in listing order.
    pub names: Vec<String>,
    /// Matching entries dropped because their names are not valid UTF-8.
    pub skipped_non_utf8: usize,
}

/// List `dir` once and keep the entries accepted by `selection`.
///
/// Only the entry name is consulted. Sub-directories appear in the raw listing
/// and are kept whenever their name carries an accepted suffix.
pub fn collect_sticker_names<S: StickerInclusion>(
    dir: &Path,
    selection: &S,
) -> BuildResult<StickerListing> {
    let read_err = |source: io::Error| GenerateError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut listing = StickerListing::default();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        match entry.file_name().into_string() {
            Ok(name) => {
                if selection.is_included(&name) {
                    listing.names.push(name);
                } else {
                    debug!("skipping {name}");
                }
            }
            Err(raw) => {
                let lossy = raw.to_string_lossy();
                if selection.is_included(&lossy) {
                    warn!("skipping {lossy}: file name is not valid UTF-8");
                    listing.skipped_non_utf8 += 1;
                }
            }
        }
    }

    Ok(listing)
}

/// Count every raw entry in `dir` with a fresh listing.
///
/// Returns `None` when the directory no longer exists.
pub fn count_entries(dir: &Path) -> BuildResult<Option<usize>> {
    let read_err = |source: io::Error| GenerateError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(read_err(err)),
    };

    let mut total = 0;
    for entry in entries {
        entry.map_err(read_err)?;
        total += 1;
    }
    Ok(Some(total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::ExtensionAllowList;
    use tempfile::tempdir;

    fn sorted(mut names: Vec<String>) -> Vec<String> {
        names.sort();
        names
    }

    #[test]
    fn keeps_only_allowed_extensions() {
        let dir = tempdir().unwrap();
        for name in ["a.png", "b.webp", "c.txt", "Icon.PNG"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }

        let listing = collect_sticker_names(dir.path(), &ExtensionAllowList::default()).unwrap();

        assert_eq!(sorted(listing.names), ["a.png", "b.webp"]);
        assert_eq!(listing.skipped_non_utf8, 0);
    }

    #[test]
    fn does_not_descend_into_subdirectories() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/deep.png"), "x").unwrap();
        fs::create_dir(dir.path().join("folder.png")).unwrap();

        let listing = collect_sticker_names(dir.path(), &ExtensionAllowList::default()).unwrap();

        assert_eq!(listing.names, ["folder.png"]);
    }

    #[test]
    fn listing_missing_directory_is_an_error() {
        let dir = tempdir().unwrap();
        let err = collect_sticker_names(&dir.path().join("gone"), &ExtensionAllowList::default())
            .unwrap_err();
        assert!(matches!(err, GenerateError::ReadDir { .. }));
    }

    #[test]
    fn counts_every_entry() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.png"), "x").unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        assert_eq!(count_entries(dir.path()).unwrap(), Some(3));
    }

    #[test]
    fn count_reports_missing_directory_as_none() {
        let dir = tempdir().unwrap();
        assert_eq!(count_entries(&dir.path().join("gone")).unwrap(), None);
    }

    #[cfg(unix)]
    #[test]
    fn skips_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        let raw = OsStr::from_bytes(b"bad\xff.png");
        if fs::write(dir.path().join(raw), "x").is_err() {
            // Some filesystems refuse non-UTF-8 names outright.
            return;
        }
        fs::write(dir.path().join("good.png"), "x").unwrap();

        let listing = collect_sticker_names(dir.path(), &ExtensionAllowList::default()).unwrap();

        assert_eq!(listing.names, ["good.png"]);
        assert_eq!(listing.skipped_non_utf8, 1);
    }
}
