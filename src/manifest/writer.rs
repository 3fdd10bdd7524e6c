//! Rendering and persisting the manifest JSON.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::{BuildResult, GenerateError};
use crate::models::StickerManifest;

const INDENT: &[u8] = b"    ";

/// Serialise the manifest as a JSON array indented by four spaces.
pub fn render_manifest(manifest: &StickerManifest) -> BuildResult<Vec<u8>> {
  let mut buffer = Vec::new();
  let formatter = PrettyFormatter::with_indent(INDENT);
  let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
  manifest.serialize(&mut serializer)?;
  Ok(buffer)
}

/// Replace `path` with `contents`, all or nothing.
///
/// The bytes go to a sibling `.tmp` file that is synced and then renamed over
/// the target, so readers see either the old manifest or the new one.
pub fn write_manifest(path: &Path, contents: &[u8]) -> BuildResult<()> {
  let staging = staging_path(path);
  let result = write_synced(&staging, contents).and_then(|()| fs::rename(&staging, path));

  result.map_err(|source| {
    let _ = fs::remove_file(&staging);
    GenerateError::Write {
      path: path.to_path_buf(),
      source,
    }
  })
}

fn write_synced(path: &Path, contents: &[u8]) -> std::io::Result<()> {
  let mut file = File::create(path)?;
  file.write_all(contents)?;
  file.sync_all()
}

fn staging_path(path: &Path) -> PathBuf {
  let mut raw = OsString::from(path.as_os_str());
  raw.push(".tmp");
  PathBuf::from(raw)
}
