//! Data structures produced while generating the sticker manifest.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Ordering applied to manifest entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ManifestOrder {
  /// Keep whatever order the directory listing returned.
  #[default]
  Listing,
  /// Sort names by their byte representation.
  Name,
}

/// Sticker filenames in the order they will be written.
///
/// Serialises as a bare JSON array of strings, which is the format the
/// front-end fetches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StickerManifest {
  names: Vec<String>,
}

impl StickerManifest {
  /// Wrap an already filtered list of names.
  pub fn new(names: Vec<String>) -> Self {
    Self { names }
  }

  /// Apply the requested ordering in place.
  pub fn apply_order(&mut self, order: ManifestOrder) {
    if order == ManifestOrder::Name {
      self.names.sort();
    }
  }

  /// Number of stickers in the manifest.
  pub fn len(&self) -> usize {
    self.names.len()
  }

  /// True when no sticker was found.
  pub fn is_empty(&self) -> bool {
    self.names.is_empty()
  }

  /// Borrow the names.
  pub fn names(&self) -> &[String] {
    &self.names
  }
}

/// Result of a successful `generate` call.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
  /// Directory that was scanned.
  pub source_path: PathBuf,
  /// File the manifest was written to.
  pub output_path: PathBuf,
  /// Manifest contents as written.
  pub manifest: StickerManifest,
  /// Entries dropped because their names were not valid UTF-8.
  pub skipped_non_utf8: usize,
}

/// Counts reported once the manifest is on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestSummary {
  /// Name of the scanned directory as configured.
  pub source_dir_name: String,
  /// Number of sticker images written.
  pub image_count: usize,
  /// Raw entry count from an independent listing, `None` when the directory
  /// disappeared before it could be re-read.
  pub total_entries: Option<usize>,
}
