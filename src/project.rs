//! Resolved filesystem layout for a manifest run.

use std::path::{Component, Path, PathBuf};

use crate::error::{BuildResult, GenerateError};
use crate::models::ManifestOrder;

/// Default name of the directory scanned for stickers.
pub const DEFAULT_SOURCE_DIR: &str = "sticker";
/// Default name of the manifest written next to the program.
pub const DEFAULT_OUTPUT_FILE: &str = "images.json";
/// Extensions recognised as sticker images when nothing else is configured.
pub const DEFAULT_EXTENSIONS: [&str; 2] = [".png", ".webp"];

/// Where to read stickers from and where to write the manifest.
///
/// Both names are resolved against `base_dir`, which is normally the directory
/// holding the executable rather than the process working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StickerProjectLayout {
  /// Directory the two names are resolved against.
  pub base_dir: PathBuf,
  /// Name of the scanned directory.
  pub source_dir_name: String,
  /// Name of the manifest file.
  pub output_file_name: String,
  /// Order applied to the manifest entries.
  pub order: ManifestOrder,
}

impl StickerProjectLayout {
  /// Build a layout after checking that both names are single path segments.
  pub fn new(
    base_dir: impl Into<PathBuf>,
    source_dir_name: impl Into<String>,
    output_file_name: impl Into<String>,
  ) -> BuildResult<Self> {
    let source_dir_name = source_dir_name.into();
    let output_file_name = output_file_name.into();
    validate_segment("source directory", &source_dir_name)?;
    validate_segment("output file", &output_file_name)?;

    Ok(Self {
      base_dir: base_dir.into(),
      source_dir_name,
      output_file_name,
      order: ManifestOrder::default(),
    })
  }

  /// Layout using the default names under `base_dir`.
  pub fn with_defaults(base_dir: impl Into<PathBuf>) -> Self {
    Self {
      base_dir: base_dir.into(),
      source_dir_name: DEFAULT_SOURCE_DIR.into(),
      output_file_name: DEFAULT_OUTPUT_FILE.into(),
      order: ManifestOrder::default(),
    }
  }

  /// Replace the manifest ordering.
  pub fn with_order(mut self, order: ManifestOrder) -> Self {
    self.order = order;
    self
  }

  /// Resolved path of the scanned directory.
  pub fn source_path(&self) -> PathBuf {
    self.base_dir.join(&self.source_dir_name)
  }

  /// Resolved path of the manifest file.
  pub fn output_path(&self) -> PathBuf {
    self.base_dir.join(&self.output_file_name)
  }
}

fn validate_segment(role: &'static str, value: &str) -> BuildResult<()> {
  let mut components = Path::new(value).components();
  match (components.next(), components.next()) {
    (Some(Component::Normal(_)), None) if !value.contains(['/', '\\']) => Ok(()),
    _ => Err(GenerateError::InvalidName {
      role,
      value: value.to_string(),
    }),
  }
}
