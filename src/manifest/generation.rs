//! Generate the sticker manifest by scanning the source directory.

use std::path::Path;

use log::debug;
use same_file::is_same_file;

use crate::error::{BuildResult, GenerateError};
use crate::manifest::scanning::collect_sticker_names;
use crate::manifest::writer::{render_manifest, write_manifest};
use crate::models::{GenerationOutcome, StickerManifest};
use crate::project::StickerProjectLayout;
use crate::selection::{ExtensionAllowList, StickerInclusion};

/// Scan `source_dir_name` under `base_dir` for `.png`/`.webp` stickers and write
/// their names to `output_file_name` under the same base.
pub fn generate(
  base_dir: &Path,
  source_dir_name: &str,
  output_file_name: &str,
) -> BuildResult<GenerationOutcome> {
  let layout = StickerProjectLayout::new(base_dir, source_dir_name, output_file_name)?;
  generate_manifest(&layout, &ExtensionAllowList::default())
}

/// List the layout's source directory, keep the entries accepted by `selection`
/// and replace the manifest file with the result.
///
/// Nothing is written when the source directory is missing.
pub fn generate_manifest<S: StickerInclusion>(
  layout: &StickerProjectLayout,
  selection: &S,
) -> BuildResult<GenerationOutcome> {
  let source_path = layout.source_path();
  if !source_path.exists() {
    return Err(GenerateError::DirectoryNotFound {
      name: layout.source_dir_name.clone(),
      path: source_path,
    });
  }

  let output_path = layout.output_path();
  if output_path.exists() && is_same_file(&source_path, &output_path).unwrap_or(false) {
    return Err(GenerateError::OutputIsSourceDirectory { path: output_path });
  }

  let listing = collect_sticker_names(&source_path, selection)?;
  let mut manifest = StickerManifest::new(listing.names);
  manifest.apply_order(layout.order);
  debug!("{} stickers accepted from {}", manifest.len(), source_path.display());

  let contents = render_manifest(&manifest)?;
  write_manifest(&output_path, &contents)?;

  Ok(GenerationOutcome {
    source_path,
    output_path,
    manifest,
    skipped_non_utf8: listing.skipped_non_utf8,
  })
}
