//! Manifest run orchestrator: generate, re-count and report.

use log::{info, warn};

use crate::error::BuildResult;
use crate::manifest::{count_entries, generate_manifest};
use crate::models::{GenerationOutcome, ManifestSummary};
use crate::project::StickerProjectLayout;
use crate::selection::{ExtensionAllowList, StickerInclusion};

const SEPARATOR_WIDTH: usize = 50;

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct BuildReport {
  /// What was scanned and written.
  pub outcome: GenerationOutcome,
  /// Counts reported after writing.
  pub summary: ManifestSummary,
}

/// High-level helper running one manifest refresh for a layout.
pub struct ManifestBuilder<S = ExtensionAllowList> {
  layout: StickerProjectLayout,
  selection: S,
}

impl ManifestBuilder<ExtensionAllowList> {
  /// Builder using the default `.png`/`.webp` allow-list.
  pub fn with_default_extensions(layout: StickerProjectLayout) -> Self {
    Self::new(layout, ExtensionAllowList::default())
  }
}

impl<S: StickerInclusion> ManifestBuilder<S> {
  /// Create a builder for `layout` filtering entries with `selection`.
  pub fn new(layout: StickerProjectLayout, selection: S) -> Self {
    Self { layout, selection }
  }

  /// Layout this builder resolves paths against.
  pub fn layout(&self) -> &StickerProjectLayout {
    &self.layout
  }

  /// Log where the run will read from and write to.
  pub fn announce(&self) {
    info!("Sticker manifest generator starting...");
    info!("Program location: {}", self.layout.base_dir.display());
    info!("Target directory: {}", self.layout.source_path().display());
    info!("Output file: {}", self.layout.output_path().display());
    info!("{}", "-".repeat(SEPARATOR_WIDTH));
  }

  /// Write the manifest, then count the directory again for the summary.
  ///
  /// The image count comes from the manifest itself. The raw entry total is
  /// taken from a second listing.
  pub fn build(&self) -> BuildResult<BuildReport> {
    let outcome = generate_manifest(&self.layout, &self.selection)?;
    info!("Scanned directory: {}", outcome.source_path.display());
    info!(
      "Created {} at: {}",
      self.layout.output_file_name,
      outcome.output_path.display()
    );

    let summary = self.summarize(&outcome)?;
    log_summary(&summary);

    Ok(BuildReport { outcome, summary })
  }

  fn summarize(&self, outcome: &GenerationOutcome) -> BuildResult<ManifestSummary> {
    let total_entries = count_entries(&outcome.source_path)?;
    if total_entries.is_none() {
      warn!(
        "Could not count files - '{}' disappeared after the manifest was written",
        self.layout.source_dir_name
      );
    }

    Ok(ManifestSummary {
      source_dir_name: self.layout.source_dir_name.clone(),
      image_count: outcome.manifest.len(),
      total_entries,
    })
  }
}

/// Log the closing summary lines for a run.
pub fn log_summary(summary: &ManifestSummary) {
  info!(
    "Sticker collection updated! {} images found in '{}' folder.",
    summary.image_count, summary.source_dir_name
  );
  if let Some(total) = summary.total_entries {
    info!("Total files in '{}' folder: {}", summary.source_dir_name, total);
  }
  info!("The chat app will now use these custom stickers.");
}
