//! Optional configuration file describing the sticker layout.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::Deserialize;

use crate::error::BuildResult;
use crate::models::ManifestOrder;
use crate::project::{
    DEFAULT_EXTENSIONS, DEFAULT_OUTPUT_FILE, DEFAULT_SOURCE_DIR, StickerProjectLayout,
};
use crate::selection::ExtensionAllowList;

/// File name looked up next to the program when no explicit config is given.
pub const DEFAULT_CONFIG_FILE: &str = "stickers.config.json";

/// Discoverable generator configuration. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Directory, relative to the base directory, holding sticker images.
    pub source_dir: String,
    /// Manifest file name, relative to the base directory.
    pub output_file: String,
    /// Suffixes recognised as sticker images.
    pub extensions: Vec<String>,
    /// Ordering of manifest entries.
    pub order: ManifestOrder,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_dir: DEFAULT_SOURCE_DIR.into(),
            output_file: DEFAULT_OUTPUT_FILE.into(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
            order: ManifestOrder::default(),
        }
    }
}

impl GeneratorConfig {
    /// Look for [`DEFAULT_CONFIG_FILE`] in `base_dir`.
    ///
    /// A missing file yields the defaults. A file that cannot be read or parsed
    /// is reported and also yields the defaults, so a stray config never blocks
    /// a manifest refresh.
    pub fn discover(base_dir: &Path) -> Self {
        let candidate = Self::default_path(base_dir);
        if !candidate.is_file() {
            debug!("no config at {}, using defaults", candidate.display());
            return Self::default();
        }

        match Self::load(&candidate) {
            Ok(config) => config,
            Err(err) => {
                warn!("ignoring config {}: {err:#}", candidate.display());
                Self::default()
            }
        }
    }

    /// Read configuration from a specific JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Location of the discoverable config file for `base_dir`.
    pub fn default_path(base_dir: &Path) -> PathBuf {
        base_dir.join(DEFAULT_CONFIG_FILE)
    }

    /// Resolve the configured names against `base_dir`.
    pub fn to_layout(&self, base_dir: &Path) -> BuildResult<StickerProjectLayout> {
        let layout = StickerProjectLayout::new(
            base_dir,
            self.source_dir.as_str(),
            self.output_file.as_str(),
        )?;
        Ok(layout.with_order(self.order))
    }

    /// Extension allow-list built from the configured suffixes.
    pub fn allow_list(&self) -> ExtensionAllowList {
        ExtensionAllowList::new(&self.extensions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn discover_falls_back_to_defaults_without_file() {
        let dir = tempdir().unwrap();
        assert_eq!(GeneratorConfig::discover(dir.path()), GeneratorConfig::default());
    }

    #[test]
    fn discover_ignores_unparseable_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "{ not json").unwrap();

        assert_eq!(GeneratorConfig::discover(dir.path()), GeneratorConfig::default());
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            r#"{"outputFile": "stickers.json", "order": "name"}"#,
        )
        .unwrap();

        let config = GeneratorConfig::discover(dir.path());
        assert_eq!(config.source_dir, "sticker");
        assert_eq!(config.output_file, "stickers.json");
        assert_eq!(config.order, ManifestOrder::Name);
        assert_eq!(config.extensions, [".png", ".webp"]);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempdir().unwrap();
        let err = GeneratorConfig::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }

    #[test]
    fn to_layout_validates_names() {
        let config = GeneratorConfig {
            source_dir: "../outside".into(),
            ..GeneratorConfig::default()
        };
        assert!(config.to_layout(Path::new("base")).is_err());

        let layout = GeneratorConfig::default().to_layout(Path::new("base")).unwrap();
        assert_eq!(layout.source_path(), Path::new("base").join("sticker"));
    }
}
