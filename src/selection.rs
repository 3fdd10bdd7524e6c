//! Helpers deciding which directory entries count as stickers.

use crate::project::DEFAULT_EXTENSIONS;

/// Trait describing which entry names belong in the manifest.
pub trait StickerInclusion {
  /// Returns `true` when the entry should be written to the manifest.
  fn is_included(&self, file_name: &str) -> bool;
}

/// Case-sensitive suffix allow-list of image extensions.
///
/// Only the entry name is inspected, so a directory called `foo.png` is
/// accepted just like a file would be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionAllowList {
  extensions: Vec<String>,
}

impl Default for ExtensionAllowList {
  fn default() -> Self {
    Self {
      extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
    }
  }
}

impl ExtensionAllowList {
  /// Build an allow-list, normalising each entry to a leading-dot suffix.
  ///
  /// Blank entries and duplicates are dropped. An input that normalises to
  /// nothing falls back to the default extensions.
  pub fn new<I, S>(extensions: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let mut normalised: Vec<String> = Vec::new();
    for value in extensions {
      let Some(extension) = normalise_extension(value.as_ref()) else {
        continue;
      };
      if !normalised.contains(&extension) {
        normalised.push(extension);
      }
    }

    if normalised.is_empty() {
      return Self::default();
    }

    Self {
      extensions: normalised,
    }
  }

  /// Normalised suffixes in configured order.
  pub fn extensions(&self) -> &[String] {
    &self.extensions
  }
}

impl StickerInclusion for ExtensionAllowList {
  fn is_included(&self, file_name: &str) -> bool {
    self
      .extensions
      .iter()
      .any(|extension| file_name.ends_with(extension.as_str()))
  }
}

fn normalise_extension(value: &str) -> Option<String> {
  let trimmed = value.trim().trim_start_matches('.');
  if trimmed.is_empty() {
    return None;
  }
  Some(format!(".{trimmed}"))
}
