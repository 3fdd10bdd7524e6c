#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod builder;
pub mod config;
pub mod error;
pub mod locate;
pub mod manifest;
pub mod models;
pub mod project;
pub mod selection;

pub use builder::{BuildReport, ManifestBuilder};
pub use config::GeneratorConfig;
pub use error::{BuildResult, GenerateError};
pub use locate::{program_dir, resolve_base_dir};
pub use manifest::generate;
pub use models::{ManifestOrder, StickerManifest};
pub use project::StickerProjectLayout;
pub use selection::{ExtensionAllowList, StickerInclusion};
