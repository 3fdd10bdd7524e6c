//! Sticker manifest generation broken into focused submodules for easier testing.

mod generation;
mod scanning;
mod writer;

pub use generation::{generate, generate_manifest};
pub use scanning::{StickerListing, collect_sticker_names, count_entries};
pub use writer::{render_manifest, write_manifest};
