//! Pure functions for config patching

mod patch;

pub use patch::{ConfigFormat, apply_patches, detect_format};
