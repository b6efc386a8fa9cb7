//! Game default configuration
//!
//! After the prefix is warmed up, the game's config directory gets any default files
//! it is missing, then selected keys are patched in place.
//!
//! ## Module Structure
//! - `types.rs`: the `GameFixes` collaborator trait
//! - `pure/`: config format detection and key patching
//! - `operations/`: the default installer

mod operations;
mod pure;
mod types;

pub use operations::DefaultConfigInstaller;
pub use pure::{ConfigFormat, apply_patches, detect_format};
pub use types::{FilePatches, GameFixes};
