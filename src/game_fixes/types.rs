//! Game fixes type definitions

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::RuntimeResult;

/// Key/value patches per config file, keyed by path relative to the config dir
pub type FilePatches = BTreeMap<String, BTreeMap<String, String>>;

/// Installs a game's default configuration once the prefix exists
pub trait GameFixes: Send + Sync {
    fn install(&self, prefix_dir: &Path, config_dir: &Path) -> RuntimeResult<()>;
}
