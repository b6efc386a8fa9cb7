//! Default configuration install

use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{RuntimeError, RuntimeResult};
use crate::game_fixes::pure::{apply_patches, detect_format};
use crate::game_fixes::types::{FilePatches, GameFixes};
use crate::paths::PATH_DEFAULTS;

/// Copies default config files the game does not have yet, then applies patches
///
/// Existing user files are never overwritten, only patched.
pub struct DefaultConfigInstaller {
    pub defaults_dir: PathBuf,
    pub patches: FilePatches,
}

impl Default for DefaultConfigInstaller {
    fn default() -> Self {
        DefaultConfigInstaller {
            defaults_dir: PATH_DEFAULTS.clone(),
            patches: FilePatches::new(),
        }
    }
}

impl GameFixes for DefaultConfigInstaller {
    fn install(&self, _prefix_dir: &Path, config_dir: &Path) -> RuntimeResult<()> {
        fs::create_dir_all(config_dir)?;

        if self.defaults_dir.is_dir() {
            copy_missing(&self.defaults_dir, config_dir)?;
        } else {
            tracing::debug!(
                "no default config directory at {}",
                self.defaults_dir.display()
            );
        }

        for (file, patches) in &self.patches {
            patch_file(config_dir, file, patches)?;
        }
        Ok(())
    }
}

fn copy_missing(src: &Path, dest: &Path) -> RuntimeResult<()> {
    for entry in walkdir::WalkDir::new(src).min_depth(1).follow_links(false) {
        let entry = entry.map_err(|e| RuntimeError::GameFixes(e.to_string()))?;
        let rel_path = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| RuntimeError::GameFixes(e.to_string()))?;
        let target = dest.join(rel_path);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else if !target.exists() {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            tracing::info!("installed default config {}", rel_path.display());
        }
    }
    Ok(())
}

fn patch_file(
    config_dir: &Path,
    file: &str,
    patches: &BTreeMap<String, String>,
) -> RuntimeResult<()> {
    let rel = Path::new(file);
    if rel
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
    {
        return Err(RuntimeError::GameFixes(format!(
            "config patch path '{file}' escapes the config directory"
        )));
    }

    let path = config_dir.join(rel);
    let patched = if path.exists() {
        let content = fs::read_to_string(&path)?;
        let format = detect_format(&content);
        tracing::debug!("patching {file} as {format:?}");
        apply_patches(&content, patches, format)?
    } else {
        // New files are written INI style
        patches
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, patched)?;
    Ok(())
}
