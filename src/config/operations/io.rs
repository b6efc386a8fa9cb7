use crate::config::types::RuntimeSettings;
use crate::error::RuntimeResult;

use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Load settings from a JSON file
///
/// Falls back to defaults when the file is missing or cannot be parsed.
pub fn load_settings(path: &Path) -> RuntimeSettings {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return RuntimeSettings::default();
        }
    };

    match serde_json::from_reader::<_, RuntimeSettings>(BufReader::new(file)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(path = %path.display(), "ignoring unreadable settings file: {e}");
            RuntimeSettings::default()
        }
    }
}

pub fn save_settings(path: &Path, settings: &RuntimeSettings) -> RuntimeResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, settings)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{GraphicsOverlay, LaunchMode};
    use std::path::PathBuf;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings(&dir.path().join("nope.json"));
        assert_eq!(settings, RuntimeSettings::default());
    }

    #[test]
    fn garbage_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_settings(&path), RuntimeSettings::default());
    }

    #[test]
    fn saved_settings_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/settings.json");

        let settings = RuntimeSettings {
            launch_mode: LaunchMode::Custom {
                bin_dir: PathBuf::from("/opt/wine/bin"),
            },
            debug_channels: Some("+seh,-fixme".to_string()),
            overlay: GraphicsOverlay::Full,
            ..RuntimeSettings::default()
        };
        save_settings(&path, &settings).unwrap();

        assert_eq!(load_settings(&path), settings);
    }
}
