use crate::error::{RuntimeError, RuntimeResult};
use crate::paths::{BIN_WINE, BIN_WINESERVER, PATH_LOG, PATH_PREFIX, PATH_TOOLS, tool_dir};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Versioned runtime distribution fetched on first use
pub const DEFAULT_ARCHIVE_URL: &str =
    "https://github.com/winekeeper/runtime/releases/download/wine-9.22-beta/wine-beta-amd64.zip";

/// Where the runtime binaries come from
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum LaunchMode {
    /// Downloaded and kept under `<tools_root>/beta`
    #[default]
    Managed,
    /// A user-supplied Wine installation; never downloaded or modified
    Custom { bin_dir: PathBuf },
}

/// DXVK on-screen diagnostic overlay
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GraphicsOverlay {
    #[default]
    None,
    Fps,
    Full,
}

impl GraphicsOverlay {
    /// Value for `DXVK_HUD`
    pub fn hud_token(&self) -> &'static str {
        match self {
            GraphicsOverlay::None => "",
            GraphicsOverlay::Fps => "fps",
            GraphicsOverlay::Full => "full",
        }
    }
}

/// Session settings, immutable once handed to the manager
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RuntimeSettings {
    #[serde(default)]
    pub launch_mode: LaunchMode,
    #[serde(default = "default_tools_root")]
    pub tools_root: PathBuf,
    #[serde(default = "default_prefix_dir")]
    pub prefix_dir: PathBuf,
    /// Passed through as `WINEDEBUG`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_channels: Option<String>,
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
    #[serde(default)]
    pub overlay: GraphicsOverlay,
    #[serde(default = "default_archive_url")]
    pub archive_url: String,
}

fn default_tools_root() -> PathBuf {
    PATH_TOOLS.clone()
}

fn default_prefix_dir() -> PathBuf {
    PATH_PREFIX.clone()
}

fn default_log_file() -> PathBuf {
    PATH_LOG.clone()
}

fn default_archive_url() -> String {
    DEFAULT_ARCHIVE_URL.to_string()
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        RuntimeSettings {
            launch_mode: LaunchMode::Managed,
            tools_root: default_tools_root(),
            prefix_dir: default_prefix_dir(),
            debug_channels: None,
            log_file: default_log_file(),
            overlay: GraphicsOverlay::None,
            archive_url: default_archive_url(),
        }
    }
}

impl RuntimeSettings {
    /// Extracted distribution directory (`<tools_root>/beta`)
    pub fn tool_dir(&self) -> PathBuf {
        tool_dir(&self.tools_root)
    }

    pub fn bin_dir(&self) -> PathBuf {
        match &self.launch_mode {
            LaunchMode::Managed => self.tool_dir().join("bin"),
            LaunchMode::Custom { bin_dir } => bin_dir.clone(),
        }
    }

    /// The primary runtime binary every launch goes through
    pub fn wine_binary(&self) -> PathBuf {
        self.bin_dir().join(BIN_WINE)
    }

    pub fn wineserver_binary(&self) -> PathBuf {
        self.bin_dir().join(BIN_WINESERVER)
    }

    pub fn is_managed(&self) -> bool {
        self.launch_mode == LaunchMode::Managed
    }

    /// Reject settings the manager cannot operate on
    pub fn validate(&self) -> RuntimeResult<()> {
        if let LaunchMode::Custom { bin_dir } = &self.launch_mode
            && !bin_dir.is_dir()
        {
            return Err(RuntimeError::InvalidSettings(format!(
                "custom runtime directory {} does not exist",
                bin_dir.display()
            )));
        }

        if self.prefix_dir.as_os_str().is_empty() {
            return Err(RuntimeError::InvalidSettings(
                "prefix directory is empty".to_string(),
            ));
        }
        if self.prefix_dir.exists() && !self.prefix_dir.is_dir() {
            return Err(RuntimeError::InvalidSettings(format!(
                "prefix path {} is not a directory",
                self.prefix_dir.display()
            )));
        }

        if self.log_file.is_dir() {
            return Err(RuntimeError::InvalidSettings(format!(
                "log path {} is a directory",
                self.log_file.display()
            )));
        }

        if self.is_managed() && self.archive_url.is_empty() {
            return Err(RuntimeError::InvalidSettings(
                "archive URL is empty".to_string(),
            ));
        }

        Ok(())
    }
}
