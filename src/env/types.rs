//! Environment variable names and fixed values

use std::collections::BTreeMap;

pub type EnvMap = BTreeMap<String, String>;

pub const ENV_PREFIX: &str = "WINEPREFIX";
pub const ENV_DLL_OVERRIDES: &str = "WINEDLLOVERRIDES";
/// Marks a process as started by us; read by nothing but humans and scripts
pub const ENV_MARKER: &str = "WINEKEEPER";
pub const ENV_DEBUG: &str = "WINEDEBUG";
pub const ENV_HUD: &str = "DXVK_HUD";
pub const ENV_ASYNC: &str = "DXVK_ASYNC";

/// Disables the .NET and HTML engines, menu entry generation and NVAPI
pub const DLL_OVERRIDES: &str = "mscoree,mshtml,winemenubuilder.exe=d;nvapi,nvapi64=d";
