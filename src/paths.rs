use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Directory under the tools root holding the extracted runtime distribution
pub const TOOL_DIR_NAME: &str = "beta";

pub const BIN_WINE: &str = "wine";
pub const BIN_WINESERVER: &str = "wineserver";

pub static PATH_HOME: LazyLock<PathBuf> = LazyLock::new(|| {
    env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(env::temp_dir)
});

pub static PATH_LOCAL_SHARE: LazyLock<PathBuf> = LazyLock::new(|| PATH_HOME.join(".local/share"));

pub static PATH_DATA: LazyLock<PathBuf> = LazyLock::new(|| {
    if let Some(xdg_data_home) = env::var_os("XDG_DATA_HOME") {
        return PathBuf::from(xdg_data_home).join("winekeeper");
    }
    PATH_LOCAL_SHARE.join("winekeeper")
});

pub static PATH_TOOLS: LazyLock<PathBuf> = LazyLock::new(|| PATH_DATA.join("tools"));

pub static PATH_PREFIX: LazyLock<PathBuf> = LazyLock::new(|| PATH_DATA.join("prefix"));

pub static PATH_LOG: LazyLock<PathBuf> = LazyLock::new(|| PATH_DATA.join("runtime.log"));

pub static PATH_SETTINGS: LazyLock<PathBuf> = LazyLock::new(|| PATH_DATA.join("settings.json"));

/// Game default configuration files copied by the default game fixes installer
pub static PATH_DEFAULTS: LazyLock<PathBuf> = LazyLock::new(|| PATH_DATA.join("defaults"));

/// `<tools_root>/beta`
pub fn tool_dir(tools_root: &Path) -> PathBuf {
    tools_root.join(TOOL_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_dir_is_beta_under_root() {
        assert_eq!(
            tool_dir(Path::new("/data/tools")),
            PathBuf::from("/data/tools/beta")
        );
    }

    #[test]
    fn data_paths_share_a_root() {
        assert!(PATH_TOOLS.starts_with(&*PATH_DATA));
        assert!(PATH_PREFIX.starts_with(&*PATH_DATA));
        assert!(PATH_LOG.starts_with(&*PATH_DATA));
    }
}
