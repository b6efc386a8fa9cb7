//! Config file format detection and key patching

use std::collections::BTreeMap;

use crate::error::{RuntimeError, RuntimeResult};

/// Detected config file format
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    /// `set key "value"`
    SetStyle,
    /// `key=value` or `key = value`
    IniStyle,
    /// `key value`
    SpaceStyle,
    /// Fall back to replacing any line mentioning the key
    Unknown,
}

/// Guess the format from the first 50 meaningful lines
pub fn detect_format(content: &str) -> ConfigFormat {
    let (mut set, mut ini, mut space) = (0, 0, 0);

    for line in content.lines().take(50) {
        let trimmed = line.trim();
        if trimmed.is_empty()
            || trimmed.starts_with('#')
            || trimmed.starts_with("//")
            || trimmed.starts_with('[')
        {
            continue;
        }

        if trimmed.starts_with("set ") && (trimmed.contains('"') || trimmed.contains('\'')) {
            set += 1;
        } else if trimmed.contains('=') && !trimmed.starts_with('=') {
            ini += 1;
        } else if trimmed.split_whitespace().count() >= 2 {
            space += 1;
        }
    }

    if set > 0 && set >= ini && set >= space {
        ConfigFormat::SetStyle
    } else if ini > 0 && ini >= space {
        ConfigFormat::IniStyle
    } else if space > 0 {
        ConfigFormat::SpaceStyle
    } else {
        ConfigFormat::Unknown
    }
}

/// Rewrite every patched key; a key with no matching line is an error
pub fn apply_patches(
    content: &str,
    patches: &BTreeMap<String, String>,
    format: ConfigFormat,
) -> RuntimeResult<String> {
    let mut result = content.to_string();

    for (key, value) in patches {
        result = patch_key(&result, key, value, format).ok_or_else(|| {
            RuntimeError::GameFixes(format!("key '{key}' not found in config file"))
        })?;
    }

    Ok(result)
}

fn patch_key(content: &str, key: &str, value: &str, format: ConfigFormat) -> Option<String> {
    let mut found = false;
    let lines: Vec<String> = content
        .lines()
        .map(|line| match rewrite_line(line, key, value, format) {
            Some(new_line) => {
                found = true;
                new_line
            }
            None => line.to_string(),
        })
        .collect();

    found.then(|| lines.join("\n"))
}

fn rewrite_line(line: &str, key: &str, value: &str, format: ConfigFormat) -> Option<String> {
    let trimmed = line.trim();
    let indent = &line[..line.len() - line.trim_start().len()];

    match format {
        ConfigFormat::SetStyle => {
            let after_key = trimmed.strip_prefix("set ")?.trim_start().strip_prefix(key)?;
            after_key
                .starts_with(|c: char| c.is_whitespace() || c == '"' || c == '\'')
                .then(|| format!("{indent}set {key} \"{value}\""))
        }
        ConfigFormat::IniStyle => {
            let (line_key, _) = trimmed.split_once('=')?;
            if line_key.trim() != key {
                return None;
            }
            Some(if trimmed.contains(" = ") {
                format!("{indent}{key} = {value}")
            } else {
                format!("{indent}{key}={value}")
            })
        }
        ConfigFormat::SpaceStyle => (trimmed.split_whitespace().next()? == key)
            .then(|| format!("{indent}{key} {value}")),
        ConfigFormat::Unknown => line
            .contains(key)
            .then(|| format!("{indent}{key} {value}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patches(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_detect_set_style() {
        let content = r#"
set platform "win"
set storefront "steam"
"#;
        assert_eq!(detect_format(content), ConfigFormat::SetStyle);
    }

    #[test]
    fn test_detect_ini_style_ignores_sections() {
        let content = "[Display]\nFullscreen=1\nWidth = 1920\n";
        assert_eq!(detect_format(content), ConfigFormat::IniStyle);
    }

    #[test]
    fn test_detect_space_style() {
        assert_eq!(
            detect_format("r_fullscreen 1\nr_vsync 0\n"),
            ConfigFormat::SpaceStyle
        );
    }

    #[test]
    fn test_detect_unknown() {
        assert_eq!(detect_format("# only comments\n\n"), ConfigFormat::Unknown);
    }

    #[test]
    fn test_set_style_patch_keeps_indent_and_neighbours() {
        let content = "  set disable_steam \"0\"\nset platform \"win\"";
        let result = apply_patches(
            content,
            &patches(&[("disable_steam", "1")]),
            ConfigFormat::SetStyle,
        )
        .unwrap();
        assert_eq!(result, "  set disable_steam \"1\"\nset platform \"win\"");
    }

    #[test]
    fn test_set_style_needs_exact_key() {
        let content = "set vsync_mode \"2\"";
        let result = apply_patches(content, &patches(&[("vsync", "0")]), ConfigFormat::SetStyle);
        assert!(result.is_err());
    }

    #[test]
    fn test_ini_patch_preserves_spacing() {
        let content = "[Display]\nFullscreen = 1\nVSync=1";
        let result = apply_patches(
            content,
            &patches(&[("Fullscreen", "0"), ("VSync", "0")]),
            ConfigFormat::IniStyle,
        )
        .unwrap();
        assert_eq!(result, "[Display]\nFullscreen = 0\nVSync=0");
    }

    #[test]
    fn test_space_patch() {
        let result = apply_patches(
            "r_fullscreen 1\nr_vsync 1",
            &patches(&[("r_vsync", "0")]),
            ConfigFormat::SpaceStyle,
        )
        .unwrap();
        assert_eq!(result, "r_fullscreen 1\nr_vsync 0");
    }

    #[test]
    fn test_missing_key_is_error() {
        let result = apply_patches(
            "key1=value1",
            &patches(&[("nonexistent", "value")]),
            ConfigFormat::IniStyle,
        );
        assert!(matches!(result, Err(RuntimeError::GameFixes(_))));
    }
}
