use crate::config::RuntimeSettings;
use crate::env::types::{
    DLL_OVERRIDES, ENV_ASYNC, ENV_DEBUG, ENV_DLL_OVERRIDES, ENV_HUD, ENV_MARKER, ENV_PREFIX,
    EnvMap,
};

/// Fixed variables set on every launched process
pub fn runtime_defaults(settings: &RuntimeSettings) -> EnvMap {
    let mut env = prefix_only(settings);
    env.insert(ENV_DLL_OVERRIDES.to_string(), DLL_OVERRIDES.to_string());
    env.insert(ENV_MARKER.to_string(), "1".to_string());
    if let Some(channels) = &settings.debug_channels {
        env.insert(ENV_DEBUG.to_string(), channels.clone());
    }
    env.insert(ENV_HUD.to_string(), settings.overlay.hud_token().to_string());
    env.insert(ENV_ASYNC.to_string(), "1".to_string());
    env
}

/// Just `WINEPREFIX`, for helpers that must not see the rest of the defaults
pub fn prefix_only(settings: &RuntimeSettings) -> EnvMap {
    let mut env = EnvMap::new();
    env.insert(
        ENV_PREFIX.to_string(),
        settings.prefix_dir.to_string_lossy().into_owned(),
    );
    env
}

/// Overlay `layer` onto `base`; keys in `layer` win
pub fn merge(mut base: EnvMap, layer: &EnvMap) -> EnvMap {
    for (key, value) in layer {
        base.insert(key.clone(), value.clone());
    }
    base
}
