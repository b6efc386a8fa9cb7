//! Prefix lifecycle: warm-up, reset and game default configuration

use std::fs;
use std::path::Path;

use crate::error::RuntimeResult;
use crate::manager::RuntimeManager;
use crate::process::{Invocation, LaunchOptions};

/// Trivial command that makes Wine finish lazy prefix initialisation
pub const WARMUP_ARGS: [&str; 4] = ["cmd", "/c", "dir", "%userprofile%/Documents"];

impl RuntimeManager {
    /// Run the warm-up command and block until it exits
    ///
    /// The output is discarded. A non-zero exit is logged, not returned.
    pub fn ensure_prefix(&self) -> RuntimeResult<()> {
        tracing::debug!(prefix = %self.settings.prefix_dir.display(), "warming up prefix");

        let output = self
            .run_in_prefix(
                Invocation::args(WARMUP_ARGS),
                LaunchOptions::default().capture_output(),
            )?
            .wait_with_output()?;

        if !output.status.success() {
            tracing::warn!("prefix warm-up exited with {}", output.status);
        }
        Ok(())
    }

    /// Delete the prefix and start over with an empty one
    ///
    /// Must not race any process still running against this prefix.
    pub fn reset_prefix(&mut self) -> RuntimeResult<()> {
        self.refresh_state();

        let prefix = self.settings.prefix_dir.clone();
        if prefix.exists() {
            tracing::info!(prefix = %prefix.display(), "removing prefix");
            fs::remove_dir_all(&prefix)?;
        }
        fs::create_dir_all(&prefix)?;
        self.refresh_state();

        self.ensure_prefix()
    }

    /// Warm up the prefix, then install the game's default configuration
    pub fn ensure_game_fixes(&self, config_dir: &Path) -> RuntimeResult<()> {
        self.ensure_prefix()?;
        self.collaborators
            .game_fixes
            .install(&self.settings.prefix_dir, config_dir)
    }
}
