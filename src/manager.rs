//! The runtime manager
//!
//! `RuntimeManager` owns the settings, tool state, log sink and the external
//! collaborators for one runtime/prefix pair. Operations are spread over the modules
//! they belong to (`tool`, `prefix`, `introspect`); this file holds construction,
//! state and the launcher entry point.

use std::fs;

use crate::config::RuntimeSettings;
use crate::env::{merge, runtime_defaults};
use crate::error::RuntimeResult;
use crate::game_fixes::{DefaultConfigInstaller, GameFixes};
use crate::log_sink::LogSink;
use crate::process::{Invocation, LaunchOptions, PrefixProcess, spawn_in_prefix};
use crate::tool::{
    ArchiveExtractor, ArchiveFetcher, DxvkInstaller, GraphicsInstaller, HttpFetcher, ZipExtractor,
};


/// External operations the manager delegates to
pub struct Collaborators {
    pub fetcher: Box<dyn ArchiveFetcher>,
    pub extractor: Box<dyn ArchiveExtractor>,
    pub graphics: Box<dyn GraphicsInstaller>,
    pub game_fixes: Box<dyn GameFixes>,
}

impl Default for Collaborators {
    fn default() -> Self {
        Collaborators {
            fetcher: Box::new(HttpFetcher::default()),
            extractor: Box::new(ZipExtractor),
            graphics: Box::new(DxvkInstaller),
            game_fixes: Box::new(DefaultConfigInstaller::default()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToolState {
    /// Runtime binary present and prefix directory exists
    pub downloaded: bool,
    /// Set once provisioning succeeded or the binary was found; never cleared
    pub ready: bool,
}

pub struct RuntimeManager {
    pub(crate) settings: RuntimeSettings,
    pub(crate) state: ToolState,
    pub(crate) sink: LogSink,
    pub(crate) collaborators: Collaborators,
}

impl RuntimeManager {
    pub fn new(settings: RuntimeSettings) -> RuntimeResult<Self> {
        Self::with_collaborators(settings, Collaborators::default())
    }

    /// Validate settings, create the prefix directory if absent and open the log
    pub fn with_collaborators(
        settings: RuntimeSettings,
        collaborators: Collaborators,
    ) -> RuntimeResult<Self> {
        settings.validate()?;

        if !settings.prefix_dir.exists() {
            tracing::info!(prefix = %settings.prefix_dir.display(), "creating prefix directory");
            fs::create_dir_all(&settings.prefix_dir)?;
        }
        let sink = LogSink::open(&settings.log_file)?;

        let mut manager = RuntimeManager {
            settings,
            state: ToolState::default(),
            sink,
            collaborators,
        };
        manager.refresh_state();
        Ok(manager)
    }

    pub fn settings(&self) -> &RuntimeSettings {
        &self.settings
    }

    pub fn tool_state(&self) -> ToolState {
        self.state
    }

    pub fn is_tool_downloaded(&self) -> bool {
        self.state.downloaded
    }

    pub fn is_tool_ready(&self) -> bool {
        self.state.ready
    }

    pub fn log_sink(&self) -> &LogSink {
        &self.sink
    }

    pub(crate) fn refresh_state(&mut self) {
        self.state.downloaded =
            self.settings.wine_binary().is_file() && self.settings.prefix_dir.is_dir();
    }

    /// Launch the runtime binary with `invocation` as its arguments
    ///
    /// Returns as soon as the process has started; the caller owns the handle.
    pub fn run_in_prefix(
        &self,
        invocation: Invocation,
        options: LaunchOptions,
    ) -> RuntimeResult<PrefixProcess> {
        let args = invocation.into_args();
        let env = merge(runtime_defaults(&self.settings), &options.env_overrides);
        spawn_in_prefix(
            &self.settings.wine_binary(),
            &args,
            &env,
            &options,
            &self.sink,
        )
    }
}

impl Drop for RuntimeManager {
    fn drop(&mut self) {
        if let Err(e) = self.sink.flush() {
            tracing::warn!("failed to flush runtime log: {e}");
        }
    }
}
