//! Runtime provisioning
//!
//! Makes sure the Wine distribution exists under `<tools_root>/beta`, downloading and
//! unpacking it on first use, then warms up the prefix and installs DXVK into it.
//!
//! ## Module Structure
//! - `types.rs`: collaborator traits and `CancelToken`
//! - `operations/`: HTTP fetch, zip extraction, DXVK install

mod operations;
mod types;

use std::fs;

use crate::error::{RuntimeError, RuntimeResult};
use crate::manager::RuntimeManager;

pub use operations::{DLL_OVERRIDES_KEY, DXVK_DLLS, DxvkInstaller, HttpFetcher, ZipExtractor};
pub use types::{ArchiveExtractor, ArchiveFetcher, CancelToken, GraphicsInstaller};

impl RuntimeManager {
    /// Ensure the runtime is installed and ready
    ///
    /// The only idempotency gate is whether the runtime binary exists: if it does,
    /// nothing is fetched or touched. Checks `cancel` between download chunks and
    /// archive entries.
    pub fn ensure_tool(&mut self, cancel: &CancelToken) -> RuntimeResult<()> {
        let binary = self.settings.wine_binary();
        if binary.is_file() {
            tracing::debug!(binary = %binary.display(), "runtime already present");
            self.state.ready = true;
            self.refresh_state();
            return Ok(());
        }

        if !self.settings.is_managed() {
            return Err(RuntimeError::BinaryMissing(binary));
        }

        self.provision(cancel)?;

        self.state.ready = true;
        self.refresh_state();
        tracing::info!("runtime ready");
        Ok(())
    }

    fn provision(&self, cancel: &CancelToken) -> RuntimeResult<()> {
        let tool_dir = self.settings.tool_dir();

        // Leftovers of an earlier failed run; the binary is missing so nothing in
        // there is trusted
        if tool_dir.exists() {
            tracing::warn!(dir = %tool_dir.display(), "removing incomplete runtime directory");
            fs::remove_dir_all(&tool_dir)?;
        }
        fs::create_dir_all(&self.settings.tools_root)?;

        let archive = tempfile::Builder::new()
            .prefix("runtime-")
            .suffix(".download")
            .tempfile_in(&self.settings.tools_root)?;

        tracing::info!(url = %self.settings.archive_url, "fetching runtime archive");
        self.collaborators
            .fetcher
            .fetch(&self.settings.archive_url, archive.path(), cancel)?;

        tracing::info!(dest = %tool_dir.display(), "extracting runtime archive");
        if let Err(e) = self
            .collaborators
            .extractor
            .extract(archive.path(), &tool_dir, cancel)
        {
            if tool_dir.exists()
                && let Err(cleanup) = fs::remove_dir_all(&tool_dir)
            {
                tracing::warn!("could not remove partial extraction: {cleanup}");
            }
            return Err(e);
        }
        archive.close()?;

        let binary = self.settings.wine_binary();
        if !binary.is_file() {
            return Err(RuntimeError::BinaryMissing(binary));
        }

        self.ensure_prefix()?;

        tracing::info!("installing graphics layer");
        self.collaborators.graphics.install(self)
    }
}
