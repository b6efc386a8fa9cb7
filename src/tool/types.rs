//! Provisioning type definitions

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{RuntimeError, RuntimeResult};
use crate::manager::RuntimeManager;

/// Cooperative cancellation flag shared between a caller and a running operation
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// `Err(Cancelled)` once cancelled
    pub fn check(&self) -> RuntimeResult<()> {
        if self.is_cancelled() {
            Err(RuntimeError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Downloads the runtime archive to a local file
pub trait ArchiveFetcher: Send + Sync {
    fn fetch(&self, url: &str, dest: &Path, cancel: &CancelToken) -> RuntimeResult<()>;
}

/// Unpacks the runtime archive; `dest` does not exist beforehand
pub trait ArchiveExtractor: Send + Sync {
    fn extract(&self, archive: &Path, dest: &Path, cancel: &CancelToken) -> RuntimeResult<()>;
}

/// Installs the graphics translation layer into the manager's prefix
pub trait GraphicsInstaller: Send + Sync {
    fn install(&self, manager: &RuntimeManager) -> RuntimeResult<()>;
}
