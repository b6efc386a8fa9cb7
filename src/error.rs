use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("runtime I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("download request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("download failed: HTTP {0}")]
    Download(u16),
    #[error("archive extraction failed: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("operation cancelled")]
    Cancelled,
    #[error("graphics layer install failed: {0}")]
    GraphicsInstall(String),
    #[error("game fixes install failed: {0}")]
    GameFixes(String),
    #[error("failed to start '{}': {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("runtime binary not found at {}", .0.display())]
    BinaryMissing(PathBuf),
    #[error("working directory does not exist: {}", .0.display())]
    WorkingDirMissing(PathBuf),
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
    #[error("unexpected output from {tool}: {detail}")]
    Parse { tool: &'static str, detail: String },
    #[error("settings file error: {0}")]
    Settings(#[from] serde_json::Error),
}

pub type RuntimeResult<T> = Result<T, RuntimeError>;
