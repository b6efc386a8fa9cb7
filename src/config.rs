pub mod operations;
pub mod types;

// Re-export types
pub use types::{DEFAULT_ARCHIVE_URL, GraphicsOverlay, LaunchMode, RuntimeSettings};

// Re-export operations
pub use operations::{load_settings, save_settings};
