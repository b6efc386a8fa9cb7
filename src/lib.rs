//! Wine runtime lifecycle and process execution
//!
//! This crate keeps a single Wine runtime (plus the DXVK graphics layer) present and
//! configured, and runs processes inside its prefix.
//!
//! ## Module Structure
//! - `config`: runtime settings and their JSON persistence
//! - `env`: environment composition for child processes
//! - `log_sink`: shared append-only log for child stderr
//! - `process`: launching processes against the runtime binary
//! - `prefix`: prefix warm-up, reset and game default configuration
//! - `tool`: runtime download, extraction and graphics layer install
//! - `introspect`: winedbg process listing, winepath, registry writes, wineserver kill
//! - `manager`: `RuntimeManager`, the owner of all of the above

pub mod config;
pub mod env;
pub mod error;
pub mod game_fixes;
pub mod introspect;
pub mod log_sink;
pub mod manager;
pub mod paths;
pub mod prefix;
pub mod process;
pub mod tool;

pub use config::{GraphicsOverlay, LaunchMode, RuntimeSettings};
pub use error::{RuntimeError, RuntimeResult};
pub use manager::{Collaborators, RuntimeManager, ToolState};
pub use process::{Invocation, LaunchOptions, PrefixProcess, ProcessOutput};
pub use tool::CancelToken;
