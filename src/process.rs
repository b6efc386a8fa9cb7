//! Process launching against the runtime binary
//!
//! Every launch runs the primary Wine binary with the caller's arguments, the composed
//! environment and stderr drained into the log sink.
//!
//! ## Module Structure
//! - `types.rs`: `Invocation`, `LaunchOptions`, `ProcessOutput`
//! - `pure/`: argument splitting and command formatting
//! - `operations/`: spawning and the scoped `PrefixProcess` handle

mod operations;
mod pure;
mod types;

pub use operations::{PrefixProcess, spawn_in_prefix};
pub use pure::{format_launch_cmd, split_command};
pub use types::{Invocation, LaunchOptions, ProcessOutput};
