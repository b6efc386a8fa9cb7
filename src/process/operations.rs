//! Process operations - spawning and child lifecycle

mod handle;
mod spawn;

pub use handle::PrefixProcess;
pub use spawn::spawn_in_prefix;
