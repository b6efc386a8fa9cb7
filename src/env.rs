//! Environment composition for processes launched in the prefix
//!
//! Three layers, later wins on key collision:
//! 1. the inherited process environment, left to `Command`
//! 2. runtime defaults derived from `RuntimeSettings`
//! 3. caller overrides
//!
//! Only layers 2 and 3 are built here; `merge` folds them into the map handed to
//! `Command::envs`, so non-UTF-8 inherited variables pass through untouched.
//!
//! ## Module Structure
//! - `types.rs`: variable names and fixed values
//! - `pure/`: layer construction and merging

mod pure;
mod types;

pub use pure::{merge, prefix_only, runtime_defaults};
pub use types::{
    DLL_OVERRIDES, ENV_ASYNC, ENV_DEBUG, ENV_DLL_OVERRIDES, ENV_HUD, ENV_MARKER, ENV_PREFIX,
    EnvMap,
};
