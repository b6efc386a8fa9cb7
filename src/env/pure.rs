//! Pure functions for environment composition

mod compose;

pub use compose::{merge, prefix_only, runtime_defaults};
