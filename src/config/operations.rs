//! Settings persistence

mod io;

pub use io::{load_settings, save_settings};
