//! Pure functions for process launching

mod command;

pub use command::{format_launch_cmd, split_command};
