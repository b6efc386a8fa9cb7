//! Pure parsers for runtime helper output

mod winedbg;
mod winepath;

pub use winedbg::{parse_pid_field, parse_process_ids};
pub use winepath::last_non_empty_line;
