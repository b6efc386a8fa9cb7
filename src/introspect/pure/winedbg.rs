//! `winedbg --command "info proc"` output parsing
//!
//! Each process line carries its hex pid in a fixed 8-character column starting at
//! offset 1, e.g. ` 0000002c 3        'game.exe'`. The first character is a marker
//! (` `, `=` for the current process). Shorter ids left-aligned in the column are
//! accepted.
//!
//! Line contract: a line shorter than the column or whose column does not start with
//! hex digits is skipped, never fatal for the whole listing.

const PID_OFFSET: usize = 1;
const PID_WIDTH: usize = 8;

/// Parse the pid column of one line
pub fn parse_pid_field(line: &str) -> Option<u32> {
    let field = line.get(PID_OFFSET..PID_OFFSET + PID_WIDTH)?;
    let token = field.split_whitespace().next()?;
    u32::from_str_radix(token, 16).ok()
}

/// Ids of every line mentioning `executable`, in output order
pub fn parse_process_ids(output: &str, executable: &str) -> Vec<u32> {
    output
        .lines()
        .filter(|line| line.contains(executable))
        .filter_map(|line| {
            let pid = parse_pid_field(line);
            if pid.is_none() {
                tracing::debug!("skipping malformed winedbg line: {line:?}");
            }
            pid
        })
        .collect()
}
