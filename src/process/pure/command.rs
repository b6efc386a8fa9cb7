// Pure command building functions (no I/O)

use std::path::Path;
use std::process::Command;

/// Split a legacy command string into arguments on whitespace
pub fn split_command(command: &str) -> Vec<String> {
    command.split_whitespace().map(str::to_string).collect()
}

/// Format a launch command for debug logging
///
/// Only variables set explicitly on the command are listed, not the inherited ones.
pub fn format_launch_cmd(cmd: &Command) -> String {
    let mut output = String::new();

    let cwd = cmd.get_current_dir().unwrap_or_else(|| Path::new("."));
    output.push_str(&format!("CWD={}\n", cwd.display()));

    for (key, value) in cmd.get_envs() {
        match value {
            Some(value) => output.push_str(&format!(
                "{}={}\n",
                key.to_string_lossy(),
                value.to_string_lossy()
            )),
            None => output.push_str(&format!("unset {}\n", key.to_string_lossy())),
        }
    }

    output.push_str(&format!("\"{}\"", cmd.get_program().to_string_lossy()));
    for arg in cmd.get_args() {
        output.push_str(&format!(" \"{}\"", arg.to_string_lossy()));
    }

    output
}
