//! Launcher type definitions

use std::path::PathBuf;
use std::process::ExitStatus;

use crate::env::EnvMap;
use crate::process::pure::split_command;

/// Arguments handed to the runtime binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Legacy shell-style string, split on whitespace.
    ///
    /// Quoting is not understood, so a path with spaces becomes several arguments.
    /// Never build one of these from untrusted input; use `Args`.
    Command(String),
    /// One element per argument, passed through untouched
    Args(Vec<String>),
}

impl Invocation {
    pub fn args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Invocation::Args(args.into_iter().map(Into::into).collect())
    }

    pub fn command(command: impl Into<String>) -> Self {
        Invocation::Command(command.into())
    }

    pub fn into_args(self) -> Vec<String> {
        match self {
            Invocation::Command(command) => split_command(&command),
            Invocation::Args(args) => args,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub working_dir: Option<PathBuf>,
    /// Applied last, over inherited and runtime default variables
    pub env_overrides: EnvMap,
    /// Pipe stdout to the caller instead of inheriting it
    pub capture_output: bool,
}

impl LaunchOptions {
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_overrides.insert(key.into(), value.into());
        self
    }

    pub fn capture_output(mut self) -> Self {
        self.capture_output = true;
        self
    }
}

/// Exit status plus captured stdout
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    pub status: ExitStatus,
    pub stdout: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_keep_embedded_spaces() {
        let inv = Invocation::args(["winepath", "--windows", "/home/me/My Games"]);
        assert_eq!(
            inv.into_args(),
            vec!["winepath", "--windows", "/home/me/My Games"]
        );
    }

    #[test]
    fn test_command_string_splits_on_spaces() {
        let inv = Invocation::command("winepath --windows /home/me/My Games");
        assert_eq!(
            inv.into_args(),
            vec!["winepath", "--windows", "/home/me/My", "Games"]
        );
    }

    #[test]
    fn test_options_builder() {
        let opts = LaunchOptions::default()
            .in_dir("/games")
            .env("DXVK_HUD", "full")
            .capture_output();
        assert_eq!(opts.working_dir, Some(PathBuf::from("/games")));
        assert_eq!(opts.env_overrides.get("DXVK_HUD").unwrap(), "full");
        assert!(opts.capture_output);
    }
}
