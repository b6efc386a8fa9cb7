use std::path::Path;
use std::process::{Command, Stdio};

use crate::env::EnvMap;
use crate::error::{RuntimeError, RuntimeResult};
use crate::log_sink::LogSink;
use crate::process::operations::handle::PrefixProcess;
use crate::process::pure::format_launch_cmd;
use crate::process::types::LaunchOptions;

/// Start `binary` with `args`, returning as soon as the process is running
///
/// `env` is layered over the inherited environment; the caller is expected to have
/// already merged defaults and overrides into it.
pub fn spawn_in_prefix(
    binary: &Path,
    args: &[String],
    env: &EnvMap,
    options: &LaunchOptions,
    sink: &LogSink,
) -> RuntimeResult<PrefixProcess> {
    if !binary.is_file() {
        return Err(RuntimeError::BinaryMissing(binary.to_path_buf()));
    }
    if let Some(dir) = &options.working_dir
        && !dir.is_dir()
    {
        return Err(RuntimeError::WorkingDirMissing(dir.clone()));
    }

    let mut cmd = Command::new(binary);
    cmd.args(args)
        .envs(env)
        .stdin(Stdio::null())
        .stderr(Stdio::piped());
    if options.capture_output {
        cmd.stdout(Stdio::piped());
    }
    if let Some(dir) = &options.working_dir {
        cmd.current_dir(dir);
    }

    tracing::debug!("launching in prefix:\n{}", format_launch_cmd(&cmd));

    let mut child = cmd.spawn().map_err(|source| RuntimeError::Spawn {
        program: binary.to_path_buf(),
        source,
    })?;

    let label = format!(
        "pid {} ({})",
        child.id(),
        args.first().map(String::as_str).unwrap_or("wine")
    );
    let drain = child.stderr.take().map(|stderr| sink.drain(stderr, label));

    Ok(PrefixProcess::new(child, drain))
}
