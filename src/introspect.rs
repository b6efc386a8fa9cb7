//! Introspection helpers run through the runtime
//!
//! - `winedbg` process listing parsed for process ids
//! - `winepath` Unix to Windows path translation
//! - `reg add` registry writes
//! - `wineserver -k` to stop everything in the prefix

mod pure;

use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use crate::env::prefix_only;
use crate::error::{RuntimeError, RuntimeResult};
use crate::manager::RuntimeManager;
use crate::process::{Invocation, LaunchOptions};

pub use pure::{last_non_empty_line, parse_pid_field, parse_process_ids};

impl RuntimeManager {
    /// Ids of prefix processes whose `winedbg` line mentions `executable`
    ///
    /// Ids come back in listing order. Malformed lines are skipped.
    pub fn get_process_ids(&self, executable: &str) -> RuntimeResult<Vec<u32>> {
        let output = self
            .run_in_prefix(
                Invocation::args(["winedbg", "--command", "info proc"]),
                LaunchOptions::default().capture_output(),
            )?
            .wait_with_output()?;

        Ok(parse_process_ids(&output.stdout, executable))
    }

    /// First id from [`RuntimeManager::get_process_ids`], if any
    pub fn get_process_id(&self, executable: &str) -> RuntimeResult<Option<u32>> {
        Ok(self.get_process_ids(executable)?.first().copied())
    }

    /// Translate a host path to the path the runtime sees (e.g. `Z:\home\...`)
    pub fn unix_to_wine_path(&self, unix_path: &Path) -> RuntimeResult<String> {
        let output = self
            .run_in_prefix(
                Invocation::Args(vec![
                    "winepath".to_string(),
                    "--windows".to_string(),
                    unix_path.to_string_lossy().into_owned(),
                ]),
                LaunchOptions::default().capture_output(),
            )?
            .wait_with_output()?;

        last_non_empty_line(&output.stdout).ok_or_else(|| RuntimeError::Parse {
            tool: "winepath",
            detail: format!("no output for {}", unix_path.display()),
        })
    }

    /// `reg add <key> /v <value> /d <data> /f`, blocking until it exits
    ///
    /// A non-zero exit is logged, not returned.
    pub fn add_registry_key(&self, key: &str, value: &str, data: &str) -> RuntimeResult<()> {
        let status = self.reg_add(key, value, data)?;
        if !status.success() {
            tracing::warn!(key, value, "reg add exited with {status}");
        }
        Ok(())
    }

    /// Same as [`RuntimeManager::add_registry_key`] but hands back the exit status
    pub(crate) fn reg_add(&self, key: &str, value: &str, data: &str) -> RuntimeResult<ExitStatus> {
        let output = self
            .run_in_prefix(
                Invocation::args(["reg", "add", key, "/v", value, "/d", data, "/f"]),
                LaunchOptions::default().capture_output(),
            )?
            .wait_with_output()?;
        Ok(output.status)
    }

    /// Tell wineserver to terminate every process in the prefix
    ///
    /// Only `WINEPREFIX` is added to the environment. Does not wait.
    pub fn kill(&self) -> RuntimeResult<()> {
        let wineserver = self.settings.wineserver_binary();
        if !wineserver.is_file() {
            return Err(RuntimeError::BinaryMissing(wineserver));
        }

        tracing::info!(prefix = %self.settings.prefix_dir.display(), "killing prefix processes");

        let mut child = Command::new(&wineserver)
            .arg("-k")
            .envs(prefix_only(&self.settings))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| RuntimeError::Spawn {
                program: wineserver.clone(),
                source,
            })?;

        // Reap in the background so the helper does not linger as a zombie
        std::thread::spawn(move || {
            let _ = child.wait();
        });
        Ok(())
    }
}
