use std::io::Read;
use std::process::{Child, ChildStdout, ExitStatus};
use std::thread::JoinHandle;

use crate::error::RuntimeResult;
use crate::process::types::ProcessOutput;

/// A running child of the runtime binary
///
/// Owns both the child and the thread draining its stderr. Waiting joins the drain.
/// Dropping a handle whose child is still running kills and reaps it; use
/// [`PrefixProcess::detach`] to let a process outlive the handle.
pub struct PrefixProcess {
    child: Option<Child>,
    drain: Option<JoinHandle<()>>,
}

impl PrefixProcess {
    pub(crate) fn new(child: Child, drain: Option<JoinHandle<()>>) -> Self {
        PrefixProcess {
            child: Some(child),
            drain,
        }
    }

    /// OS process id
    pub fn id(&self) -> u32 {
        self.child.as_ref().map(Child::id).unwrap_or_default()
    }

    /// Take the stdout pipe; only present when launched with `capture_output`
    pub fn take_stdout(&mut self) -> Option<ChildStdout> {
        self.child.as_mut().and_then(|child| child.stdout.take())
    }

    pub fn try_wait(&mut self) -> RuntimeResult<Option<ExitStatus>> {
        match self.child.as_mut() {
            Some(child) => Ok(child.try_wait()?),
            None => Ok(None),
        }
    }

    /// Block until the process exits and its stderr is fully drained
    pub fn wait(mut self) -> RuntimeResult<ExitStatus> {
        let status = match self.child.take() {
            Some(mut child) => child.wait()?,
            None => unreachable!("child is only taken by consuming methods"),
        };
        self.join_drain();
        Ok(status)
    }

    /// Read all captured stdout, then wait
    ///
    /// Without `capture_output` the returned stdout is empty.
    pub fn wait_with_output(mut self) -> RuntimeResult<ProcessOutput> {
        let mut stdout = String::new();
        if let Some(mut pipe) = self.take_stdout() {
            let mut raw = Vec::new();
            pipe.read_to_end(&mut raw)?;
            stdout = String::from_utf8_lossy(&raw).into_owned();
        }
        let status = self.wait()?;
        Ok(ProcessOutput { status, stdout })
    }

    /// Forcefully stop the process and reap it
    pub fn kill(mut self) -> RuntimeResult<ExitStatus> {
        if let Some(child) = self.child.as_mut() {
            // Already exited is fine, wait() below returns its status
            let _ = child.kill();
        }
        self.wait()
    }

    /// Give up ownership; the stderr drain keeps running for the child's lifetime
    pub fn detach(mut self) -> Child {
        self.drain.take();
        match self.child.take() {
            Some(child) => child,
            None => unreachable!("child is only taken by consuming methods"),
        }
    }

    fn join_drain(&mut self) {
        if let Some(drain) = self.drain.take()
            && drain.join().is_err()
        {
            tracing::warn!("stderr drain thread panicked");
        }
    }
}

impl Drop for PrefixProcess {
    fn drop(&mut self) {
        if let Some(mut child) = self.child.take()
            && !matches!(child.try_wait(), Ok(Some(_)))
        {
            tracing::debug!(pid = child.id(), "killing un-waited prefix process");
            let _ = child.kill();
            let _ = child.wait();
        }
        self.join_drain();
    }
}
