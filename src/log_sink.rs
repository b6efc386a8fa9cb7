//! Shared append-only log for child process diagnostics
//!
//! Every launched process gets a drain thread copying its stderr here line by line.
//! Writes go through one mutex so lines from concurrent children never interleave
//! mid-line.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};

use crate::error::RuntimeResult;

#[derive(Clone)]
pub struct LogSink {
    path: PathBuf,
    writer: Arc<Mutex<BufWriter<File>>>,
}

impl LogSink {
    /// Open (or create) the log file in append mode
    pub fn open(path: &Path) -> RuntimeResult<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(LogSink {
            path: path.to_path_buf(),
            writer: Arc::new(Mutex::new(BufWriter::new(file))),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one line and flush it
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self.lock();
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()
    }

    pub fn flush(&self) -> io::Result<()> {
        self.lock().flush()
    }

    /// Copy `source` into the log line by line on a background thread
    ///
    /// The thread ends when `source` reaches EOF, which for a child's stderr is when
    /// the child (and anything that inherited the pipe) has exited.
    pub fn drain<R>(&self, source: R, label: String) -> JoinHandle<()>
    where
        R: Read + Send + 'static,
    {
        let sink = self.clone();
        thread::spawn(move || {
            let mut reader = BufReader::new(source);
            let mut buf = Vec::new();
            loop {
                buf.clear();
                match reader.read_until(b'\n', &mut buf) {
                    Ok(0) => break,
                    Ok(_) => {
                        let line = String::from_utf8_lossy(&buf);
                        let line = line.trim_end_matches(['\n', '\r']);
                        if let Err(e) = sink.write_line(line) {
                            tracing::warn!("{label}: log write failed: {e}");
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::debug!("{label}: stderr read ended: {e}");
                        break;
                    }
                }
            }
        })
    }

    fn lock(&self) -> MutexGuard<'_, BufWriter<File>> {
        // A panicking writer leaves the buffer usable; keep logging
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runtime.log");
        fs::write(&path, "earlier session\n").unwrap();

        let sink = LogSink::open(&path).unwrap();
        sink.write_line("fixme:ntdll:stub").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "earlier session\nfixme:ntdll:stub\n");
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs/deep/runtime.log");
        let sink = LogSink::open(&path).unwrap();
        assert_eq!(sink.path(), path);
        assert!(path.exists());
    }

    #[test]
    fn test_drain_copies_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runtime.log");
        let sink = LogSink::open(&path).unwrap();

        let source = io::Cursor::new(b"err:one\r\nerr:two\nno newline".to_vec());
        sink.drain(source, "test".to_string()).join().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "err:one\nerr:two\nno newline\n");
    }

    #[test]
    fn test_concurrent_drains_keep_lines_whole() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runtime.log");
        let sink = LogSink::open(&path).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|n| {
                let text: String = (0..200).map(|i| format!("child{n}-line{i}-xxxxxxxx\n")).collect();
                sink.drain(io::Cursor::new(text.into_bytes()), format!("child{n}"))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 800);
        assert!(
            lines
                .iter()
                .all(|l| l.starts_with("child") && l.ends_with("-xxxxxxxx"))
        );
    }
}
