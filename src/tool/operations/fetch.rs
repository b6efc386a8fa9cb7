//! Runtime archive download over HTTP

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use std::time::Duration;

use crate::error::{RuntimeError, RuntimeResult};
use crate::tool::types::{ArchiveFetcher, CancelToken};

const CHUNK_SIZE: usize = 64 * 1024;

/// Streams the response body to disk with a blocking reqwest client
pub struct HttpFetcher {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        HttpFetcher {
            // Whole-request budget; the archive is a few hundred MB
            timeout: Duration::from_secs(30 * 60),
            user_agent: concat!("winekeeper/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ArchiveFetcher for HttpFetcher {
    fn fetch(&self, url: &str, dest: &Path, cancel: &CancelToken) -> RuntimeResult<()> {
        cancel.check()?;

        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(Duration::from_secs(30))
            .build()?;

        let mut response = client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .send()?;

        if !response.status().is_success() {
            return Err(RuntimeError::Download(response.status().as_u16()));
        }

        let mut file = BufWriter::new(File::create(dest)?);
        let mut buf = vec![0u8; CHUNK_SIZE];
        let mut total: u64 = 0;
        loop {
            cancel.check()?;
            let n = response.read(&mut buf)?;
            if n == 0 {
                break;
            }
            file.write_all(&buf[..n])?;
            total += n as u64;
        }
        file.flush()?;

        tracing::debug!(bytes = total, "runtime archive downloaded");
        Ok(())
    }
}
