//! Back-end file downloads saved to disk.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::error;

use crate::api::transport::HttpTransport;
use crate::error::{AhauxError, Result};

/// Outcome of a completed download, handed to the completion callback.
#[derive(Clone, Debug, Serialize)]
pub struct DownloadEvent {
    pub status: u16,
    pub content_type: Option<String>,
    pub bytes_written: u64,
    /// Final location of the saved file.
    pub path: PathBuf,
}

/// POST `args` to `url`, save the binary reply under `fname` in `dir`, and
/// invoke `completion` with the download outcome.
///
/// The body is staged through a named temporary file in the target
/// directory and atomically renamed into place; the temporary never
/// outlives the call. On failure the callback is not invoked and a single
/// diagnostic is logged.
pub(crate) async fn download_file<T, F>(
    transport: &T,
    dir: &Path,
    url: &str,
    args: &Value,
    fname: &str,
    completion: F,
) where
    T: HttpTransport,
    F: FnOnce(DownloadEvent),
{
    let reply = match transport.post_json(url, args).await {
        Ok(reply) => reply,
        Err(err) => {
            error!(url, error = %err, "download failed, completion not invoked");
            return;
        }
    };

    match save_blob(dir, fname, &reply.body) {
        Ok(path) => completion(DownloadEvent {
            status: reply.status,
            content_type: reply.content_type,
            bytes_written: reply.body.len() as u64,
            path,
        }),
        Err(err) => {
            error!(url, fname, error = %err, "saving download failed, completion not invoked");
        }
    }
}

/// Write `bytes` to `dir/fname` via a temporary file in the same directory.
fn save_blob(dir: &Path, fname: &str, bytes: &[u8]) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let target = dir.join(fname);

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(bytes)?;
    staged.persist(&target).map_err(|e| AhauxError::Save {
        path: target.clone(),
        source: e.error,
    })?;
    Ok(target)
}

#[cfg(test)]
#[path = "download_tests.rs"]
mod tests;
