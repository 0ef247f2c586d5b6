//! HTTP transport abstraction and the reqwest-backed implementation.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::error::{AhauxError, Result};

/// Field name the backend expects file uploads under.
pub(crate) const MULTIPART_FIELD: &str = "file";

const OCTET_STREAM: &str = "application/octet-stream";

/// A file to upload.
#[derive(Clone, Debug)]
pub struct FileUpload {
    pub name: String,
    pub bytes: Vec<u8>,
    /// MIME type of the upload; octet-stream when unset.
    pub mime: Option<String>,
}

/// Request arguments for [`crate::AhauxUtils::hit_endpoint`]: either a
/// JSON-serializable value or a single file.
#[derive(Clone, Debug)]
pub enum Payload {
    Json(Value),
    File(FileUpload),
}

impl Payload {
    /// JSON payload from any serializable value.
    pub fn json<T: Serialize>(value: &T) -> Result<Self> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }

    /// File payload carrying `bytes` under `name`.
    pub fn file(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::File(FileUpload {
            name: name.into(),
            bytes,
            mime: None,
        })
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

/// A completed HTTP exchange.
#[derive(Clone, Debug)]
pub struct Reply {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl Reply {
    /// Parse the body as JSON.
    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// Asynchronous POST capability the facade is constructed over.
///
/// Implementations issue single-shot requests: no retries, no timeout. An
/// unresponsive endpoint leaves the returned future pending.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Version string of the transport implementation, checked against
    /// [`crate::MIN_TRANSPORT_VERSION`] at construction of the facade.
    fn version(&self) -> &str;

    /// POST `body` as `application/json`.
    async fn post_json(&self, url: &str, body: &Value) -> Result<Reply>;

    /// POST `file` as a multipart form with a single `file` field.
    async fn post_file(&self, url: &str, file: &FileUpload) -> Result<Reply>;
}

/// Production transport over a shared [`reqwest::Client`].
#[derive(Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    async fn finish(url: &str, response: reqwest::Response) -> Result<Reply> {
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response
            .bytes()
            .await
            .map_err(|e| classify(url, &e))?
            .to_vec();
        Ok(Reply {
            status,
            content_type,
            body,
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    fn version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<Reply> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| classify(url, &e))?;
        Self::finish(url, response).await
    }

    async fn post_file(&self, url: &str, file: &FileUpload) -> Result<Reply> {
        let part = reqwest::multipart::Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(file.mime.as_deref().unwrap_or(OCTET_STREAM))
            .map_err(|e| classify(url, &e))?;
        let form = reqwest::multipart::Form::new().part(MULTIPART_FIELD, part);
        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| classify(url, &e))?;
        Self::finish(url, response).await
    }
}

fn classify(url: &str, err: &reqwest::Error) -> AhauxError {
    let detail = if err.is_timeout() {
        "request timed out".to_string()
    } else if err.is_connect() {
        "connection failed".to_string()
    } else {
        err.to_string()
    };
    AhauxError::Transport {
        url: url.to_string(),
        detail,
    }
}


#[cfg(test)]
#[path = "transport_tests.rs"]
mod tests;
