//! API module - payloads, transport, dispatch, and downloads

mod dispatch;
mod download;
mod transport;

pub use download::DownloadEvent;
pub use transport::{FileUpload, HttpTransport, Payload, Reply, ReqwestTransport};

pub(crate) use dispatch::hit_endpoint;
pub(crate) use download::download_file;

#[cfg(test)]
pub(crate) use transport::testing;
