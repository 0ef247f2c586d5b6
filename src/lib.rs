//! ahaux-utils - chart rendering and backend API helpers
//!
//! A small client-side kit for analysis front ends: draw line and bar
//! charts into named containers, POST JSON or file payloads to a backend,
//! and save backend-generated files locally.
//!
//! The facade is built from two injected capabilities: a [`ChartBackend`]
//! that owns the drawing surfaces and an [`HttpTransport`] that issues the
//! network calls. [`RasterBackend`] and [`ReqwestTransport`] are the stock
//! implementations.

pub mod api;
pub mod charts;
pub mod error;
mod version;

use std::path::PathBuf;

use serde_json::Value;
use tracing::warn;

pub use api::{DownloadEvent, FileUpload, HttpTransport, Payload, Reply, ReqwestTransport};
pub use charts::{ChartBackend, Color, RasterBackend};
pub use error::{AhauxError, Result};

use version::version_below;

/// Oldest chart backend revision the chart layout code is known to work
/// against.
pub const MIN_BACKEND_VERSION: &str = "0.2.0";
/// Oldest transport revision the dispatch code is known to work against.
pub const MIN_TRANSPORT_VERSION: &str = "0.2.0";

/// Facade over the two injected capabilities.
///
/// Chart calls mutate the backend's containers and return `Result`; network
/// calls run a single asynchronous POST and report through a completion
/// callback invoked at most once, on success only.
pub struct AhauxUtils<B, T> {
    backend: B,
    transport: T,
    download_dir: PathBuf,
}

impl<B: ChartBackend, T: HttpTransport> AhauxUtils<B, T> {
    /// Build the facade. Capability versions below the supported minimums
    /// get a non-fatal warning.
    pub fn new(backend: B, transport: T) -> Self {
        if version_below(backend.version(), MIN_BACKEND_VERSION) {
            warn!(
                version = backend.version(),
                minimum = MIN_BACKEND_VERSION,
                "chart backend version is below the supported minimum, things might break"
            );
        }
        if version_below(transport.version(), MIN_TRANSPORT_VERSION) {
            warn!(
                version = transport.version(),
                minimum = MIN_TRANSPORT_VERSION,
                "transport version is below the supported minimum, things might break"
            );
        }
        Self {
            backend,
            transport,
            download_dir: PathBuf::from("."),
        }
    }

    /// Directory [`Self::download_file`] saves into. Defaults to the
    /// current directory.
    pub fn with_download_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.download_dir = dir.into();
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Draw an x/y line plot into `container`.
    ///
    /// `data` is an ordered sequence of `[x, y]` pairs; `xlim` and `ylim`
    /// are `[min, max]` axis limits. The container is cleared first, so
    /// re-rendering replaces the previous plot.
    pub fn plot_line(
        &mut self,
        container: &str,
        data: &[[f64; 2]],
        xlim: [f64; 2],
        ylim: [f64; 2],
        color: Option<&str>,
    ) -> Result<()> {
        let color = Color::resolve(color)?;
        charts::render_line(&mut self.backend, container, data, xlim, ylim, color)
    }

    /// Draw a bar chart into `container`.
    ///
    /// `data` is a sequence of `[category, value]` pairs; the value axis
    /// runs from 0 to `ylim`. Category labels are printed to three decimal
    /// places under the bars.
    pub fn barchart(
        &mut self,
        container: &str,
        data: &[[f64; 2]],
        ylim: f64,
        color: Option<&str>,
    ) -> Result<()> {
        let color = Color::resolve(color)?;
        charts::render_barchart(&mut self.backend, container, data, ylim, color)
    }

    /// POST `args` to `url` and hand the parsed JSON reply to `completion`.
    ///
    /// File payloads are sent as multipart forms, everything else as JSON.
    /// On failure `completion` is never invoked and a diagnostic is logged;
    /// callers needing failure detection must bring their own timeout.
    pub async fn hit_endpoint<F>(&self, url: &str, args: Payload, completion: F)
    where
        F: FnOnce(Value),
    {
        api::hit_endpoint(&self.transport, url, args, completion).await;
    }

    /// POST JSON `args` to `url`, save the binary reply under `fname` in
    /// the download directory, then hand the outcome to `completion`.
    pub async fn download_file<F>(&self, url: &str, args: &Value, fname: &str, completion: F)
    where
        F: FnOnce(DownloadEvent),
    {
        api::download_file(&self.transport, &self.download_dir, url, args, fname, completion)
            .await;
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
