//! Bar chart layout.

use tracing::debug;

use crate::charts::axis;
use crate::charts::backend::ChartBackend;
use crate::charts::color::Color;
use crate::charts::scale::{BandScale, LinearScale};
use crate::error::Result;

const MARGIN_TOP: f32 = 20.0;
const MARGIN_RIGHT: f32 = 20.0;
const MARGIN_BOTTOM: f32 = 70.0;
const MARGIN_LEFT: f32 = 40.0;
const BAND_PADDING: f64 = 0.05;

/// Clear `container` and draw a categorical bar chart. Each datum is a
/// `[category, value]` pair; the value axis runs from 0 to `ylim`.
pub(crate) fn render<B: ChartBackend>(
    backend: &mut B,
    container: &str,
    data: &[[f64; 2]],
    ylim: f64,
    color: Color,
) -> Result<()> {
    backend.clear(container)?;
    let (w, h) = backend.measure(container)?;

    let inner_w = w as f32 - MARGIN_LEFT - MARGIN_RIGHT;
    let inner_h = h as f32 - MARGIN_TOP - MARGIN_BOTTOM;
    if inner_w <= 0.0 || inner_h <= 0.0 {
        debug!(container, w, h, "container too small for a bar chart, skipping");
        return Ok(());
    }

    let band = BandScale::new(data.len(), [0.0, inner_w as f64], BAND_PADDING);
    let scale_y = LinearScale::new([0.0, ylim], [inner_h as f64, 0.0]);

    let categories: Vec<f64> = data.iter().map(|d| d[0]).collect();
    axis::bottom_band(
        backend,
        container,
        &band,
        &categories,
        (MARGIN_LEFT, MARGIN_TOP + inner_h),
        inner_w,
    )?;
    axis::left_linear(backend, container, &scale_y, (MARGIN_LEFT, MARGIN_TOP))?;

    for (i, datum) in data.iter().enumerate() {
        let top = scale_y.scale(datum[1]) as f32;
        let height = inner_h - top;
        if height <= 0.0 {
            continue;
        }
        backend.fill_rect(
            container,
            MARGIN_LEFT + band.position(i) as f32,
            MARGIN_TOP + top,
            band.bandwidth() as f32,
            height,
            color,
        )?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "bar_tests.rs"]
mod tests;
