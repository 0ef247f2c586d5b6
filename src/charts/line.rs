//! Line chart layout.

use tracing::debug;

use crate::charts::axis;
use crate::charts::backend::ChartBackend;
use crate::charts::color::Color;
use crate::charts::scale::LinearScale;
use crate::error::Result;

/// Inset margin on every side of the plot area.
const MARGIN: f32 = 50.0;
/// Stroke width of the data polyline.
const STROKE_WIDTH: u32 = 3;

/// Clear `container` and draw an x/y line plot of `data` under the supplied
/// axis limits. The polyline is a single mark through all points in order.
pub(crate) fn render<B: ChartBackend>(
    backend: &mut B,
    container: &str,
    data: &[[f64; 2]],
    xlim: [f64; 2],
    ylim: [f64; 2],
    color: Color,
) -> Result<()> {
    backend.clear(container)?;
    let (w, h) = backend.measure(container)?;

    let inner_w = w as f32 - 2.0 * MARGIN;
    let inner_h = h as f32 - 2.0 * MARGIN;
    if inner_w <= 0.0 || inner_h <= 0.0 {
        debug!(container, w, h, "container too small for a line chart, skipping");
        return Ok(());
    }

    let scale_x = LinearScale::new(xlim, [0.0, inner_w as f64]);
    let scale_y = LinearScale::new(ylim, [inner_h as f64, 0.0]);

    axis::bottom_linear(backend, container, &scale_x, (MARGIN, MARGIN + inner_h))?;
    axis::left_linear(backend, container, &scale_y, (MARGIN, MARGIN))?;

    let points: Vec<(f32, f32)> = data
        .iter()
        .map(|p| {
            (
                MARGIN + scale_x.scale(p[0]) as f32,
                MARGIN + scale_y.scale(p[1]) as f32,
            )
        })
        .collect();
    backend.draw_polyline(container, &points, color, STROKE_WIDTH)
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
