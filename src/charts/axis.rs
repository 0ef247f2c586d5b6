//! Axis rendering shared by the chart kinds.

use crate::charts::backend::{ChartBackend, TextOrientation};
use crate::charts::color::Color;
use crate::charts::scale::{tick_label, BandScale, LinearScale};
use crate::error::Result;

pub(crate) const TICK_TARGET: usize = 10;

const AXIS_COLOR: Color = Color::BLACK;
const TICK_LEN: f32 = 6.0;
const LABEL_SIZE: f32 = 10.0;
const LABEL_GAP: f32 = 2.0;

/// Horizontal axis along the bottom edge of the plot area. `origin` is the
/// plot-area corner the axis starts from, in container coordinates.
pub(crate) fn bottom_linear<B: ChartBackend>(
    backend: &mut B,
    container: &str,
    scale: &LinearScale,
    origin: (f32, f32),
) -> Result<()> {
    let (ox, oy) = origin;
    let [r0, r1] = scale.range();
    backend.draw_line(
        container,
        (ox + r0 as f32, oy),
        (ox + r1 as f32, oy),
        AXIS_COLOR,
    )?;

    let step = scale.tick_step(TICK_TARGET);
    for t in scale.ticks(TICK_TARGET) {
        let x = ox + scale.scale(t) as f32;
        backend.draw_line(container, (x, oy), (x, oy + TICK_LEN), AXIS_COLOR)?;
        let label = tick_label(t, step);
        let half = backend.text_width(&label, LABEL_SIZE) / 2.0;
        backend.draw_text(
            container,
            &label,
            x - half,
            oy + TICK_LEN + LABEL_GAP,
            LABEL_SIZE,
            AXIS_COLOR,
            TextOrientation::Horizontal,
        )?;
    }
    Ok(())
}

/// Vertical axis along the left edge of the plot area, labels right-aligned
/// against the tick marks.
pub(crate) fn left_linear<B: ChartBackend>(
    backend: &mut B,
    container: &str,
    scale: &LinearScale,
    origin: (f32, f32),
) -> Result<()> {
    let (ox, oy) = origin;
    let [r0, r1] = scale.range();
    backend.draw_line(
        container,
        (ox, oy + r0.min(r1) as f32),
        (ox, oy + r0.max(r1) as f32),
        AXIS_COLOR,
    )?;

    let step = scale.tick_step(TICK_TARGET);
    for t in scale.ticks(TICK_TARGET) {
        let y = oy + scale.scale(t) as f32;
        backend.draw_line(container, (ox - TICK_LEN, y), (ox, y), AXIS_COLOR)?;
        let label = tick_label(t, step);
        let width = backend.text_width(&label, LABEL_SIZE);
        backend.draw_text(
            container,
            &label,
            ox - TICK_LEN - LABEL_GAP - width,
            y - LABEL_SIZE / 2.0,
            LABEL_SIZE,
            AXIS_COLOR,
            TextOrientation::Horizontal,
        )?;
    }
    Ok(())
}

/// Horizontal band axis: one tick per band, labels formatted to three
/// decimals and rotated to read bottom-to-top under their tick.
pub(crate) fn bottom_band<B: ChartBackend>(
    backend: &mut B,
    container: &str,
    band: &BandScale,
    categories: &[f64],
    origin: (f32, f32),
    span: f32,
) -> Result<()> {
    let (ox, oy) = origin;
    backend.draw_line(container, (ox, oy), (ox + span, oy), AXIS_COLOR)?;

    for (i, category) in categories.iter().enumerate().take(band.len()) {
        let x = ox + band.center(i) as f32;
        backend.draw_line(container, (x, oy), (x, oy + TICK_LEN), AXIS_COLOR)?;
        backend.draw_text(
            container,
            &format!("{category:.3}"),
            x - LABEL_SIZE / 2.0,
            oy + TICK_LEN + LABEL_GAP,
            LABEL_SIZE,
            AXIS_COLOR,
            TextOrientation::Vertical,
        )?;
    }
    Ok(())
}
