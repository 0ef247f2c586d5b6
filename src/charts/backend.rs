//! Drawing backend abstraction for the chart layer.
//!
//! Chart layout code talks to a [`ChartBackend`] in container-addressed
//! primitives, so the same layout runs against the raster backend or a
//! recording double in tests.

use crate::charts::color::Color;
use crate::error::Result;

/// Orientation for axis labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextOrientation {
    Horizontal,
    /// Rotated 90 degrees counter-clockwise, reading bottom to top.
    Vertical,
}

/// A rendering surface addressed by container handle.
pub trait ChartBackend {
    /// Version string of the backend implementation, checked against
    /// [`crate::MIN_BACKEND_VERSION`] at construction of the facade.
    fn version(&self) -> &str;

    /// Current width and height of a container.
    fn measure(&self, container: &str) -> Result<(u32, u32)>;

    /// Remove all existing content from a container.
    fn clear(&mut self, container: &str) -> Result<()>;

    /// Draw a one-pixel line segment.
    fn draw_line(&mut self, container: &str, from: (f32, f32), to: (f32, f32), color: Color)
        -> Result<()>;

    /// Draw a single polyline mark through `points` with the given stroke
    /// width. Fewer than two points draw nothing.
    fn draw_polyline(
        &mut self,
        container: &str,
        points: &[(f32, f32)],
        color: Color,
        width: u32,
    ) -> Result<()>;

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, container: &str, x: f32, y: f32, w: f32, h: f32, color: Color)
        -> Result<()>;

    /// Draw a text label anchored at its top-left corner.
    fn draw_text(
        &mut self,
        container: &str,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: Color,
        orientation: TextOrientation,
    ) -> Result<()>;

    /// Rendered width of `text` at `size`, used to center and right-align
    /// labels. The default is a rough monospace estimate.
    fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * 0.5
    }
}
