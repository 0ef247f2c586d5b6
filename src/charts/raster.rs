//! Raster chart backend.
//!
//! Containers are named RGBA surfaces held in memory. Charts are drawn with
//! plain pixel primitives; a container can be exported as a PNG once drawn.

use std::collections::HashMap;
use std::path::Path;

use ab_glyph::{FontVec, PxScale};
use image::{imageops, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_line_segment_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use tracing::debug;

use crate::charts::backend::{ChartBackend, TextOrientation};
use crate::charts::color::Color;
use crate::error::{AhauxError, Result};

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

fn opaque(color: Color) -> Rgba<u8> {
    Rgba([color.r, color.g, color.b, 255])
}

/// In-memory raster surfaces addressed by container handle.
///
/// Text labels need a TTF font; a backend built without one draws every
/// other mark and skips labels with a debug diagnostic.
pub struct RasterBackend {
    containers: HashMap<String, RgbaImage>,
    font: Option<FontVec>,
}

impl Default for RasterBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RasterBackend {
    /// A backend without label support.
    pub fn new() -> Self {
        Self {
            containers: HashMap::new(),
            font: None,
        }
    }

    /// A backend rendering labels with the given TTF/OTF font data.
    pub fn with_font_bytes(bytes: Vec<u8>) -> Result<Self> {
        let font = FontVec::try_from_vec(bytes).map_err(|_| AhauxError::InvalidFont)?;
        Ok(Self {
            containers: HashMap::new(),
            font: Some(font),
        })
    }

    /// Register a container surface. An existing container under the same
    /// handle is replaced.
    pub fn add_container(&mut self, id: impl Into<String>, width: u32, height: u32) {
        self.containers
            .insert(id.into(), RgbaImage::from_pixel(width, height, BACKGROUND));
    }

    /// Read access to a container's pixels.
    pub fn container(&self, id: &str) -> Result<&RgbaImage> {
        self.containers
            .get(id)
            .ok_or_else(|| AhauxError::NoSuchContainer(id.to_string()))
    }

    /// Export a container as PNG.
    pub fn save_png(&self, id: &str, path: impl AsRef<Path>) -> Result<()> {
        self.container(id)?.save(path.as_ref())?;
        Ok(())
    }

    fn surface_mut(&mut self, id: &str) -> Result<&mut RgbaImage> {
        self.containers
            .get_mut(id)
            .ok_or_else(|| AhauxError::NoSuchContainer(id.to_string()))
    }

    /// Render `text` onto its own transparent scratch image, for rotation.
    fn rasterize_label(&self, text: &str, size: f32, color: Color) -> Option<RgbaImage> {
        let font = self.font.as_ref()?;
        let scale = PxScale::from(size);
        let (w, h) = text_size(scale, font, text);
        if w == 0 || h == 0 {
            return None;
        }
        let mut scratch = RgbaImage::from_pixel(w + 1, h + 1, Rgba([0, 0, 0, 0]));
        draw_text_mut(&mut scratch, opaque(color), 0, 0, scale, font, text);
        Some(scratch)
    }
}

impl ChartBackend for RasterBackend {
    fn version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }

    fn measure(&self, container: &str) -> Result<(u32, u32)> {
        let img = self.container(container)?;
        Ok(img.dimensions())
    }

    fn clear(&mut self, container: &str) -> Result<()> {
        let img = self.surface_mut(container)?;
        for pixel in img.pixels_mut() {
            *pixel = BACKGROUND;
        }
        Ok(())
    }

    fn draw_line(
        &mut self,
        container: &str,
        from: (f32, f32),
        to: (f32, f32),
        color: Color,
    ) -> Result<()> {
        let img = self.surface_mut(container)?;
        draw_line_segment_mut(img, from, to, opaque(color));
        Ok(())
    }

    fn draw_polyline(
        &mut self,
        container: &str,
        points: &[(f32, f32)],
        color: Color,
        width: u32,
    ) -> Result<()> {
        let img = self.surface_mut(container)?;
        let rgba = opaque(color);
        for pair in points.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let steep = (to.1 - from.1).abs() > (to.0 - from.0).abs();
            for i in 0..width.max(1) {
                // fan the stroke out around the ideal segment
                let offset = i as f32 - (width.max(1) - 1) as f32 / 2.0;
                let (dx, dy) = if steep { (offset, 0.0) } else { (0.0, offset) };
                draw_line_segment_mut(
                    img,
                    (from.0 + dx, from.1 + dy),
                    (to.0 + dx, to.1 + dy),
                    rgba,
                );
            }
        }
        Ok(())
    }

    fn fill_rect(
        &mut self,
        container: &str,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    ) -> Result<()> {
        if w < 0.5 || h < 0.5 {
            return Ok(());
        }
        let img = self.surface_mut(container)?;
        let rect = Rect::at(x.round() as i32, y.round() as i32)
            .of_size(w.round().max(1.0) as u32, h.round().max(1.0) as u32);
        draw_filled_rect_mut(img, rect, opaque(color));
        Ok(())
    }

    fn draw_text(
        &mut self,
        container: &str,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: Color,
        orientation: TextOrientation,
    ) -> Result<()> {
        // existence check first so a missing container errors even without a font
        self.container(container)?;
        let Some(label) = self.rasterize_label(text, size, color) else {
            if self.font.is_none() {
                debug!(container, text, "no font loaded, skipping label");
            }
            return Ok(());
        };
        let rendered = match orientation {
            TextOrientation::Horizontal => label,
            TextOrientation::Vertical => imageops::rotate270(&label),
        };
        let img = self.surface_mut(container)?;
        imageops::overlay(img, &rendered, x.round() as i64, y.round() as i64);
        Ok(())
    }

    fn text_width(&self, text: &str, size: f32) -> f32 {
        match &self.font {
            Some(font) => text_size(PxScale::from(size), font, text).0 as f32,
            None => text.chars().count() as f32 * size * 0.5,
        }
    }
}

#[cfg(test)]
#[path = "raster_tests.rs"]
mod tests;
