//! Color strings and the default series palette.

use crate::error::{AhauxError, Result};

/// Default series color when the caller passes none.
pub const DEFAULT_SERIES: Color = Color::rgb(70, 130, 180); // steelblue

/// Named colors accepted by [`Color::parse`].
const NAMED: [(&str, Color); 11] = [
    ("steelblue", DEFAULT_SERIES),
    ("black", Color::rgb(0, 0, 0)),
    ("white", Color::rgb(255, 255, 255)),
    ("red", Color::rgb(231, 76, 60)),
    ("green", Color::rgb(46, 204, 113)),
    ("blue", Color::rgb(52, 152, 219)),
    ("gray", Color::rgb(128, 128, 128)),
    ("grey", Color::rgb(128, 128, 128)),
    ("orange", Color::rgb(243, 156, 18)),
    ("purple", Color::rgb(155, 89, 182)),
    ("teal", Color::rgb(26, 188, 156)),
];

/// An opaque RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a color string: `#rgb`, `#rrggbb`, or a named color.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex).ok_or_else(|| AhauxError::InvalidColor(s.to_string()));
        }
        let lower = s.to_ascii_lowercase();
        NAMED
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, c)| *c)
            .ok_or_else(|| AhauxError::InvalidColor(s.to_string()))
    }

    /// Resolve an optional caller-supplied color, falling back to steelblue.
    pub fn resolve(requested: Option<&str>) -> Result<Self> {
        match requested {
            Some(s) => Self::parse(s),
            None => Ok(DEFAULT_SERIES),
        }
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        match hex.len() {
            3 => {
                let mut chans = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
                Some(Self::rgb(chans.next()??, chans.next()??, chans.next()??))
            }
            6 => {
                let chan = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
                Some(Self::rgb(chan(0)?, chan(2)?, chan(4)?))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
