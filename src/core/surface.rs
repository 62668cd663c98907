use crate::core::error::ConfigError;
use glam::Vec2;
use std::fmt;

/// Drawable area in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// 8-bit RGB color as used by the palette and the follower.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or the short `#rgb` form (the leading `#` is optional).
    pub fn from_hex(s: &str) -> Result<Self, ConfigError> {
        let err = || ConfigError::InvalidColor(s.to_string());
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return Err(err());
        }
        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| err());
        match hex.len() {
            6 => Ok(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                // #abc == #aabbcc
                let r = channel(&hex[0..1])?;
                let g = channel(&hex[1..2])?;
                let b = channel(&hex[2..3])?;
                Ok(Self::new(r * 17, g * 17, b * 17))
            }
            _ => Err(err()),
        }
    }

    /// Parse a comma separated list of hex colors.
    pub fn parse_list(s: &str) -> Result<Vec<Self>, ConfigError> {
        s.split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(Self::from_hex)
            .collect()
    }

    /// CSS color string (`#rrggbb`).
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Immediate-mode 2D drawing target consumed by the backdrop each frame.
///
/// The web build implements this over `CanvasRenderingContext2d`; tests use a
/// recording implementation.
pub trait DrawSurface {
    /// The viewport changed size; called before the next paint.
    fn resize(&mut self, _width: f32, _height: f32) {}
    /// Erase everything in `[0, width] x [0, height]`.
    fn clear(&mut self, width: f32, height: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, color: Rgb, alpha: f32);
}
