//! Caption styling and placement

use crate::fit::Size;
use crate::{ensure_positive, MemeError, Result};
use serde::{Deserialize, Serialize};

/// RGB color for caption fill/stroke and the letterbox background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create color from RGB values (0-255)
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black color
    pub fn black() -> Self {
        Self::from_rgb(0, 0, 0)
    }

    /// White color
    pub fn white() -> Self {
        Self::from_rgb(255, 255, 255)
    }

    /// Parse a CSS color: `#rgb`, `#rrggbb`, `black` or `white`
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        match value.to_ascii_lowercase().as_str() {
            "black" => return Ok(Self::black()),
            "white" => return Ok(Self::white()),
            _ => {}
        }

        let invalid = || MemeError::InvalidColor(value.to_string());
        let hex = value.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

        match hex.len() {
            3 => {
                // #abc is shorthand for #aabbcc
                let r = channel(&hex[0..1])?;
                let g = channel(&hex[1..2])?;
                let b = channel(&hex[2..3])?;
                Ok(Self::from_rgb(r * 17, g * 17, b * 17))
            }
            6 => Ok(Self::from_rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }

    /// CSS hex notation, e.g. `#ffffff`
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl TryFrom<String> for Color {
    type Error = MemeError;

    fn try_from(value: String) -> Result<Self> {
        Color::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_css()
    }
}

/// Horizontal text alignment relative to the anchor point
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl TextAlign {
    /// Value for `CanvasRenderingContext2D.textAlign`
    pub fn as_css(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// How captions are drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CaptionStyle {
    /// CSS font shorthand
    pub font: String,
    /// Outline color
    pub stroke_color: Color,
    /// Outline width in pixels
    pub line_width: f64,
    /// Glyph fill color
    pub fill_color: Color,
    /// Alignment around the anchor
    pub align: TextAlign,
    /// Distance of each caption baseline from its surface edge
    pub border_gap: f64,
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self {
            font: "30px Arial".to_string(),
            stroke_color: Color::black(),
            line_width: 8.0,
            fill_color: Color::white(),
            align: TextAlign::Center,
            border_gap: 50.0,
        }
    }
}

/// A point on the surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Baseline anchors of the two captions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptionAnchors {
    pub top: Point,
    pub bottom: Point,
}

/// Anchor points for the top and bottom captions
///
/// Both are horizontally centered; the top caption sits `border_gap` below
/// the top edge and the bottom caption `border_gap` above the bottom edge.
pub fn caption_anchors(surface: Size, border_gap: f64) -> Result<CaptionAnchors> {
    let width = ensure_positive("surfaceWidth", surface.width)?;
    let height = ensure_positive("surfaceHeight", surface.height)?;
    if !border_gap.is_finite() || border_gap < 0.0 {
        return Err(MemeError::InvalidDimension {
            name: "borderGap",
            value: border_gap,
        });
    }

    let x = width / 2.0;
    Ok(CaptionAnchors {
        top: Point { x, y: border_gap },
        bottom: Point {
            x,
            y: height - border_gap,
        },
    })
}
