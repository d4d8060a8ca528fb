//! Draw plans
//!
//! Each user action that touches the canvas is turned into an ordered list of
//! [`DrawOp`]s. The browser layer replays them onto a 2D context; tests can
//! inspect them directly.

use crate::caption::{caption_anchors, CaptionStyle, Color, Point};
use crate::fit::{compute_placement_with, FitPolicy, PlacementRect, Size};
use crate::{ensure_positive, Result};
use serde::Serialize;

/// Axis-aligned rectangle on the surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Rectangle covering the whole surface
    pub fn covering(surface: Size) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: surface.width,
            height: surface.height,
        }
    }
}

/// A single canvas drawing operation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DrawOp {
    /// Erase to transparent
    Clear(Rect),
    /// Fill with a solid color
    FillRect { rect: Rect, color: Color },
    /// Draw the current source image scaled into the placement
    DrawImage(PlacementRect),
    /// Apply font, colors, line width and alignment for following text ops
    SetStyle(CaptionStyle),
    /// Outline text around an anchor
    StrokeText { text: String, at: Point },
    /// Fill text around an anchor
    FillText { text: String, at: Point },
}

/// Ops for a freshly loaded image
///
/// The surface is cleared and filled black so that the letterbox borders of
/// a non-matching aspect ratio show as black bars, then the image is drawn.
pub fn image_frame(surface: Size, image: Size, policy: FitPolicy) -> Result<Vec<DrawOp>> {
    let placement = compute_placement_with(policy, surface, image)?;
    let full = Rect::covering(surface);

    Ok(vec![
        DrawOp::Clear(full),
        DrawOp::FillRect {
            rect: full,
            color: Color::black(),
        },
        DrawOp::DrawImage(placement),
    ])
}

/// Ops that draw both captions over the current canvas
///
/// The bottom caption is drawn first. Each caption is stroked, then filled so
/// the outline sits behind the glyphs.
pub fn caption_frame(
    surface: Size,
    style: &CaptionStyle,
    top: &str,
    bottom: &str,
) -> Result<Vec<DrawOp>> {
    let anchors = caption_anchors(surface, style.border_gap)?;

    Ok(vec![
        DrawOp::SetStyle(style.clone()),
        DrawOp::StrokeText {
            text: bottom.to_string(),
            at: anchors.bottom,
        },
        DrawOp::FillText {
            text: bottom.to_string(),
            at: anchors.bottom,
        },
        DrawOp::StrokeText {
            text: top.to_string(),
            at: anchors.top,
        },
        DrawOp::FillText {
            text: top.to_string(),
            at: anchors.top,
        },
    ])
}

/// Ops that reset the canvas
pub fn clear_frame(surface: Size) -> Result<Vec<DrawOp>> {
    ensure_positive("surfaceWidth", surface.width)?;
    ensure_positive("surfaceHeight", surface.height)?;
    Ok(vec![DrawOp::Clear(Rect::covering(surface))])
}
