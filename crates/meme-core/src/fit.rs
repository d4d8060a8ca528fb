//! Fitting a source image into the drawing surface

use crate::{ensure_positive, Result};
use serde::{Deserialize, Serialize};

/// Tolerance used when checking placement bounds
const BOUNDS_EPSILON: f64 = 1e-9;

/// Width and height in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width divided by height
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

/// Image orientation, as decided by the fit branch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Taller than wide (aspect ratio below 1)
    Portrait,
    /// Wider than tall, or square
    Landscape,
}

impl Orientation {
    /// Classify an aspect ratio. A ratio of exactly 1 is landscape.
    pub fn of(aspect_ratio: f64) -> Self {
        if aspect_ratio < 1.0 {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }
}

/// How the fill axis is chosen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FitPolicy {
    /// Portrait images fill the surface height, everything else fills the
    /// width. The surface shape is not consulted, so the image may overflow
    /// the other axis and get clipped by the canvas.
    #[default]
    AspectBranch,
    /// Fill whichever axis keeps the whole image inside the surface
    Contain,
}

/// Where (and how large) to draw the image on the surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementRect {
    /// Drawn width
    pub width: f64,
    /// Drawn height
    pub height: f64,
    /// Left edge, from the surface's left edge
    pub start_x: f64,
    /// Top edge, from the surface's top edge
    pub start_y: f64,
}

impl PlacementRect {
    /// Whether the rectangle lies entirely inside `surface`
    pub fn fits_within(&self, surface: Size) -> bool {
        self.start_x >= -BOUNDS_EPSILON
            && self.start_y >= -BOUNDS_EPSILON
            && self.start_x + self.width <= surface.width + BOUNDS_EPSILON
            && self.start_y + self.height <= surface.height + BOUNDS_EPSILON
    }

    /// Size of the drawn image
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Compute the centered placement of `image` on `surface`
///
/// Uses [`FitPolicy::AspectBranch`]: an image with aspect ratio below 1
/// fills the surface height and is centered horizontally; any other image
/// (square included) fills the surface width and is centered vertically.
///
/// # Errors
/// Returns [`MemeError::InvalidDimension`](crate::MemeError::InvalidDimension)
/// when any dimension is zero, negative, NaN or infinite, or when the image
/// ratio is so extreme that the drawn width or height would round to zero.
pub fn compute_placement(surface: Size, image: Size) -> Result<PlacementRect> {
    compute_placement_with(FitPolicy::AspectBranch, surface, image)
}

/// Compute the centered placement of `image` on `surface` using `policy`
pub fn compute_placement_with(
    policy: FitPolicy,
    surface: Size,
    image: Size,
) -> Result<PlacementRect> {
    let surface_width = ensure_positive("surfaceWidth", surface.width)?;
    let surface_height = ensure_positive("surfaceHeight", surface.height)?;
    let image_width = ensure_positive("imageWidth", image.width)?;
    let image_height = ensure_positive("imageHeight", image.height)?;

    // Extreme ratios underflow to 0 or overflow to infinity.
    let aspect_ratio = ensure_positive("aspectRatio", image_width / image_height)?;
    let pivot = match policy {
        FitPolicy::AspectBranch => 1.0,
        FitPolicy::Contain => surface_width / surface_height,
    };

    // Strict comparison: a ratio equal to the pivot fills the width.
    let rect = if aspect_ratio < pivot {
        let width = ensure_positive("width", surface_height * aspect_ratio)?;
        PlacementRect {
            width,
            height: surface_height,
            start_x: (surface_width - width) / 2.0,
            start_y: 0.0,
        }
    } else {
        let height = ensure_positive("height", surface_width / aspect_ratio)?;
        PlacementRect {
            width: surface_width,
            height,
            start_x: 0.0,
            start_y: (surface_height - height) / 2.0,
        }
    };

    log::debug!(
        "placed {}x{} image ({:?}) on {}x{} surface: {:?}",
        image_width,
        image_height,
        Orientation::of(aspect_ratio),
        surface_width,
        surface_height,
        rect
    );
    if !rect.fits_within(surface) {
        log::debug!("placement overflows the surface and will be clipped");
    }

    Ok(rect)
}
