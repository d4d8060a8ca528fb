//! Meme Core - Canvas geometry for the meme generator
//!
//! This crate provides functionality for:
//! - Fitting a source image into a fixed-size surface (aspect ratio preserved)
//! - Positioning and styling the top/bottom captions
//! - Building ordered draw plans that a canvas backend replays
//!
//! # Example
//!
//! ```
//! use meme_core::{compute_placement, Size};
//!
//! let rect = compute_placement(Size::new(400.0, 300.0), Size::new(200.0, 100.0)).unwrap();
//! assert_eq!(rect.width, 400.0);
//! assert_eq!(rect.height, 200.0);
//! assert_eq!(rect.start_x, 0.0);
//! assert_eq!(rect.start_y, 50.0);
//! ```

mod caption;
mod compose;
mod fit;

pub use caption::{caption_anchors, CaptionAnchors, CaptionStyle, Color, Point, TextAlign};
pub use compose::{caption_frame, clear_frame, image_frame, DrawOp, Rect};
pub use fit::{
    compute_placement, compute_placement_with, FitPolicy, Orientation, PlacementRect, Size,
};

use thiserror::Error;

/// Errors that can occur during placement and layout
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MemeError {
    #[error("Invalid dimension: {name} = {value} (must be finite and positive)")]
    InvalidDimension { name: &'static str, value: f64 },

    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

/// Result type for layout operations
pub type Result<T> = std::result::Result<T, MemeError>;

/// Check that a dimension is finite and strictly positive
pub fn ensure_positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(MemeError::InvalidDimension { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive() {
        assert_eq!(ensure_positive("width", 1.5), Ok(1.5));
        assert!(ensure_positive("width", 0.0).is_err());
        assert!(ensure_positive("width", -3.0).is_err());
        assert!(ensure_positive("width", f64::NAN).is_err());
        assert!(ensure_positive("width", f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_message_names_dimension() {
        let err = ensure_positive("imageHeight", -1.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid dimension: imageHeight = -1 (must be finite and positive)"
        );
    }
}
