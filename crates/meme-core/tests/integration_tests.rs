//! Integration tests for meme-core
//!
//! These exercise placement properties over a spread of surface and image
//! shapes, and the draw plans built on top of them.

use meme_core::{
    caption_frame, compute_placement, compute_placement_with, image_frame, CaptionStyle, DrawOp,
    FitPolicy, MemeError, Point, Size,
};
use pretty_assertions::assert_eq;

const TOLERANCE: f64 = 1e-9;

const SURFACES: [(f64, f64); 5] = [
    (400.0, 300.0),
    (300.0, 400.0),
    (300.0, 300.0),
    (640.0, 100.0),
    (1.0, 1.0),
];

const IMAGES: [(f64, f64); 8] = [
    (200.0, 100.0),
    (100.0, 200.0),
    (100.0, 100.0),
    (4000.0, 3000.0),
    (1.0, 7.0),
    (7.0, 1.0),
    (0.5, 0.25),
    (1920.0, 1080.0),
];

fn all_cases() -> impl Iterator<Item = (Size, Size)> {
    SURFACES.iter().flat_map(|&(sw, sh)| {
        IMAGES
            .iter()
            .map(move |&(iw, ih)| (Size::new(sw, sh), Size::new(iw, ih)))
    })
}

#[test]
fn test_spec_scenarios() {
    let cases = [
        ((400.0, 300.0), (200.0, 100.0), (400.0, 200.0, 0.0, 50.0)),
        ((400.0, 300.0), (100.0, 200.0), (150.0, 300.0, 125.0, 0.0)),
        ((400.0, 300.0), (100.0, 100.0), (400.0, 400.0, 0.0, -50.0)),
        ((300.0, 300.0), (400.0, 200.0), (300.0, 150.0, 0.0, 75.0)),
    ];

    for ((sw, sh), (iw, ih), expected) in cases {
        let rect = compute_placement(Size::new(sw, sh), Size::new(iw, ih)).unwrap();
        assert_eq!(
            (rect.width, rect.height, rect.start_x, rect.start_y),
            expected,
            "surface {}x{}, image {}x{}",
            sw,
            sh,
            iw,
            ih
        );
    }
}

#[test]
fn test_aspect_ratio_is_preserved() {
    for policy in [FitPolicy::AspectBranch, FitPolicy::Contain] {
        for (surface, image) in all_cases() {
            let rect = compute_placement_with(policy, surface, image).unwrap();
            let expected = image.aspect_ratio();
            let actual = rect.width / rect.height;
            assert!(
                (actual - expected).abs() <= TOLERANCE * expected.max(1.0),
                "{:?} {:?} {:?}: ratio {} != {}",
                policy,
                surface,
                image,
                actual,
                expected
            );
        }
    }
}

#[test]
fn test_one_axis_touches_the_edge() {
    for (surface, image) in all_cases() {
        let rect = compute_placement(surface, image).unwrap();
        assert!(rect.start_x == 0.0 || rect.start_y == 0.0);
        assert!(rect.width == surface.width || rect.height == surface.height);
    }
}

#[test]
fn test_contain_stays_inside_surface() {
    for (surface, image) in all_cases() {
        let rect = compute_placement_with(FitPolicy::Contain, surface, image).unwrap();
        assert!(rect.start_x >= 0.0, "{:?} {:?} {:?}", surface, image, rect);
        assert!(rect.start_y >= 0.0, "{:?} {:?} {:?}", surface, image, rect);
        assert!(rect.start_x + rect.width <= surface.width + TOLERANCE);
        assert!(rect.start_y + rect.height <= surface.height + TOLERANCE);
    }
}

#[test]
fn test_aspect_branch_stays_inside_when_shapes_agree() {
    // Portrait images on surfaces no wider than 1:1, landscape images on
    // surfaces no narrower than the image.
    for (surface, image) in all_cases() {
        let image_ratio = image.aspect_ratio();
        let surface_ratio = surface.aspect_ratio();
        let agrees = if image_ratio < 1.0 {
            surface_ratio >= image_ratio
        } else {
            surface_ratio <= image_ratio
        };
        if !agrees {
            continue;
        }

        let rect = compute_placement(surface, image).unwrap();
        assert!(rect.fits_within(surface), "{:?} {:?} {:?}", surface, image, rect);
    }
}

#[test]
fn test_placement_is_deterministic() {
    for (surface, image) in all_cases() {
        let first = compute_placement(surface, image).unwrap();
        let second = compute_placement(surface, image).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_invalid_dimension_names_the_input() {
    let surface = Size::new(400.0, 300.0);
    let cases = [
        (Size::new(-400.0, 300.0), Size::new(1.0, 1.0), "surfaceWidth"),
        (surface, Size::new(1.0, f64::NEG_INFINITY), "imageHeight"),
        (Size::new(400.0, f64::NAN), Size::new(1.0, 1.0), "surfaceHeight"),
    ];

    for (surface, image, expected) in cases {
        match compute_placement(surface, image) {
            Err(MemeError::InvalidDimension { name, .. }) => assert_eq!(name, expected),
            other => panic!("expected InvalidDimension, got {:?}", other),
        }
    }
}

#[test]
fn test_placement_serializes_with_js_field_names() {
    let rect = compute_placement(Size::new(400.0, 300.0), Size::new(100.0, 200.0)).unwrap();
    let json = serde_json::to_value(rect).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "width": 150.0,
            "height": 300.0,
            "startX": 125.0,
            "startY": 0.0
        })
    );
}

#[test]
fn test_caption_frame_draws_bottom_then_top() {
    let style = CaptionStyle::default();
    let ops = caption_frame(Size::new(400.0, 400.0), &style, "TOP", "BOTTOM").unwrap();

    let bottom = Point { x: 200.0, y: 350.0 };
    let top = Point { x: 200.0, y: 50.0 };
    assert_eq!(
        ops,
        vec![
            DrawOp::SetStyle(style.clone()),
            DrawOp::StrokeText {
                text: "BOTTOM".to_string(),
                at: bottom
            },
            DrawOp::FillText {
                text: "BOTTOM".to_string(),
                at: bottom
            },
            DrawOp::StrokeText {
                text: "TOP".to_string(),
                at: top
            },
            DrawOp::FillText {
                text: "TOP".to_string(),
                at: top
            },
        ]
    );
}

#[test]
fn test_image_frame_serializes_as_tagged_ops() {
    let ops = image_frame(
        Size::new(300.0, 300.0),
        Size::new(400.0, 200.0),
        FitPolicy::AspectBranch,
    )
    .unwrap();
    let json = serde_json::to_value(&ops).unwrap();

    assert_eq!(json[0]["op"], "clear");
    assert_eq!(json[1]["op"], "fillRect");
    assert_eq!(json[1]["color"], "#000000");
    assert_eq!(json[2]["op"], "drawImage");
    assert_eq!(json[2]["startY"], 75.0);
}
