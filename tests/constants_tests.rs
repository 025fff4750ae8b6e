// Host-side tests for constants and their relationships.
// The web crate is wasm-only, so its constants module is included directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

use hearts_core::constants::*;
use web_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_clip_planes_are_ordered() {
    assert!(CAMERA_NEAR > 0.0);
    assert!(CAMERA_FAR > CAMERA_NEAR);
    assert!(CAMERA_FOV_DEGREES > 0.0 && CAMERA_FOV_DEGREES < 180.0);
    // the whole grid sits at z = 0, which must be inside the frustum
    assert!(CAMERA_POSITION.z > CAMERA_NEAR && CAMERA_POSITION.z < CAMERA_FAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn grid_ranges_are_positive() {
    assert!(GRID_STEP_MIN > 0.0);
    assert!(GRID_STEP_JITTER >= 0.0);
    assert!(SCALE_MIN > 0.0);
    assert!((SCALE_MIN + SCALE_SPAN - 0.4).abs() < 1e-6);
    assert!(INITIAL_TILT_MAX > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn bevel_is_sampled() {
    assert!(BEVEL_SEGMENTS > 0);
    assert!(CURVE_SEGMENTS > 0);
    assert!(EXTRUDE_STEPS > 0);
    assert!(BEVEL_THICKNESS > 0.0 && BEVEL_SIZE > 0.0);
}

#[test]
fn colors_fit_in_24_bits() {
    for hex in [BACKGROUND_HEX, HEART_HEX, HEART_SPECULAR_HEX, LIGHT_HEX] {
        assert_eq!(hex & !0xff_ffff, 0, "{:#x}", hex);
    }
}

#[test]
fn dom_ids_are_distinct() {
    assert_ne!(CONTAINER_ID, CANVAS_ID);
    assert!(!SEED_QUERY_PARAM.is_empty());
}

#[test]
fn srgb_conversion_hits_endpoints() {
    use hearts_core::color::{srgb_hex_to_linear, srgb_to_linear};
    assert_eq!(srgb_to_linear(0.0), 0.0);
    assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
    let heart = srgb_hex_to_linear(HEART_HEX);
    assert!((heart.x - 1.0).abs() < 1e-6);
    assert!(heart.y == 0.0);
    assert!(heart.z > 0.0 && heart.z < 0.02);
}
