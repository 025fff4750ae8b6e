//! Startup configuration for a hearts scene.
//!
//! Frontends fill in the viewport from their host (window size and pixel
//! ratio) and optionally a seed; everything else defaults to the values in
//! [`crate::constants`].

use crate::constants::*;
use crate::error::SceneError;
use crate::extrude::ExtrudeSettings;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Size of the drawing area in CSS pixels plus the device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, pixel_ratio: f32) -> Self {
        Self {
            width,
            height,
            pixel_ratio,
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Backing-store size in physical pixels.
    pub fn physical_size(&self) -> (u32, u32) {
        let ratio = self.pixel_ratio.max(1e-3);
        (
            ((self.width * ratio) as u32).max(1),
            ((self.height * ratio) as u32).max(1),
        )
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        let ok = |v: f32| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(SceneError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub viewport: Viewport,
    /// Fixed seed for the grid and spin factors; entropy when `None`.
    pub seed: Option<u64>,
    pub extrude: ExtrudeSettings,
    pub rotation_speed: f32,
    pub antialias: bool,
}

impl SceneConfig {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            seed: None,
            extrude: ExtrudeSettings::default(),
            rotation_speed: ROTATION_SPEED,
            antialias: true,
        }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn sample_count(&self) -> u32 {
        if self.antialias {
            MSAA_SAMPLES
        } else {
            1
        }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
