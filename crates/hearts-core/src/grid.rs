//! Jittered grid of heart placements covering the viewport.
//!
//! Columns run from `-width/2` up to `width/2`, rows from `0` up to `height`,
//! each advancing by `60 + rand * 50`. Every visited cell produces one
//! [`Placement`]. Random draws happen in a fixed order so a seeded rng always
//! yields the same layout:
//! per cell `rx, ry, scale, spin.x, spin.y, spin.z`, then the row step;
//! the column step is drawn once the column's rows are exhausted.

use crate::config::Viewport;
use crate::constants::*;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::PI;

/// Initial transform and spin factors for one heart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Grid cell origin, before the shape offset is applied.
    pub cell: [f32; 2],
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
    pub spin: Vec3,
}

#[inline]
fn grid_step<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    GRID_STEP_MIN + rng.gen::<f32>() * GRID_STEP_JITTER
}

pub fn place_cell<R: Rng + ?Sized>(x: f32, y: f32, rng: &mut R) -> Placement {
    let rx = rng.gen::<f32>() * INITIAL_TILT_MAX;
    let ry = rng.gen::<f32>() * INITIAL_TILT_MAX;
    let scale = SCALE_MIN + rng.gen::<f32>() * SCALE_SPAN;
    let spin = Vec3::new(rng.gen(), rng.gen(), rng.gen());
    Placement {
        cell: [x, y],
        position: Vec3::new(x + SHAPE_OFFSET_X, y + SHAPE_OFFSET_Y, 0.0),
        rotation: Vec3::new(rx, ry, PI),
        scale,
        spin,
    }
}

/// Lay out hearts over `viewport` (CSS pixels).
pub fn layout<R: Rng + ?Sized>(viewport: &Viewport, rng: &mut R) -> Vec<Placement> {
    let half_w = viewport.width / 2.0;
    let mut placements = Vec::new();
    let mut x = -half_w;
    while x < half_w {
        let mut y = 0.0;
        while y < viewport.height {
            placements.push(place_cell(x, y, rng));
            y += grid_step(rng);
        }
        x += grid_step(rng);
    }
    log::debug!(
        "[grid] {}x{} -> {} cells",
        viewport.width,
        viewport.height,
        placements.len()
    );
    placements
}
