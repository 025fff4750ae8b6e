//! Extrusion of a closed 2D contour into a bevelled solid.
//!
//! The solid is a stack of rings: bevel rings that grow outward from the
//! bottom cap, the straight body, and mirrored bevel rings shrinking back
//! toward the top cap. Side walls join consecutive rings; both caps are
//! filled with lyon's tessellator. Output is a flat-shaded triangle list.

use crate::constants::*;
use crate::error::SceneError;
use crate::heart::{is_clockwise, HeartPath};
use glam::{Vec2, Vec3};
use lyon::math::point;
use lyon::path::Path;
use lyon::tessellation::{BuffersBuilder, FillOptions, FillTessellator, FillVertex, VertexBuffers};
use std::f32::consts::FRAC_PI_2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExtrudeSettings {
    pub depth: f32,
    pub steps: u32,
    pub bevel_enabled: bool,
    pub bevel_thickness: f32,
    pub bevel_size: f32,
    pub bevel_offset: f32,
    pub bevel_segments: u32,
    pub curve_segments: u32,
}

impl Default for ExtrudeSettings {
    fn default() -> Self {
        Self {
            depth: EXTRUDE_DEPTH,
            steps: EXTRUDE_STEPS,
            bevel_enabled: true,
            bevel_thickness: BEVEL_THICKNESS,
            bevel_size: BEVEL_SIZE,
            bevel_offset: 0.0,
            bevel_segments: BEVEL_SEGMENTS,
            curve_segments: CURVE_SEGMENTS,
        }
    }
}

impl ExtrudeSettings {
    /// Settings with the bevel parameters zeroed when the bevel is off.
    fn effective(&self) -> Self {
        let mut s = *self;
        s.steps = s.steps.max(1);
        if !s.bevel_enabled {
            s.bevel_thickness = 0.0;
            s.bevel_size = 0.0;
            s.bevel_offset = 0.0;
            s.bevel_segments = 0;
        }
        s
    }

    /// Number of contour rings stacked along the depth axis.
    pub fn ring_count(&self) -> usize {
        let s = self.effective();
        2 * s.bevel_segments as usize + 1 + s.steps as usize
    }

    /// Lowest and highest z reached by the solid.
    pub fn z_range(&self) -> (f32, f32) {
        let s = self.effective();
        (-s.bevel_thickness, s.depth + s.bevel_thickness)
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Non-indexed triangle list shared by every heart instance.
#[derive(Clone, Debug, Default)]
pub struct HeartGeometry {
    pub vertices: Vec<Vertex>,
}

impl HeartGeometry {
    pub fn from_path(path: &HeartPath, settings: &ExtrudeSettings) -> Result<Self, SceneError> {
        let contour = path.contour(settings.curve_segments);
        extrude(&contour, settings)
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Signed volume; positive when every face winds outward.
    pub fn signed_volume(&self) -> f32 {
        self.vertices
            .chunks_exact(3)
            .map(|t| {
                let a = Vec3::from(t[0].position);
                let b = Vec3::from(t[1].position);
                let c = Vec3::from(t[2].position);
                a.dot(b.cross(c)) / 6.0
            })
            .sum()
    }
}

/// Extrude `contour` (any winding) into a closed solid.
pub fn extrude(contour: &[Vec2], settings: &ExtrudeSettings) -> Result<HeartGeometry, SceneError> {
    if contour.len() < 3 {
        return Err(SceneError::DegenerateOutline(contour.len()));
    }
    let s = settings.effective();
    let mut contour = contour.to_vec();
    if !is_clockwise(&contour) {
        contour.reverse();
    }
    let n = contour.len();
    let moves: Vec<Vec2> = (0..n)
        .map(|i| bevel_vector(contour[(i + n - 1) % n], contour[i], contour[(i + 1) % n]))
        .collect();
    let ring = |inset: f32, z: f32| -> Vec<Vec3> {
        contour
            .iter()
            .zip(&moves)
            .map(|(p, m)| (*p + *m * inset).extend(z))
            .collect()
    };

    let mut rings: Vec<Vec<Vec3>> = Vec::with_capacity(s.ring_count());
    let bevel_ring = |b: u32| {
        let t = b as f32 / s.bevel_segments as f32;
        let z = s.bevel_thickness * (t * FRAC_PI_2).cos();
        let inset = s.bevel_size * (t * FRAC_PI_2).sin() + s.bevel_offset;
        (inset, z)
    };
    for b in 0..s.bevel_segments {
        let (inset, z) = bevel_ring(b);
        rings.push(ring(inset, -z));
    }
    let body_inset = s.bevel_size + s.bevel_offset;
    rings.push(ring(body_inset, 0.0));
    for step in 1..=s.steps {
        rings.push(ring(body_inset, s.depth / s.steps as f32 * step as f32));
    }
    for b in (0..s.bevel_segments).rev() {
        let (inset, z) = bevel_ring(b);
        rings.push(ring(inset, s.depth + z));
    }

    let mut out = Vec::with_capacity((rings.len() - 1) * n * 6 + 6 * n);

    // contour is clockwise, so outward is to the left of each edge
    for pair in rings.windows(2) {
        let (lo, hi) = (&pair[0], &pair[1]);
        for i in 0..n {
            let j = (i + 1) % n;
            push_triangle(&mut out, lo[i], hi[i], lo[j]);
            push_triangle(&mut out, lo[j], hi[i], hi[j]);
        }
    }

    let bottom = &rings[0];
    let top = &rings[rings.len() - 1];
    for (ring, facing_up) in [(bottom, false), (top, true)] {
        let z = ring[0].z;
        for [a, b, c] in fill_polygon(ring)? {
            let (a, b, c) = wound(a, b, c, facing_up);
            push_triangle(&mut out, a.extend(z), b.extend(z), c.extend(z));
        }
    }

    log::debug!(
        "[extrude] contour={} rings={} triangles={}",
        n,
        rings.len(),
        out.len() / 3
    );
    Ok(HeartGeometry { vertices: out })
}

/// Offset that moves both edges meeting at `pt` outward by one unit.
///
/// Sharp corners would produce long spikes, so results are capped at a
/// length of √2.
fn bevel_vector(prev: Vec2, pt: Vec2, next: Vec2) -> Vec2 {
    let incoming = pt - prev;
    let outgoing = next - pt;
    let cross = incoming.perp_dot(outgoing);

    if cross.abs() > f32::EPSILON {
        let prev_shift = prev + incoming.perp() / incoming.length();
        let next_shift = next + outgoing.perp() / outgoing.length();
        let sf = (next_shift - prev_shift).perp_dot(outgoing) / cross;
        let trans = prev_shift + incoming * sf - pt;
        let len_sq = trans.length_squared();
        if len_sq <= 2.0 {
            return trans;
        }
        return trans / (len_sq / 2.0).sqrt();
    }

    let same_direction = if incoming.x > f32::EPSILON {
        outgoing.x > f32::EPSILON
    } else if incoming.x < -f32::EPSILON {
        outgoing.x < -f32::EPSILON
    } else {
        incoming.y.signum() == outgoing.y.signum()
    };
    if same_direction {
        incoming.perp() / incoming.length()
    } else {
        incoming / (incoming.length_squared() / 2.0).sqrt()
    }
}

/// Triangulate the xy projection of a ring.
fn fill_polygon(ring: &[Vec3]) -> Result<Vec<[Vec2; 3]>, SceneError> {
    let mut b = Path::builder();
    b.begin(point(ring[0].x, ring[0].y));
    for p in &ring[1..] {
        b.line_to(point(p.x, p.y));
    }
    b.close();
    let path = b.build();

    let mut buffers: VertexBuffers<Vec2, u16> = VertexBuffers::new();
    FillTessellator::new()
        .tessellate_path(
            &path,
            &FillOptions::default(),
            &mut BuffersBuilder::new(&mut buffers, |v: FillVertex| {
                let p = v.position();
                Vec2::new(p.x, p.y)
            }),
        )
        .map_err(SceneError::Tessellation)?;

    Ok(buffers
        .indices
        .chunks_exact(3)
        .map(|t| {
            [
                buffers.vertices[t[0] as usize],
                buffers.vertices[t[1] as usize],
                buffers.vertices[t[2] as usize],
            ]
        })
        .collect())
}

/// Order a 2D triangle counter-clockwise (`ccw`) or clockwise.
#[inline]
fn wound(a: Vec2, b: Vec2, c: Vec2, ccw: bool) -> (Vec2, Vec2, Vec2) {
    let is_ccw = (b - a).perp_dot(c - a) > 0.0;
    if is_ccw == ccw {
        (a, b, c)
    } else {
        (a, c, b)
    }
}

#[inline]
fn push_triangle(out: &mut Vec<Vertex>, a: Vec3, b: Vec3, c: Vec3) {
    let normal = (b - a).cross(c - a).normalize_or_zero().to_array();
    for p in [a, b, c] {
        out.push(Vertex {
            position: p.to_array(),
            normal,
        });
    }
}
