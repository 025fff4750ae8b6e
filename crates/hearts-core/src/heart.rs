//! The heart outline and its conversion into a sampled polygon.
//!
//! The outline is a closed lyon [`Path`] made of six cubic Bézier segments.
//! Extrusion works on a flat polygon, so each curve is sampled at a fixed
//! number of parameter steps rather than adaptively flattened: every heart
//! gets the same vertex count regardless of scale.

use crate::constants::HEART_ORIGIN;
use glam::Vec2;
use lyon::geom::{CubicBezierSegment, QuadraticBezierSegment};
use lyon::math::{point, Point};
use lyon::path::{Path, PathEvent};

/// Immutable heart-shaped 2D outline.
#[derive(Clone, Debug)]
pub struct HeartPath {
    path: Path,
}

impl Default for HeartPath {
    fn default() -> Self {
        Self::new(HEART_ORIGIN[0], HEART_ORIGIN[1])
    }
}

impl HeartPath {
    /// Build the outline with its control points relative to `(x, y)`.
    pub fn new(x: f32, y: f32) -> Self {
        let mut b = Path::builder();
        b.begin(point(x + 25.0, y + 25.0));
        b.cubic_bezier_to(
            point(x + 25.0, y + 25.0),
            point(x + 20.0, y),
            point(x, y),
        );
        b.cubic_bezier_to(
            point(x - 30.0, y),
            point(x - 30.0, y + 35.0),
            point(x - 30.0, y + 35.0),
        );
        b.cubic_bezier_to(
            point(x - 30.0, y + 55.0),
            point(x - 10.0, y + 77.0),
            point(x + 25.0, y + 95.0),
        );
        b.cubic_bezier_to(
            point(x + 60.0, y + 77.0),
            point(x + 80.0, y + 55.0),
            point(x + 80.0, y + 35.0),
        );
        b.cubic_bezier_to(
            point(x + 80.0, y + 35.0),
            point(x + 80.0, y),
            point(x + 50.0, y),
        );
        b.cubic_bezier_to(
            point(x + 35.0, y),
            point(x + 25.0, y + 25.0),
            point(x + 25.0, y + 25.0),
        );
        b.close();
        Self { path: b.build() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of curve segments in the outline (lines and Béziers).
    pub fn segment_count(&self) -> usize {
        self.path
            .iter()
            .filter(|ev| {
                matches!(
                    ev,
                    PathEvent::Line { .. } | PathEvent::Quadratic { .. } | PathEvent::Cubic { .. }
                )
            })
            .count()
    }

    /// Sample the outline into a polygon with `divisions` steps per curve.
    ///
    /// Consecutive duplicates are dropped, and so is a final point equal to
    /// the first one: the polygon is implicitly closed.
    pub fn contour(&self, divisions: u32) -> Vec<Vec2> {
        let divisions = divisions.max(1);
        let mut points: Vec<Vec2> = Vec::new();
        let mut push = |p: Point| {
            let v = Vec2::new(p.x, p.y);
            if points.last() != Some(&v) {
                points.push(v);
            }
        };
        for event in self.path.iter() {
            match event {
                PathEvent::Begin { at } => push(at),
                PathEvent::Line { to, .. } => push(to),
                PathEvent::Quadratic { from, ctrl, to } => {
                    let seg = QuadraticBezierSegment { from, ctrl, to };
                    for i in 1..=divisions {
                        push(seg.sample(i as f32 / divisions as f32));
                    }
                }
                PathEvent::Cubic {
                    from,
                    ctrl1,
                    ctrl2,
                    to,
                } => {
                    let seg = CubicBezierSegment {
                        from,
                        ctrl1,
                        ctrl2,
                        to,
                    };
                    for i in 1..=divisions {
                        push(seg.sample(i as f32 / divisions as f32));
                    }
                }
                PathEvent::End { .. } => {}
            }
        }
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        points
    }
}

/// Shoelace signed area; negative for clockwise polygons (y up).
pub fn signed_area(points: &[Vec2]) -> f32 {
    let n = points.len();
    let mut twice = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        twice += a.x * b.y - b.x * a.y;
    }
    twice * 0.5
}

#[inline]
pub fn is_clockwise(points: &[Vec2]) -> bool {
    signed_area(points) < 0.0
}
