//! Scene session: everything the animator mutates and the renderer reads.
//!
//! A [`Scene`] owns its camera, lights, material, the shared heart geometry
//! and the list of shape instances. Nothing here touches a platform API, so
//! the whole scene can be built and animated in host-side tests.

use crate::color::srgb_hex_to_linear;
use crate::config::{SceneConfig, Viewport};
use crate::constants::*;
use crate::error::SceneError;
use crate::extrude::HeartGeometry;
use crate::grid::{self, Placement};
use crate::heart::HeartPath;
use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::Rng;
use std::sync::Arc;

/// Right-handed perspective camera looking down its local -Z axis.
///
/// The camera is never rotated, so the view matrix is a plain translation.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn for_viewport(viewport: &Viewport) -> Self {
        Self {
            position: CAMERA_POSITION,
            aspect: viewport.aspect(),
            fovy_radians: CAMERA_FOV_DEGREES.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(-self.position)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Map a point in camera space to world space.
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        self.position + local
    }
}

/// Directional light mounted on the camera, aimed at the world origin.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectionalLight {
    /// Linear RGB.
    pub color: Vec3,
    pub intensity: f32,
    /// Position relative to the camera.
    pub offset: Vec3,
}

impl DirectionalLight {
    pub fn new(hex: u32, intensity: f32, offset: Vec3) -> Self {
        Self {
            color: srgb_hex_to_linear(hex),
            intensity,
            offset,
        }
    }

    /// Unit vector from the lit surface toward the light.
    pub fn direction(&self, camera: &Camera) -> Vec3 {
        (camera.to_world(self.offset) - Vec3::ZERO).normalize_or_zero()
    }

    pub fn radiance(&self) -> Vec3 {
        self.color * self.intensity
    }
}

/// Blinn-Phong surface shared by every heart.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub color: Vec3,
    pub specular: Vec3,
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: srgb_hex_to_linear(HEART_HEX),
            specular: srgb_hex_to_linear(HEART_SPECULAR_HEX),
            shininess: HEART_SHININESS,
        }
    }
}

/// Placement of one copy of the heart geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mesh {
    pub position: Vec3,
    /// Euler angles in radians, applied X then Y then Z.
    pub rotation: Vec3,
    pub scale: f32,
}

impl Mesh {
    pub fn model_matrix(&self) -> Mat4 {
        let rot = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), rot, self.position)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeInstance {
    pub mesh: Mesh,
    /// Per-axis rotation speed factors in [0, 1).
    pub spin: Vec3,
}

impl From<Placement> for ShapeInstance {
    fn from(p: Placement) -> Self {
        Self {
            mesh: Mesh {
                position: p.position,
                rotation: p.rotation,
                scale: p.scale,
            },
            spin: p.spin,
        }
    }
}

pub struct Scene {
    pub viewport: Viewport,
    /// Linear RGB clear color.
    pub background: Vec3,
    pub camera: Camera,
    pub lights: [DirectionalLight; 2],
    pub material: Material,
    pub heart: HeartPath,
    pub geometry: Arc<HeartGeometry>,
    shapes: Vec<ShapeInstance>,
}

impl Scene {
    /// Camera, lights, background and heart geometry; no shapes yet.
    pub fn new(config: &SceneConfig) -> Result<Self, SceneError> {
        config.viewport.validate()?;
        let heart = HeartPath::default();
        let geometry = Arc::new(HeartGeometry::from_path(&heart, &config.extrude)?);
        Ok(Self {
            viewport: config.viewport,
            background: srgb_hex_to_linear(BACKGROUND_HEX),
            camera: Camera::for_viewport(&config.viewport),
            lights: [
                DirectionalLight::new(LIGHT_HEX, KEY_LIGHT_INTENSITY, KEY_LIGHT_OFFSET),
                DirectionalLight::new(LIGHT_HEX, FILL_LIGHT_INTENSITY, FILL_LIGHT_OFFSET),
            ],
            material: Material::default(),
            heart,
            geometry,
            shapes: Vec::new(),
        })
    }

    /// Build the scene and populate it with one grid of hearts.
    pub fn init<R: Rng + ?Sized>(config: &SceneConfig, rng: &mut R) -> Result<Self, SceneError> {
        let mut scene = Self::new(config)?;
        let added = scene.add_heart_grid(rng);
        log::info!(
            "[scene] viewport={}x{}@{} hearts={} triangles/heart={}",
            config.viewport.width,
            config.viewport.height,
            config.viewport.pixel_ratio,
            added,
            scene.geometry.triangle_count()
        );
        Ok(scene)
    }

    /// Append a fresh grid of hearts; existing shapes are kept.
    pub fn add_heart_grid<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let placements = grid::layout(&self.viewport, rng);
        let added = placements.len();
        self.shapes
            .extend(placements.into_iter().map(ShapeInstance::from));
        added
    }

    pub fn shapes(&self) -> &[ShapeInstance] {
        &self.shapes
    }

    pub fn shapes_mut(&mut self) -> &mut [ShapeInstance] {
        &mut self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
