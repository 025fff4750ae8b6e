use crate::constants::ROTATION_SPEED;
use crate::scene::Scene;

/// Spins every heart by its own factors once per frame.
#[derive(Clone, Debug)]
pub struct Animator {
    speed: f32,
    frames: u64,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(ROTATION_SPEED)
    }
}

impl Animator {
    pub fn new(speed: f32) -> Self {
        Self { speed, frames: 0 }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Frames ticked so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advance one frame. Angles accumulate without wrapping.
    pub fn tick(&mut self, scene: &mut Scene) {
        for shape in scene.shapes_mut() {
            shape.mesh.rotation += shape.spin * self.speed;
        }
        self.frames += 1;
    }
}
