pub mod animate;
pub mod clock;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod extrude;
pub mod grid;
pub mod heart;
pub mod render;
pub mod scene;

pub use animate::Animator;
pub use clock::{FixedStepClock, FrameClock, FrameTick, FrameTimer, StopToken};
pub use config::{SceneConfig, Viewport};
pub use constants::*;
pub use error::SceneError;
pub use extrude::{ExtrudeSettings, HeartGeometry, Vertex};
pub use heart::HeartPath;
pub use render::{GpuRenderer, SceneRenderer};
pub use scene::{Camera, DirectionalLight, Material, Mesh, Scene, ShapeInstance};

// Shaders bundled as string constants
pub static HEART_WGSL: &str = include_str!("../shaders/heart.wgsl");
