use glam::Vec3;

// Scene tuning constants shared by the web and native frontends.

// Colors (sRGB hex, converted to linear at use)
pub const BACKGROUND_HEX: u32 = 0x993355;
pub const HEART_HEX: u32 = 0xff0022;
pub const HEART_SPECULAR_HEX: u32 = 0x111111;
pub const HEART_SHININESS: f32 = 30.0;
pub const LIGHT_HEX: u32 = 0x9955ff;

// Camera
pub const CAMERA_FOV_DEGREES: f32 = 50.0;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 150.0, 500.0);

// Lights, positioned in camera space: (intensity, offset)
pub const KEY_LIGHT_INTENSITY: f32 = 2.0;
pub const KEY_LIGHT_OFFSET: Vec3 = Vec3::new(-500.0, 500.0, 0.0);
pub const FILL_LIGHT_INTENSITY: f32 = 1.0;
pub const FILL_LIGHT_OFFSET: Vec3 = Vec3::new(500.0, -500.0, -150.0);

// Heart outline origin; the control points are relative to it
pub const HEART_ORIGIN: [f32; 2] = [-25.0, -250.0];

// Extrusion
pub const EXTRUDE_DEPTH: f32 = 1.0;
pub const EXTRUDE_STEPS: u32 = 2;
pub const BEVEL_THICKNESS: f32 = 10.0;
pub const BEVEL_SIZE: f32 = 20.0;
pub const BEVEL_SEGMENTS: u32 = 20;
pub const CURVE_SEGMENTS: u32 = 12;

// Grid layout
pub const GRID_STEP_MIN: f32 = 60.0;
pub const GRID_STEP_JITTER: f32 = 50.0;
pub const SHAPE_OFFSET_X: f32 = 25.0;
pub const SHAPE_OFFSET_Y: f32 = -50.0;
pub const INITIAL_TILT_MAX: f32 = 0.8; // rx, ry drawn in [0, max)
pub const SCALE_MIN: f32 = 0.1;
pub const SCALE_SPAN: f32 = 0.3;

// Animation
pub const ROTATION_SPEED: f32 = 0.05; // radians per frame per unit spin factor

// Renderer
pub const MSAA_SAMPLES: u32 = 4;
pub const FPS_LOG_INTERVAL_FRAMES: u64 = 600;
