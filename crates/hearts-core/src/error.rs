use thiserror::Error;

/// Failures raised while building or drawing the scene.
///
/// None of these are recovered from: frontends log them and stop.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("viewport must be non-empty, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    #[error("heart outline has only {0} distinct points")]
    DegenerateOutline(usize),

    #[error("outline tessellation failed: {0:?}")]
    Tessellation(lyon::tessellation::TessellationError),

    #[error("surface creation failed: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("no compatible GPU adapter")]
    NoAdapter,

    #[error("request_device error: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}
