use hearts_core::{
    clock, Animator, FrameTimer, GpuRenderer, Scene, SceneConfig, SceneError, StopToken, Viewport,
};
use std::sync::Arc;
use winit::dpi::LogicalSize;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

const WINDOW_WIDTH: f64 = 1280.0;
const WINDOW_HEIGHT: f64 = 800.0;
const SEED_ENV: &str = "HEARTS_SEED";

fn seed_from_env() -> Option<u64> {
    let raw = std::env::var(SEED_ENV).ok()?;
    match raw.parse() {
        Ok(seed) => Some(seed),
        Err(_) => {
            log::warn!("ignoring non-numeric {}={:?}", SEED_ENV, raw);
            None
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Floating hearts (native)")
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .build(&event_loop)?,
    );

    // Same contract as the page: the viewport is read once at startup.
    let scale_factor = window.scale_factor();
    let logical: LogicalSize<f64> = window.inner_size().to_logical(scale_factor);
    let viewport = Viewport::new(
        logical.width as f32,
        logical.height as f32,
        scale_factor as f32,
    );
    let seed = seed_from_env();
    if let Some(seed) = seed {
        log::info!("[init] seed={}", seed);
    }
    let config = SceneConfig::new(viewport).with_seed(seed);
    let mut rng = config.rng();
    let mut scene = Scene::init(&config, &mut rng)?;

    let size = window.inner_size();
    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(Arc::clone(&window))?;
    let mut renderer = pollster::block_on(GpuRenderer::new(
        &instance,
        surface,
        size.width,
        size.height,
        &scene,
        config.sample_count(),
    ))?;
    let mut animator = Animator::new(config.rotation_speed);
    let mut timer = FrameTimer::default();
    let stop = StopToken::new();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => renderer.resize(size.width, size.height),
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => {
            stop.stop();
            elwt.exit();
        }
        Event::AboutToWait => {
            if stop.is_stopped() {
                elwt.exit();
                return;
            }
            timer.tick();
            match clock::step(&mut animator, &mut scene, &mut renderer) {
                Ok(()) => window.request_redraw(),
                Err(SceneError::Surface(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                    renderer.reconfigure()
                }
                Err(e) => {
                    log::error!("render error after {} frames: {}", animator.frames(), e);
                    stop.stop();
                    elwt.exit();
                }
            }
        }
        _ => {}
    })?;
    Ok(())
}
