#![cfg(target_arch = "wasm32")]
use hearts_core::{Animator, FrameTimer, GpuRenderer, Scene, SceneConfig, StopToken};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod frame;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hearts-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let viewport = dom::read_viewport(&window)?;
    let seed = dom::query_seed(&window);
    if let Some(seed) = seed {
        log::info!("[init] seed={}", seed);
    }
    let config = SceneConfig::new(viewport).with_seed(seed);
    let mut rng = config.rng();
    let scene = Scene::init(&config, &mut rng)?;

    let canvas = dom::mount_canvas(&document, &viewport)?;
    let (width, height) = viewport.physical_size();
    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas))?;
    let renderer = GpuRenderer::new(
        &instance,
        surface,
        width,
        height,
        &scene,
        config.sample_count(),
    )
    .await?;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        animator: Animator::new(config.rotation_speed),
        renderer,
        timer: FrameTimer::default(),
        stop: StopToken::new(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
