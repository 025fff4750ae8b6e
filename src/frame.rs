use hearts_core::{clock, Animator, FrameTimer, GpuRenderer, Scene, StopToken};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: Scene,
    pub animator: Animator,
    pub renderer: GpuRenderer<'a>,
    pub timer: FrameTimer,
    pub stop: StopToken,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        self.timer.tick();
        if let Err(e) = clock::step(&mut self.animator, &mut self.scene, &mut self.renderer) {
            log::error!(
                "render error after {} frames: {:?}",
                self.animator.frames(),
                e
            );
            self.stop.stop();
        }
    }
}

type TickHandle = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(tick: &TickHandle) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Run `frame()` once per display refresh until the context's stop token
/// is raised.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let stop = frame_ctx.borrow().stop.clone();
    let tick: TickHandle = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if stop.is_stopped() {
            log::warn!("[frame] loop stopped");
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
