//! Frame scheduling primitives.
//!
//! Browsers and windowing loops call back once per display refresh; tests and
//! headless runs pull frames from a [`FrameClock`] instead. Both stop when
//! the shared [`StopToken`] is raised.

use crate::animate::Animator;
use crate::constants::FPS_LOG_INTERVAL_FRAMES;
use crate::error::SceneError;
use crate::render::SceneRenderer;
use crate::scene::Scene;
use instant::Instant;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Cloneable cancellation flag shared between a frame loop and its owner.
#[derive(Clone, Debug, Default)]
pub struct StopToken(Arc<AtomicBool>);

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTick {
    pub index: u64,
    pub dt: Duration,
}

pub trait FrameClock {
    /// The next frame, or `None` once the clock has finished.
    fn next_frame(&mut self) -> Option<FrameTick>;
}

/// Clock yielding frames at a fixed interval without waiting.
#[derive(Clone, Debug)]
pub struct FixedStepClock {
    step: Duration,
    remaining: Option<u64>,
    index: u64,
    stop: StopToken,
}

impl FixedStepClock {
    /// `frames == None` runs until the stop token is raised.
    pub fn new(step: Duration, frames: Option<u64>, stop: StopToken) -> Self {
        Self {
            step,
            remaining: frames,
            index: 0,
            stop,
        }
    }

    /// A 60 Hz clock for exactly `frames` frames.
    pub fn frames(frames: u64) -> Self {
        Self::new(Duration::from_micros(16_667), Some(frames), StopToken::new())
    }

    pub fn stop_token(&self) -> StopToken {
        self.stop.clone()
    }
}

impl FrameClock for FixedStepClock {
    fn next_frame(&mut self) -> Option<FrameTick> {
        if self.stop.is_stopped() {
            return None;
        }
        if let Some(left) = self.remaining.as_mut() {
            if *left == 0 {
                return None;
            }
            *left -= 1;
        }
        let tick = FrameTick {
            index: self.index,
            dt: self.step,
        };
        self.index += 1;
        Some(tick)
    }
}

/// Wall-clock frame timer; logs an average frame rate now and then.
#[derive(Debug)]
pub struct FrameTimer {
    last: Instant,
    window_start: Instant,
    window_frames: u64,
}

impl Default for FrameTimer {
    fn default() -> Self {
        let now = Instant::now();
        Self {
            last: now,
            window_start: now,
            window_frames: 0,
        }
    }
}

impl FrameTimer {
    /// Elapsed time since the previous call.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let dt = now - self.last;
        self.last = now;
        self.window_frames += 1;
        if self.window_frames >= FPS_LOG_INTERVAL_FRAMES {
            let secs = (now - self.window_start).as_secs_f32().max(1e-6);
            log::debug!("[frame] {:.1} fps", self.window_frames as f32 / secs);
            self.window_start = now;
            self.window_frames = 0;
        }
        dt
    }
}

/// One animation step followed by a draw.
pub fn step<R: SceneRenderer + ?Sized>(
    animator: &mut Animator,
    scene: &mut Scene,
    renderer: &mut R,
) -> Result<(), SceneError> {
    animator.tick(scene);
    renderer.render(scene)
}

/// Drive `clock` to completion, returning the number of frames drawn.
///
/// The first render error ends the run.
pub fn run<C, R>(
    clock: &mut C,
    animator: &mut Animator,
    scene: &mut Scene,
    renderer: &mut R,
) -> Result<u64, SceneError>
where
    C: FrameClock + ?Sized,
    R: SceneRenderer + ?Sized,
{
    let mut drawn = 0;
    while clock.next_frame().is_some() {
        step(animator, scene, renderer)?;
        drawn += 1;
    }
    Ok(drawn)
}
