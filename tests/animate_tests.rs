// Host-side tests for the animator and the frame loop.

use hearts_core::clock::{self, FixedStepClock, FrameClock, StopToken};
use hearts_core::{Animator, Scene, SceneConfig, SceneError, SceneRenderer, Viewport};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

fn scene() -> Scene {
    let config = SceneConfig::new(Viewport::new(640.0, 480.0, 1.0));
    Scene::init(&config, &mut StdRng::seed_from_u64(3)).unwrap()
}

/// Records what it was asked to draw; optionally fails on a given frame.
#[derive(Default)]
struct Recorder {
    frames: Vec<f32>,
    fail_on: Option<usize>,
}

impl SceneRenderer for Recorder {
    fn render(&mut self, scene: &Scene) -> Result<(), SceneError> {
        if self.fail_on == Some(self.frames.len()) {
            return Err(SceneError::NoAdapter);
        }
        self.frames.push(scene.shapes()[0].mesh.rotation.x);
        Ok(())
    }
}

#[test]
fn rotation_accumulates_per_frame() {
    let mut scene = scene();
    let before: Vec<_> = scene.shapes().to_vec();
    let mut animator = Animator::default();
    assert_eq!(animator.speed(), 0.05);

    const N: u64 = 240;
    for _ in 0..N {
        animator.tick(&mut scene);
    }
    assert_eq!(animator.frames(), N);

    for (old, new) in before.iter().zip(scene.shapes()) {
        let expected = old.mesh.rotation + old.spin * 0.05 * N as f32;
        assert!(
            (new.mesh.rotation - expected).abs().max_element() < 1e-3,
            "{:?} vs {:?}",
            new.mesh.rotation,
            expected
        );
        // no wraparound
        assert!(new.mesh.rotation.z >= old.mesh.rotation.z);
        assert_eq!(new.mesh.position, old.mesh.position);
        assert_eq!(new.mesh.scale, old.mesh.scale);
    }
}

#[test]
fn zero_speed_leaves_scene_still() {
    let mut scene = scene();
    let before: Vec<_> = scene.shapes().to_vec();
    let mut animator = Animator::new(0.0);
    animator.tick(&mut scene);
    assert_eq!(scene.shapes(), before.as_slice());
}

#[test]
fn run_draws_every_frame_after_animating() {
    let mut scene = scene();
    let start = scene.shapes()[0].mesh.rotation.x;
    let spin = scene.shapes()[0].spin.x;
    let mut animator = Animator::default();
    let mut recorder = Recorder::default();

    let drawn = clock::run(
        &mut FixedStepClock::frames(5),
        &mut animator,
        &mut scene,
        &mut recorder,
    )
    .unwrap();
    assert_eq!(drawn, 5);
    assert_eq!(recorder.frames.len(), 5);
    // the first draw already sees one step of rotation
    assert!((recorder.frames[0] - (start + spin * 0.05)).abs() < 1e-6);
}

#[test]
fn run_stops_at_first_render_error() {
    let mut scene = scene();
    let mut animator = Animator::default();
    let mut recorder = Recorder {
        fail_on: Some(3),
        ..Recorder::default()
    };

    let result = clock::run(
        &mut FixedStepClock::frames(10),
        &mut animator,
        &mut scene,
        &mut recorder,
    );
    assert!(matches!(result, Err(SceneError::NoAdapter)));
    assert_eq!(recorder.frames.len(), 3);
    assert_eq!(animator.frames(), 4);
}

#[test]
fn stop_token_ends_an_open_clock() {
    let stop = StopToken::new();
    let mut clock = FixedStepClock::new(Duration::from_millis(16), None, stop.clone());
    for i in 0..3 {
        let tick = clock.next_frame().unwrap();
        assert_eq!(tick.index, i);
        assert_eq!(tick.dt, Duration::from_millis(16));
    }
    stop.stop();
    assert!(clock.stop_token().is_stopped());
    assert!(clock.next_frame().is_none());
}

#[test]
fn stopped_clock_draws_nothing() {
    let mut clock = FixedStepClock::frames(100);
    clock.stop_token().stop();
    let mut recorder = Recorder::default();
    let drawn = clock::run(
        &mut clock,
        &mut Animator::default(),
        &mut scene(),
        &mut recorder,
    )
    .unwrap();
    assert_eq!(drawn, 0);
    assert!(recorder.frames.is_empty());
}

#[test]
fn finite_clock_runs_out() {
    let mut clock = FixedStepClock::frames(2);
    assert!(clock.next_frame().is_some());
    assert!(clock.next_frame().is_some());
    assert!(clock.next_frame().is_none());
    assert!(clock.next_frame().is_none());
}
