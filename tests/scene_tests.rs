// Host-side tests for scene construction.

use hearts_core::color::srgb_hex_to_linear;
use hearts_core::{Scene, SceneConfig, SceneError, Viewport};
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn config(width: f32, height: f32) -> SceneConfig {
    SceneConfig::new(Viewport::new(width, height, 1.0))
}

#[test]
fn camera_matches_viewport() {
    let scene = Scene::new(&config(800.0, 600.0)).unwrap();
    assert_eq!(scene.camera.aspect, 800.0 / 600.0);
    assert_eq!(scene.camera.position.to_array(), [0.0, 150.0, 500.0]);
    assert!((scene.camera.fovy_radians - 50f32.to_radians()).abs() < 1e-6);
    assert_eq!((scene.camera.znear, scene.camera.zfar), (1.0, 1000.0));
    assert!(scene.is_empty());
}

#[test]
fn background_and_lights() {
    let scene = Scene::new(&config(800.0, 600.0)).unwrap();
    assert_eq!(scene.background, srgb_hex_to_linear(0x993355));

    let [key, fill] = &scene.lights;
    assert_eq!(key.intensity, 2.0);
    assert_eq!(fill.intensity, 1.0);
    assert_eq!(key.color, fill.color);
    assert_eq!(key.offset.to_array(), [-500.0, 500.0, 0.0]);
    assert_eq!(fill.offset.to_array(), [500.0, -500.0, -150.0]);

    // mounted on the camera, so the key light comes from up and to the left
    let dir = key.direction(&scene.camera);
    assert!((dir.length() - 1.0).abs() < 1e-5);
    assert!(dir.x < 0.0 && dir.y > 0.0 && dir.z > 0.0);
}

#[test]
fn init_populates_one_grid() {
    let scene = Scene::init(&config(800.0, 600.0), &mut StepRng::new(0, 0)).unwrap();
    assert_eq!(scene.len(), 140);
    assert!(scene.geometry.triangle_count() > 0);
}

#[test]
fn second_grid_appends_without_touching_the_first() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut scene = Scene::init(&config(800.0, 600.0), &mut rng).unwrap();
    let first: Vec<_> = scene.shapes().to_vec();

    let added = scene.add_heart_grid(&mut rng);
    assert!(added > 0);
    assert_eq!(scene.len(), first.len() + added);
    assert_eq!(&scene.shapes()[..first.len()], first.as_slice());
}

#[test]
fn seeded_scenes_match() {
    let cfg = config(1024.0, 768.0).with_seed(Some(11));
    let a = Scene::init(&cfg, &mut cfg.rng()).unwrap();
    let b = Scene::init(&cfg, &mut cfg.rng()).unwrap();
    assert_eq!(a.shapes(), b.shapes());
}

#[test]
fn model_matrix_places_the_heart() {
    let scene = Scene::init(&config(800.0, 600.0), &mut StepRng::new(0, 0)).unwrap();
    let mesh = scene.shapes()[0].mesh;
    let m = mesh.model_matrix();
    let origin = m.transform_point3(glam::Vec3::ZERO);
    assert!((origin - mesh.position).length() < 1e-4);

    // rz = π turns the outline upside down
    let up = m.transform_vector3(glam::Vec3::Y);
    assert!((up - glam::Vec3::new(0.0, -0.1, 0.0)).length() < 1e-5);
}

#[test]
fn empty_viewport_is_rejected() {
    for (w, h) in [(0.0, 600.0), (800.0, 0.0), (f32::NAN, 600.0)] {
        match Scene::new(&config(w, h)) {
            Err(SceneError::InvalidViewport { .. }) => {}
            Err(e) => panic!("unexpected error {e}"),
            Ok(_) => panic!("{w}x{h} accepted"),
        }
    }
}

#[test]
fn antialias_controls_sample_count() {
    let mut cfg = config(800.0, 600.0);
    assert_eq!(cfg.sample_count(), 4);
    cfg.antialias = false;
    assert_eq!(cfg.sample_count(), 1);
}

#[test]
fn physical_size_scales_by_pixel_ratio() {
    let viewport = Viewport::new(800.0, 600.0, 2.0);
    assert_eq!(viewport.physical_size(), (1600, 1200));
    assert_eq!(Viewport::new(0.2, 0.2, 1.0).physical_size(), (1, 1));
}
