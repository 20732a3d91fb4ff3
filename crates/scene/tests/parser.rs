use physics::{ConfigError, PhysicsError, Vec3};
use scene::Scene;

fn load(name: &str) -> Scene {
    Scene::from_path(format!("tests/data/{name}.json")).unwrap()
}

#[test]
fn parse_lattice_scene() {
    let scene = load("lattice");
    assert_eq!(scene.spheres_per_axis, 3);
    assert_eq!(scene.fast_forward, 2.0);
    assert_eq!(scene.seed, Some(42));
    assert!(scene.spheres.is_none());
    // Fields left out keep their defaults.
    assert_eq!(scene.mass, 1.0);
    assert_eq!(scene.half_width, 1.0);
}

#[test]
fn lattice_scene_builds_27_spheres() {
    let sim = load("lattice").into_sim().unwrap();
    assert_eq!(sim.spheres().len(), 27);
    assert_eq!(sim.params().radius, 0.1);
    assert_eq!(sim.params().restitution, 0.8);
    assert!(sim.overlapping_pairs().is_empty());
}

#[test]
fn seeded_scene_is_reproducible() {
    let a = load("lattice").into_sim().unwrap();
    let b = load("lattice").into_sim().unwrap();
    assert_eq!(a.spheres(), b.spheres());
}

#[test]
fn explicit_spheres_replace_the_lattice() {
    let sim = load("head_on").into_sim().unwrap();
    let spheres = sim.spheres();
    assert_eq!(spheres.len(), 2);
    assert_eq!(spheres[0].pos, Vec3::new(-0.5, 0.75, 0.0));
    assert_eq!(spheres[1].vel, Vec3::new(-0.1, 0.0, 0.0));
    assert_eq!(spheres[0].color, [0.0, 1.0, 0.0]);
    assert_eq!(spheres[1].color, [0.0, 0.0, 1.0]);
}

#[test]
fn head_on_scene_collides_and_swaps_velocities() {
    let mut sim = load("head_on").into_sim().unwrap();
    let tick = sim.run(1.0 / 60.0, 240).unwrap();
    assert_eq!(tick.sphere_collisions, 1);
    assert_eq!(tick.wall_bounces, 0);

    let spheres = sim.spheres();
    assert!((spheres[0].vel.x + 0.1).abs() < 1e-4);
    assert!((spheres[1].vel.x - 0.1).abs() < 1e-4);
    assert!(spheres[0].pos.x < spheres[1].pos.x);
}

#[test]
fn sphere_defaults_fill_missing_velocity_and_color() {
    let scene: Scene = r#"{ "spheres": [ { "pos": [0.1, 0.2, 0.3] } ] }"#
        .parse()
        .unwrap();
    let sim = scene.into_sim().unwrap();
    let sphere = sim.spheres()[0];
    assert_eq!(sphere.vel, Vec3::ZERO);
    assert_eq!(sphere.color, [1.0, 1.0, 1.0]);
}

#[test]
fn single_sphere_scene_uses_default_physics() {
    let sim = load("single").into_sim().unwrap();
    assert_eq!(sim.spheres().len(), 1);
    assert_eq!(sim.spheres()[0].vel, Vec3::new(0.4, -0.2, 0.7));
    assert_eq!(sim.params().gravity, Vec3::new(0.0, -0.98, 0.0));
    assert_eq!(sim.params().restitution, 0.95);
}

#[test]
fn invalid_restitution_is_rejected() {
    let err = load("bad_restitution").into_sim().unwrap_err();
    let physics_err = err.downcast_ref::<PhysicsError>().unwrap();
    assert!(matches!(
        physics_err,
        PhysicsError::Config(ConfigError::Restitution(r)) if *r == 1.5
    ));
}

#[test]
fn empty_sphere_list_is_an_error() {
    let scene: Scene = r#"{ "spheres": [] }"#.parse().unwrap();
    assert!(scene.into_sim().is_err());
}

#[test]
fn malformed_json_is_an_error() {
    assert!("{ \"spheres_per_axis\": ".parse::<Scene>().is_err());
    assert!(Scene::from_path("tests/data/missing.json").is_err());
}
