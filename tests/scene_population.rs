//! End-to-end population against a synthetic two-body catalog.

mod common;

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use approx::assert_relative_eq;
use orrery::body::{MotionTuning, Planet, animate_planets, render_translation};
use orrery::camera::CameraRig;
use orrery::orbit::{OrbitCurve, OrbitRing};
use orrery::registry::{SolarSystem, populate_scene};
use orrery::textures::TextureSet;
use orrery::time::SimulationClock;

use common::{populated_app, synthetic_catalog};

#[test]
fn bodies_are_listed_in_declared_order() {
    let app = populated_app();
    let system = app.world().resource::<SolarSystem>();

    assert!(system.is_populated());
    let names: Vec<&str> = system.names().collect();
    assert_eq!(names, vec!["alpha", "beta"]);
}

#[test]
fn initial_positions_sit_at_the_curve_origin() {
    let app = populated_app();

    let entity = app
        .world()
        .resource::<SolarSystem>()
        .find("alpha")
        .expect("alpha is live")
        .body;
    let transform = app.world().entity(entity).get::<Transform>().unwrap();

    let expected = render_translation(OrbitCurve::new(100.0).sample(0.0));
    assert_eq!(transform.translation, expected);

    let planet = app.world().entity(entity).get::<Planet>().unwrap();
    assert_eq!(planet.spec.distance_from_sun, 100.0);
}

#[test]
fn each_body_gets_a_matching_orbit_ring() {
    let app = populated_app();
    let system = app.world().resource::<SolarSystem>();

    for entry in system.entries() {
        let ring = app
            .world()
            .entity(entry.orbit)
            .get::<OrbitRing>()
            .expect("ring entity carries its marker");
        assert_eq!(ring.name, entry.name);
    }
}

#[test]
fn focus_returns_the_spec_snapshot() {
    let app = populated_app();
    let system = app.world().resource::<SolarSystem>();

    let mut rig = CameraRig::default();
    let entry = rig.focus(system, "beta").expect("beta resolves");
    assert_eq!(entry.spec.rotation_period, -12.0);
    assert_eq!(entry.spec.radius, 5.0);
    assert_eq!(rig.locked_target(), Some("beta"));
}

#[test]
fn repeated_populate_does_not_duplicate_bodies() {
    let mut app = populated_app();

    app.world_mut()
        .run_system_once(populate_scene)
        .expect("second populate runs");

    let system = app.world().resource::<SolarSystem>();
    assert_eq!(system.names().count(), 2);
}

#[test]
fn incomplete_texture_set_aborts_population() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);

    let catalog = synthetic_catalog();
    // Only alpha has a texture; the gate contract is all-or-nothing.
    let partial = TextureSet::new(
        [("alpha".to_owned(), Handle::default())]
            .into_iter()
            .collect(),
    );
    app.insert_resource(partial);
    app.insert_resource(catalog);
    app.init_resource::<SolarSystem>();
    app.insert_resource(Assets::<Mesh>::default());
    app.insert_resource(Assets::<StandardMaterial>::default());

    app.world_mut()
        .run_system_once(populate_scene)
        .expect("populate runs");

    let system = app.world().resource::<SolarSystem>();
    assert!(!system.is_populated());
    assert_eq!(system.names().count(), 0);
}

#[test]
fn animate_updates_bodies_in_registry_order() {
    let mut app = populated_app();
    app.insert_resource(SimulationClock {
        elapsed: 100.0,
        delta: 0.1,
        scale: 1.0,
        paused: false,
    });
    app.init_resource::<MotionTuning>();

    app.world_mut()
        .run_system_once(animate_planets)
        .expect("animate runs");

    let system = app.world().resource::<SolarSystem>();
    let alpha = system.find("alpha").unwrap().body;
    let beta = system.find("beta").unwrap().body;

    // alpha: phase = 100 / 500 * 1.0 = 0.2; beta: 100 / 500 * 2.0 = 0.4.
    let expected_alpha = render_translation(OrbitCurve::new(100.0).sample(0.2));
    let expected_beta = render_translation(OrbitCurve::new(200.0).sample(0.4));

    let alpha_pos = app.world().entity(alpha).get::<Transform>().unwrap().translation;
    let beta_pos = app.world().entity(beta).get::<Transform>().unwrap().translation;

    assert_relative_eq!(alpha_pos.x, expected_alpha.x, epsilon = 1e-6);
    assert_relative_eq!(alpha_pos.z, expected_alpha.z, epsilon = 1e-6);
    assert_relative_eq!(beta_pos.x, expected_beta.x, epsilon = 1e-6);
    assert_relative_eq!(beta_pos.z, expected_beta.z, epsilon = 1e-6);
}

#[test]
fn clear_tears_down_and_is_idempotent() {
    let mut app = populated_app();

    let teardown = |mut commands: Commands, mut system: ResMut<SolarSystem>| {
        system.clear(&mut commands);
    };
    app.world_mut()
        .run_system_once(teardown)
        .expect("first clear runs");

    let system = app.world().resource::<SolarSystem>();
    assert!(!system.is_populated());
    assert_eq!(system.names().count(), 0);

    // Tearing down an already-cleared scene is a no-op, not a panic.
    app.world_mut()
        .run_system_once(teardown)
        .expect("second clear runs");

    // After an explicit clear the idempotency guard resets and the scene
    // may be populated again.
    app.world_mut()
        .run_system_once(populate_scene)
        .expect("repopulate runs");
    assert_eq!(app.world().resource::<SolarSystem>().names().count(), 2);
}
