//! Common test utilities for headless integration tests.

use std::collections::HashMap;

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use orrery::catalog::{Catalog, PlanetSpec};
use orrery::registry::{SolarSystem, populate_scene};
use orrery::textures::TextureSet;

/// The synthetic two-body catalog used across integration tests.
pub fn synthetic_catalog() -> Catalog {
    Catalog::new(vec![
        (
            "alpha".to_owned(),
            PlanetSpec {
                distance_from_sun: 100.0,
                radius: 10.0,
                orbital_velocity: 1.0,
                rotation_period: 24.0,
            },
        ),
        (
            "beta".to_owned(),
            PlanetSpec {
                distance_from_sun: 200.0,
                radius: 5.0,
                orbital_velocity: 2.0,
                rotation_period: -12.0,
            },
        ),
    ])
    .expect("synthetic catalog is valid")
}

/// One placeholder texture handle per catalog name.
pub fn texture_set_for(catalog: &Catalog) -> TextureSet {
    let map: HashMap<String, Handle<Image>> = catalog
        .names()
        .map(|name| (name.to_owned(), Handle::default()))
        .collect();
    TextureSet::new(map)
}

/// Minimal headless app with the synthetic catalog populated.
pub fn populated_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);

    let catalog = synthetic_catalog();
    app.insert_resource(texture_set_for(&catalog));
    app.insert_resource(catalog);
    app.init_resource::<SolarSystem>();
    app.insert_resource(Assets::<Mesh>::default());
    app.insert_resource(Assets::<StandardMaterial>::default());

    app.world_mut()
        .run_system_once(populate_scene)
        .expect("populate runs");
    app
}
