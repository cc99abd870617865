//! Orrery - a scaled solar-system explorer.
//!
//! Eight planets travel precomputed circular orbits around an emissive
//! sun. A camera roams freely or locks onto any body, and a side panel
//! drives focus and orbit highlighting. Bodies are instantiated only
//! after every texture has resolved.

pub mod body;
pub mod camera;
pub mod catalog;
pub mod orbit;
pub mod registry;
pub mod textures;
pub mod time;
pub mod ui;

use bevy::prelude::*;

/// Frame ordering: clock first, then body kinematics, then camera
/// placement (the follow framing needs final body positions).
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimSet {
    Clock,
    Motion,
    Camera,
}

/// Everything needed to run the orrery inside a Bevy `App`. The scene is
/// owned by the `App` that adds this plugin; there is no ambient global.
pub struct OrreryPlugin;

impl Plugin for OrreryPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(catalog::Catalog::solar_system())
            .configure_sets(
                Update,
                (SimSet::Clock, SimSet::Motion, SimSet::Camera).chain(),
            )
            .add_plugins((
                time::ClockPlugin,
                textures::TexturePlugin,
                registry::SolarSystemPlugin,
                body::MotionPlugin,
                camera::CameraPlugin,
                ui::UiPlugin,
            ));
    }
}
