//! Orrery - a scaled solar-system explorer.
//!
//! A desktop application rendering the eight planets on precomputed
//! orbits, with camera focus and orbit highlighting driven from a side
//! panel.

use bevy::prelude::*;

use orrery::OrreryPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orrery".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(OrreryPlugin)
        .run();
}
