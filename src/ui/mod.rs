//! egui-based presentation layer: body list, focus panel, clock controls.

pub mod icons;
mod panel;

use bevy::prelude::*;
use bevy_egui::{EguiPlugin, EguiPrimaryContextPass};

/// Plugin that adds the side panel and its font setup.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin::default())
            .init_resource::<UiState>()
            .init_resource::<icons::FontsInitialized>()
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                panel::body_panel.after(icons::setup_fonts),
            );
    }
}

/// UI interaction state surviving across frames.
#[derive(Resource, Default)]
pub struct UiState {
    /// Body row the pointer was over last frame; drives the orbit
    /// highlight hand-off between rows.
    pub hovered_body: Option<String>,
}

/// Capitalize a catalog name for display; registry keys stay lowercase.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
