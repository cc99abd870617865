//! Phosphor icon font setup and the icons the panel uses.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Resource to track whether fonts have been initialized.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// Install the Phosphor icon font into the egui context. Runs in
/// `EguiPrimaryContextPass` where the context is guaranteed to be ready.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("phosphor icon fonts initialized");
}

/// Back/unfocus icon.
pub const BACK: &str = egui_phosphor::regular::ARROW_LEFT;
/// Body list header icon.
pub const PLANET: &str = egui_phosphor::regular::PLANET;
/// Pause control icon.
pub const PAUSE: &str = egui_phosphor::regular::PAUSE;
/// Resume control icon.
pub const PLAY: &str = egui_phosphor::regular::PLAY;
