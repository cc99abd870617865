//! Left-hand body list and focused-body property card.
//!
//! Hovering a row highlights that body's orbit; clicking locks the
//! camera onto it and notifies subscribers; Back releases the lock.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::camera::CameraRig;
use crate::catalog::Catalog;
use crate::registry::{BodyFocused, SolarSystem};
use crate::textures::ScenePhase;
use crate::time::SimulationClock;

use super::{UiState, capitalize, icons};

pub fn body_panel(
    mut contexts: EguiContexts,
    phase: Res<State<ScenePhase>>,
    catalog: Res<Catalog>,
    system: Res<SolarSystem>,
    mut rig: ResMut<CameraRig>,
    mut clock: ResMut<SimulationClock>,
    mut ui_state: ResMut<UiState>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut focused_events: MessageWriter<BodyFocused>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::SidePanel::left("bodies")
        .resizable(false)
        .default_width(210.0)
        .show(ctx, |ui| {
            match phase.get() {
                ScenePhase::Loading => {
                    ui.label("Loading textures...");
                    return;
                }
                ScenePhase::Unavailable => {
                    ui.heading("Scene unavailable");
                    ui.label("One or more body textures failed to load.");
                    return;
                }
                ScenePhase::Ready => {}
            }

            ui.heading(format!("{} Bodies", icons::PLANET));
            ui.separator();

            if ui.button(format!("{} Back", icons::BACK)).clicked() {
                rig.unfocus();
            }

            let mut hovered_now: Option<String> = None;
            egui::ScrollArea::vertical().show(ui, |ui| {
                for (name, _) in catalog.iter() {
                    let selected = rig.locked_target() == Some(name);
                    let response = ui.selectable_label(selected, capitalize(name));
                    if response.hovered() {
                        hovered_now = Some(name.to_owned());
                    }
                    if response.clicked() {
                        if let Some(entry) = rig.focus(&system, name) {
                            focused_events.write(BodyFocused {
                                name: entry.name.clone(),
                                spec: entry.spec,
                            });
                        }
                    }
                }
            });

            // Hand the orbit highlight over as the pointer moves between
            // rows; leaving the list entirely clears it.
            if ui_state.hovered_body != hovered_now {
                if let Some(previous) = ui_state.hovered_body.take() {
                    system.set_orbit_inactive(&previous, &mut materials);
                }
                if let Some(current) = &hovered_now {
                    system.set_orbit_active(current, &mut materials);
                }
                ui_state.hovered_body = hovered_now;
            }

            if let Some(name) = rig.locked_target().map(str::to_owned) {
                if let Some(entry) = system.find(&name) {
                    ui.separator();
                    ui.heading(capitalize(&name));
                    for (field, value) in entry.spec.fields() {
                        ui.label(format!("{field}: {value}"));
                    }
                }
            }

            ui.separator();
            let pause_label = if clock.paused {
                format!("{} Resume", icons::PLAY)
            } else {
                format!("{} Pause", icons::PAUSE)
            };
            if ui.button(pause_label).clicked() {
                clock.paused = !clock.paused;
            }
            ui.add(egui::Slider::new(&mut clock.scale, 0.1..=10.0).text("speed"));
        });
}
