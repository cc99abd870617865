//! Startup texture gate.
//!
//! Every cataloged body gets one asynchronous texture load at startup;
//! the scene is populated only after all of them resolve. Any single
//! failure fails the whole gate — a partially textured scene is never
//! shown.

use std::collections::HashMap;

use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::catalog::Catalog;

/// Plugin owning the load barrier and the scene lifecycle state.
pub struct TexturePlugin;

impl Plugin for TexturePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<ScenePhase>()
            .init_resource::<PendingTextures>()
            .add_systems(Startup, begin_texture_loads)
            .add_systems(
                Update,
                poll_texture_loads.run_if(in_state(ScenePhase::Loading)),
            );
    }
}

/// Scene lifecycle: textures resolving, scene live, or startup failed.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScenePhase {
    #[default]
    Loading,
    Ready,
    Unavailable,
}

/// Aggregate startup failure naming every body whose texture load failed.
#[derive(thiserror::Error, Debug)]
#[error("texture loads failed for: {}", failed.join(", "))]
pub struct TextureLoadError {
    pub failed: Vec<String>,
}

/// Handles still being resolved by the asset server.
#[derive(Resource, Default)]
pub struct PendingTextures {
    handles: Vec<(String, Handle<Image>)>,
}

/// Immutable body name -> texture mapping, inserted once when the gate
/// clears. Never mutated afterwards; there is no mid-session hot-swap.
#[derive(Resource, Clone, Default)]
pub struct TextureSet {
    map: HashMap<String, Handle<Image>>,
}

impl TextureSet {
    pub fn new(map: HashMap<String, Handle<Image>>) -> Self {
        Self { map }
    }

    pub fn get(&self, name: &str) -> Option<&Handle<Image>> {
        self.map.get(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Asset path for a body's texture.
pub fn texture_path(name: &str) -> String {
    format!("textures/{name}.png")
}

fn begin_texture_loads(
    asset_server: Res<AssetServer>,
    catalog: Res<Catalog>,
    mut pending: ResMut<PendingTextures>,
) {
    for (name, _) in catalog.iter() {
        let handle = asset_server.load(texture_path(name));
        pending.handles.push((name.to_owned(), handle));
    }
    info!("requested {} body textures", pending.handles.len());
}

/// Poll the outstanding loads. The gate settles exactly once: either all
/// handles are loaded (scene becomes ready) or at least one failed (scene
/// is declared unavailable with one aggregate error).
fn poll_texture_loads(
    asset_server: Res<AssetServer>,
    pending: Res<PendingTextures>,
    mut commands: Commands,
    mut phase: ResMut<NextState<ScenePhase>>,
) {
    let mut failed = Vec::new();
    let mut all_loaded = true;
    for (name, handle) in &pending.handles {
        match asset_server.load_state(handle) {
            LoadState::Loaded => {}
            LoadState::Failed(_) => failed.push(name.clone()),
            _ => all_loaded = false,
        }
    }

    if !failed.is_empty() {
        error!("{}", TextureLoadError { failed });
        phase.set(ScenePhase::Unavailable);
        return;
    }

    if all_loaded {
        let map = pending
            .handles
            .iter()
            .map(|(name, handle)| (name.clone(), handle.clone()))
            .collect();
        commands.insert_resource(TextureSet::new(map));
        info!("all {} body textures resolved", pending.handles.len());
        phase.set(ScenePhase::Ready);
    }
}
