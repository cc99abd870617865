//! Live registry of spawned bodies and their orbit rings.
//!
//! The registry owns the ordered collection of live bodies, populated
//! once after the texture gate clears. Lookup misses are ordinary — the
//! UI may reference names before population finishes — and every
//! name-keyed operation treats them as silent no-ops.

use bevy::prelude::*;

use crate::body;
use crate::camera::RENDER_SCALE;
use crate::catalog::{Catalog, PlanetSpec};
use crate::orbit::{self, ORBIT_ACTIVE, ORBIT_NEUTRAL};
use crate::textures::{ScenePhase, TextureSet};

/// Sun visual radius in render units.
const SUN_RADIUS: f32 = 25.0;

/// Lumens for the point light at the origin; the scene spans thousands
/// of render units, so the falloff needs a large budget.
const SUN_LIGHT_INTENSITY: f32 = 1e12;

const SUN_LIGHT_RANGE: f32 = 20_000.0;

pub struct SolarSystemPlugin;

impl Plugin for SolarSystemPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SolarSystem>()
            .add_message::<BodyFocused>()
            .add_systems(OnEnter(ScenePhase::Ready), populate_scene);
    }
}

/// Notification emitted on every successful focus. Collaborators (e.g.
/// an image-lookup panel) subscribe to this and receive the focused
/// body's spec snapshot.
#[derive(Message, Debug, Clone)]
pub struct BodyFocused {
    pub name: String,
    pub spec: PlanetSpec,
}

/// One live body: the planet entity, its ring entity, and the material
/// handle the highlight toggles mutate.
#[derive(Debug)]
pub struct PlanetEntry {
    pub name: String,
    pub spec: PlanetSpec,
    pub body: Entity,
    pub orbit: Entity,
    pub orbit_material: Handle<StandardMaterial>,
}

/// Marker for the decorative sun at the origin.
#[derive(Component)]
pub struct Sun;

/// Ordered collection of live bodies. Insertion order follows the
/// catalog and is the display/iteration contract.
#[derive(Resource, Default)]
pub struct SolarSystem {
    entries: Vec<PlanetEntry>,
    decor: Vec<Entity>,
    populated: bool,
}

impl SolarSystem {
    pub fn is_populated(&self) -> bool {
        self.populated
    }

    pub fn entries(&self) -> &[PlanetEntry] {
        &self.entries
    }

    /// Body names in declared order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Exact-name lookup; `None` means "no such body" and callers are
    /// expected to no-op on it.
    pub fn find(&self, name: &str) -> Option<&PlanetEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Switch a body's orbit ring to the accent color. Unknown names are
    /// silent no-ops.
    pub fn set_orbit_active(&self, name: &str, materials: &mut Assets<StandardMaterial>) {
        self.set_orbit_color(name, ORBIT_ACTIVE, materials);
    }

    /// Return a body's orbit ring to the neutral color. Unknown names are
    /// silent no-ops.
    pub fn set_orbit_inactive(&self, name: &str, materials: &mut Assets<StandardMaterial>) {
        self.set_orbit_color(name, ORBIT_NEUTRAL, materials);
    }

    fn set_orbit_color(&self, name: &str, color: Color, materials: &mut Assets<StandardMaterial>) {
        let Some(entry) = self.find(name) else {
            return;
        };
        if let Some(material) = materials.get_mut(&entry.orbit_material) {
            material.base_color = color;
        }
    }

    /// Tear the scene down: despawn every body, ring, and decoration and
    /// drop their asset handles. Safe to call again once torn down.
    pub fn clear(&mut self, commands: &mut Commands) {
        let count = self.entries.len();
        for entry in self.entries.drain(..) {
            commands.entity(entry.body).despawn();
            commands.entity(entry.orbit).despawn();
        }
        for entity in self.decor.drain(..) {
            commands.entity(entity).despawn();
        }
        if self.populated {
            info!("cleared scene ({count} bodies)");
        }
        self.populated = false;
    }
}

/// Instantiate one orbit ring and one planet per catalog entry, in table
/// order, plus the sun and its light. Population is all-or-nothing: an
/// incomplete texture set aborts without spawning anything, and a second
/// call against a live scene is rejected rather than duplicating bodies.
pub fn populate_scene(
    mut commands: Commands,
    catalog: Res<Catalog>,
    textures: Res<TextureSet>,
    mut system: ResMut<SolarSystem>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if system.populated {
        warn!("populate requested for an already-populated scene; ignoring");
        return;
    }

    let missing: Vec<&str> = catalog
        .iter()
        .filter(|(name, _)| textures.get(name).is_none())
        .map(|(name, _)| name)
        .collect();
    if !missing.is_empty() {
        error!(
            "texture set is missing {}; leaving the scene empty",
            missing.join(", ")
        );
        return;
    }

    for (name, spec) in catalog.iter() {
        let Some(texture) = textures.get(name).cloned() else {
            continue;
        };
        let ring_radius = (spec.distance_from_sun * RENDER_SCALE) as f32;
        let (orbit_entity, orbit_material) = orbit::spawn_ring(
            &mut commands,
            &mut meshes,
            &mut materials,
            name,
            ring_radius,
            orbit::RING_SEGMENTS,
        );
        let body_entity =
            body::spawn_planet(&mut commands, &mut meshes, &mut materials, name, *spec, texture);
        system.entries.push(PlanetEntry {
            name: name.to_owned(),
            spec: *spec,
            body: body_entity,
            orbit: orbit_entity,
            orbit_material,
        });
    }

    let sun = spawn_sun(&mut commands, &mut meshes, &mut materials);
    let light = spawn_sunlight(&mut commands);
    system.decor.push(sun);
    system.decor.push(light);

    system.populated = true;
    info!("populated scene with {} bodies", system.entries.len());
}

fn spawn_sun(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) -> Entity {
    let color = Color::srgb(1.0, 0.95, 0.4);
    let material = materials.add(StandardMaterial {
        base_color: color,
        emissive: color.to_linear() * 2.0,
        ..default()
    });
    commands
        .spawn((
            Mesh3d(meshes.add(Sphere::new(SUN_RADIUS).mesh().uv(100, 100))),
            MeshMaterial3d(material),
            Transform::default(),
            Sun,
        ))
        .id()
}

fn spawn_sunlight(commands: &mut Commands) -> Entity {
    commands
        .spawn((
            PointLight {
                intensity: SUN_LIGHT_INTENSITY,
                range: SUN_LIGHT_RANGE,
                shadows_enabled: false,
                ..default()
            },
            Transform::default(),
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{CameraRig, CameraState};

    fn spec(distance: f64) -> PlanetSpec {
        PlanetSpec {
            distance_from_sun: distance,
            radius: 10.0,
            orbital_velocity: 1.0,
            rotation_period: 24.0,
        }
    }

    fn two_body_system(world: &mut World) -> SolarSystem {
        let entries = ["mercury", "venus"]
            .iter()
            .enumerate()
            .map(|(i, name)| PlanetEntry {
                name: (*name).to_owned(),
                spec: spec(100.0 * (i + 1) as f64),
                body: world.spawn_empty().id(),
                orbit: world.spawn_empty().id(),
                orbit_material: Handle::default(),
            })
            .collect();
        SolarSystem {
            entries,
            decor: Vec::new(),
            populated: true,
        }
    }

    #[test]
    fn find_misses_are_not_errors() {
        let system = SolarSystem::default();
        assert!(system.find("mercury").is_none());

        let mut materials = Assets::<StandardMaterial>::default();
        // Highlight toggles on unknown names must not panic.
        system.set_orbit_active("mercury", &mut materials);
        system.set_orbit_inactive("mercury", &mut materials);
    }

    #[test]
    fn names_follow_insertion_order() {
        let mut world = World::new();
        let system = two_body_system(&mut world);
        let names: Vec<&str> = system.names().collect();
        assert_eq!(names, vec!["mercury", "venus"]);
    }

    #[test]
    fn focus_resolves_then_locks() {
        let mut world = World::new();
        let system = two_body_system(&mut world);
        let mut rig = CameraRig::default();

        let entry = rig.focus(&system, "mercury").expect("mercury resolves");
        assert_eq!(entry.name, "mercury");
        assert_eq!(rig.locked_target(), Some("mercury"));
        assert!(!rig.input_enabled);
    }

    #[test]
    fn focus_on_unknown_name_keeps_prior_state() {
        let mut world = World::new();
        let system = two_body_system(&mut world);
        let mut rig = CameraRig::default();

        assert!(rig.focus(&system, "pluto").is_none());
        assert_eq!(*rig.state(), CameraState::Free);
        assert!(rig.input_enabled);

        rig.focus(&system, "venus").unwrap();
        assert!(rig.focus(&system, "pluto").is_none());
        assert_eq!(rig.locked_target(), Some("venus"));
    }

    #[test]
    fn retargeting_skips_the_free_state() {
        let mut world = World::new();
        let system = two_body_system(&mut world);
        let mut rig = CameraRig::default();

        rig.focus(&system, "mercury").unwrap();
        rig.focus(&system, "venus").unwrap();
        assert_eq!(rig.locked_target(), Some("venus"));
        assert!(!rig.input_enabled);
    }

    #[test]
    fn unfocus_is_idempotent() {
        let mut world = World::new();
        let system = two_body_system(&mut world);
        let mut rig = CameraRig::default();

        rig.unfocus();
        assert_eq!(*rig.state(), CameraState::Free);

        rig.focus(&system, "mercury").unwrap();
        rig.unfocus();
        rig.unfocus();
        assert_eq!(*rig.state(), CameraState::Free);
        assert!(rig.input_enabled);
    }
}
