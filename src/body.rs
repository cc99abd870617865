//! Planet bodies: visual sphere plus time-driven kinematics.
//!
//! A body's position is recomputed from elapsed time every frame — it is
//! a pure function of the clock, never an integrator. Spin is the one
//! accumulated quantity: each frame rotates the body by that frame's
//! delta.

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::SimSet;
use crate::camera::RENDER_SCALE;
use crate::catalog::PlanetSpec;
use crate::orbit::OrbitCurve;
use crate::registry::SolarSystem;
use crate::textures::ScenePhase;
use crate::time::SimulationClock;

/// Divisor applied to elapsed seconds before scaling by a body's orbital
/// velocity; together with [`SPIN_RATE_MULTIPLIER`] it sets how fast the
/// scene plays out. Tuning values carried over from the original product.
pub const ORBIT_TIME_DIVISOR: f64 = 500.0;

/// Multiplier applied to per-frame spin increments.
pub const SPIN_RATE_MULTIPLIER: f64 = 10.0;

/// Plugin advancing every live body each frame, in registry order.
pub struct MotionPlugin;

impl Plugin for MotionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MotionTuning>().add_systems(
            Update,
            animate_planets
                .in_set(SimSet::Motion)
                .run_if(in_state(ScenePhase::Ready)),
        );
    }
}

/// Overridable pacing constants for orbital phase and spin.
#[derive(Resource, Clone, Copy, Debug)]
pub struct MotionTuning {
    pub orbit_time_divisor: f64,
    pub spin_rate_multiplier: f64,
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            orbit_time_divisor: ORBIT_TIME_DIVISOR,
            spin_rate_multiplier: SPIN_RATE_MULTIPLIER,
        }
    }
}

/// A simulated orbiting body. Owns its orbit curve; the ring entity that
/// visualizes the curve is tracked by the registry alongside this one.
#[derive(Component, Debug)]
pub struct Planet {
    pub name: String,
    pub spec: PlanetSpec,
    /// `1 / rotation_period`; the sign carries the spin direction.
    pub rotation_speed: f64,
    curve: OrbitCurve,
}

impl Planet {
    pub fn new(name: impl Into<String>, spec: PlanetSpec, curve: OrbitCurve) -> Self {
        Self {
            name: name.into(),
            rotation_speed: 1.0 / spec.rotation_period,
            spec,
            curve,
        }
    }

    pub fn curve(&self) -> &OrbitCurve {
        &self.curve
    }

    /// Normalized orbital phase for a given elapsed time.
    pub fn orbital_phase(&self, elapsed: f64, tuning: &MotionTuning) -> f64 {
        (elapsed / tuning.orbit_time_divisor * self.spec.orbital_velocity).rem_euclid(1.0)
    }

    /// Advance the body's pose. Position is recomputed from `elapsed`
    /// alone, so replaying the same time yields the same translation.
    /// Spin accumulates `delta` increments about the local vertical axis:
    /// skipping or repeating a delta changes orientation but never
    /// position.
    pub fn animate(
        &self,
        transform: &mut Transform,
        elapsed: f64,
        delta: f64,
        tuning: &MotionTuning,
    ) {
        let position = self.curve.sample(self.orbital_phase(elapsed, tuning));
        transform.translation = render_translation(position);

        let spin = delta * self.rotation_speed * tuning.spin_rate_multiplier;
        transform.rotate_local_y(spin as f32);
    }
}

/// World-space f64 position to f32 render translation.
pub fn render_translation(position: DVec3) -> Vec3 {
    (position * RENDER_SCALE).as_vec3()
}

/// Advance every live body. Iterates the registry rather than the query
/// so bodies update in declared catalog order.
pub fn animate_planets(
    clock: Res<SimulationClock>,
    tuning: Res<MotionTuning>,
    system: Res<SolarSystem>,
    mut bodies: Query<(&mut Transform, &Planet)>,
) {
    for entry in system.entries() {
        let Ok((mut transform, planet)) = bodies.get_mut(entry.body) else {
            continue;
        };
        planet.animate(&mut transform, clock.elapsed, clock.delta, &tuning);
    }
}

/// Spawn one body: UV sphere sized by the spec radius, double-sided
/// textured material, initial position at the curve's origin point.
pub fn spawn_planet(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    name: &str,
    spec: PlanetSpec,
    texture: Handle<Image>,
) -> Entity {
    let planet = Planet::new(name, spec, OrbitCurve::new(spec.distance_from_sun));
    let initial = render_translation(planet.curve().sample(0.0));

    let mesh = meshes.add(Sphere::new((spec.radius * RENDER_SCALE) as f32).mesh().uv(100, 100));
    let material = materials.add(StandardMaterial {
        base_color_texture: Some(texture),
        double_sided: true,
        cull_mode: None,
        perceptual_roughness: 1.0,
        ..default()
    });

    commands
        .spawn((
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::from_translation(initial),
            planet,
        ))
        .id()
}
