//! Orbit path geometry and its ring visual.
//!
//! Each body's orbit is a closed circle in the XZ plane, densely sampled
//! once at construction and interpolated at lookup time. The visible path
//! is a separate thin torus ring so it reads from any viewing angle.

use std::f64::consts::TAU;

use bevy::math::DVec3;
use bevy::prelude::*;

/// Points sampled around the circle at construction. Dense enough that
/// interpolation error stays orders of magnitude below render precision.
pub const CURVE_SAMPLES: usize = 1024;

/// Cross-sections along the ring mesh.
pub const RING_SEGMENTS: usize = 90;

/// Vertices around each ring cross-section.
const RING_CROSS_RESOLUTION: usize = 12;

/// Ring tube radius in render units; near-zero next to planet radii.
pub const RING_THICKNESS: f32 = 0.8;

/// Neutral (idle) path color.
pub const ORBIT_NEUTRAL: Color = Color::srgb(1.0, 1.0, 1.0);

/// Accent color while a body's orbit is highlighted (#30e3ca).
pub const ORBIT_ACTIVE: Color = Color::srgb(48.0 / 255.0, 227.0 / 255.0, 202.0 / 255.0);

/// Closed parametric orbit curve of a fixed radius around the origin.
#[derive(Clone, Debug)]
pub struct OrbitCurve {
    radius: f64,
    points: Vec<DVec3>,
}

impl OrbitCurve {
    pub fn new(radius: f64) -> Self {
        Self::with_samples(radius, CURVE_SAMPLES)
    }

    pub fn with_samples(radius: f64, samples: usize) -> Self {
        debug_assert!(radius > 0.0, "orbit radius must be positive");
        debug_assert!(samples >= 2, "a closed curve needs at least two points");
        let points = (0..samples)
            .map(|i| {
                let theta = i as f64 / samples as f64 * TAU;
                DVec3::new(radius * theta.cos(), 0.0, radius * theta.sin())
            })
            .collect();
        Self { radius, points }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Point at normalized arc position `t`; `t` is taken modulo 1.
    /// Pure and O(1), cheap enough to call for every body every frame.
    pub fn sample(&self, t: f64) -> DVec3 {
        let n = self.points.len();
        let scaled = t.rem_euclid(1.0) * n as f64;
        let index = (scaled as usize) % n;
        let fraction = scaled - scaled.floor();
        let a = self.points[index];
        let b = self.points[(index + 1) % n];
        a.lerp(b, fraction)
    }
}

/// Marker on an orbit's ring entity; `name` matches the owning body.
#[derive(Component, Debug)]
pub struct OrbitRing {
    pub name: String,
}

/// Spawn the ring visual for one orbit. Returns the ring entity together
/// with its material handle, which the registry keeps for highlight
/// toggling. The material starts neutral and unlit, matching the flat
/// line look of the original paths.
pub fn spawn_ring(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    name: &str,
    radius: f32,
    segments: usize,
) -> (Entity, Handle<StandardMaterial>) {
    debug_assert!(segments > 0, "a ring needs at least one segment");
    let mesh = meshes.add(
        Torus {
            minor_radius: RING_THICKNESS,
            major_radius: radius,
        }
        .mesh()
        .major_resolution(segments)
        .minor_resolution(RING_CROSS_RESOLUTION),
    );
    let material = materials.add(StandardMaterial {
        base_color: ORBIT_NEUTRAL,
        unlit: true,
        ..default()
    });
    let entity = commands
        .spawn((
            Mesh3d(mesh),
            MeshMaterial3d(material.clone()),
            Transform::IDENTITY,
            OrbitRing {
                name: name.to_owned(),
            },
        ))
        .id();
    (entity, material)
}
