//! Compiled-in orbital catalog for the scaled solar system.
//!
//! Distances and radii are in megameters. Planet radii carry a fixed
//! display exaggeration so bodies stay visible against orbit scale; the
//! scene is a stylized orrery, not a to-scale model.

use bevy::prelude::*;

/// Display exaggeration applied to physical planet radii.
pub const RADIUS_EXAGGERATION: f64 = 3000.0;

/// Orbital and spin parameters for one body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanetSpec {
    /// Orbit radius in megameters.
    pub distance_from_sun: f64,
    /// Body radius in megameters (display-exaggerated).
    pub radius: f64,
    /// Relative angular-rate scale along the orbit.
    pub orbital_velocity: f64,
    /// Hours per full rotation; the sign encodes spin direction.
    pub rotation_period: f64,
}

impl PlanetSpec {
    /// Field names and values, for display purposes.
    pub fn fields(&self) -> [(&'static str, f64); 4] {
        [
            ("distance_from_sun", self.distance_from_sun),
            ("radius", self.radius),
            ("orbital_velocity", self.orbital_velocity),
            ("rotation_period", self.rotation_period),
        ]
    }
}

/// Rejected catalog entries. These are configuration errors, caught once
/// at table construction; a table that passes never produces NaN poses at
/// runtime.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("body {name:?} has non-positive radius {radius}")]
    NonPositiveRadius { name: String, radius: f64 },
    #[error("body {name:?} has non-positive orbit distance {distance}")]
    NonPositiveDistance { name: String, distance: f64 },
    #[error("body {name:?} has zero rotation period")]
    ZeroRotationPeriod { name: String },
    #[error("body {name:?} has a non-finite parameter")]
    NonFinite { name: String },
    #[error("duplicate body name {name:?}")]
    DuplicateName { name: String },
}

/// Ordered table of body name -> spec. Iteration order is the display
/// contract: entries are declared by ascending distance from the sun.
#[derive(Resource, Clone, Debug)]
pub struct Catalog {
    entries: Vec<(String, PlanetSpec)>,
}

impl Catalog {
    /// Validate and wrap a table. Rejects non-positive radii/distances,
    /// zero rotation periods (used as a divisor), non-finite values, and
    /// duplicate names.
    pub fn new(entries: Vec<(String, PlanetSpec)>) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for (name, spec) in &entries {
            let finite = spec.distance_from_sun.is_finite()
                && spec.radius.is_finite()
                && spec.orbital_velocity.is_finite()
                && spec.rotation_period.is_finite();
            if !finite {
                return Err(CatalogError::NonFinite { name: name.clone() });
            }
            if spec.radius <= 0.0 {
                return Err(CatalogError::NonPositiveRadius {
                    name: name.clone(),
                    radius: spec.radius,
                });
            }
            if spec.distance_from_sun <= 0.0 {
                return Err(CatalogError::NonPositiveDistance {
                    name: name.clone(),
                    distance: spec.distance_from_sun,
                });
            }
            if spec.rotation_period == 0.0 {
                return Err(CatalogError::ZeroRotationPeriod { name: name.clone() });
            }
            if !seen.insert(name.clone()) {
                return Err(CatalogError::DuplicateName { name: name.clone() });
            }
        }
        Ok(Self { entries })
    }

    /// The eight planets, ordered by ascending distance from the sun.
    /// Values carried over from the original product data (megameters,
    /// km/s-relative orbital velocities, hours per rotation).
    pub fn solar_system() -> Self {
        let planet = |name: &str, distance: f64, radius_mm: f64, velocity: f64, period: f64| {
            (
                name.to_owned(),
                PlanetSpec {
                    distance_from_sun: distance,
                    radius: radius_mm * RADIUS_EXAGGERATION,
                    orbital_velocity: velocity,
                    rotation_period: period,
                },
            )
        };
        Self::new(vec![
            planet("mercury", 58_000.0, 2.440, 47.4, 1407.6),
            planet("venus", 108_200.0, 6.052, 35.0, -5832.5),
            planet("earth", 149_600.0, 6.378, 29.8, 23.9),
            planet("mars", 228_000.0, 3.396, 24.1, 24.6),
            planet("jupiter", 778_500.0, 71.492, 13.1, 9.9),
            planet("saturn", 1_432_000.0, 60.268, 9.7, 10.7),
            planet("uranus", 2_867_000.0, 25.559, 6.8, -17.2),
            planet("neptune", 4_515_000.0, 24.764, 5.4, 16.1),
        ])
        .expect("compiled-in planet table is valid")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PlanetSpec)> {
        self.entries.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Exact-name lookup; `None` simply means "no such body".
    pub fn get(&self, name: &str) -> Option<&PlanetSpec> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, spec)| spec)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
