//! Camera rig: free orbit controls and body-locked follow framing.
//!
//! The rig is a two-state machine. `Free` is a user-driven orbit camera
//! around the scene origin; `Locked` slaves position and orientation to
//! a focused body every frame. Transitions happen only through
//! `focus`/`unfocus` — never implicitly from camera movement.

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};
use bevy::prelude::*;
use bevy::window::WindowResized;

use crate::SimSet;
use crate::body::Planet;
use crate::registry::{PlanetEntry, SolarSystem};

/// Render scale: 1 render unit = 1000 megameters. Keeps the outer system
/// within comfortable f32 range (Neptune orbits at ~4515 render units).
pub const RENDER_SCALE: f64 = 1e-3;

/// Follow distance as a multiple of the focused body's radius.
pub const FOLLOW_DISTANCE_FACTOR: f64 = 5.0;

/// Default free-camera framing: looking down at the system from outside
/// Neptune's orbit.
pub const DEFAULT_ORBIT_DISTANCE: f32 = 6500.0;
pub const DEFAULT_ORBIT_AZIMUTH: f32 = 0.0;
pub const DEFAULT_ORBIT_ELEVATION: f32 = 0.6;

const MIN_ORBIT_DISTANCE: f32 = 40.0;
const MAX_ORBIT_DISTANCE: f32 = 30_000.0;

/// Radians of orbit per pixel of drag.
const ORBIT_SENSITIVITY: f32 = 0.005;

/// Zoom factor per scroll-wheel step.
const ZOOM_SPEED: f32 = 0.1;

/// Elevation clamp, just shy of the poles.
const ELEVATION_LIMIT: f32 = 1.47;

const CAMERA_NEAR: f32 = 0.5;
const CAMERA_FAR: f32 = 60_000.0;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Discriminated camera state. Exactly one is active at any time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CameraState {
    Free,
    Locked { name: String },
}

/// Camera state machine plus the input flag hosts wire their pointer
/// suppression to.
#[derive(Resource)]
pub struct CameraRig {
    state: CameraState,
    /// Whether free-orbit input is honored. Cleared while locked so the
    /// user cannot fight the follow framing.
    pub input_enabled: bool,
    pub follow_distance_factor: f64,
    reframe_pending: bool,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            state: CameraState::Free,
            input_enabled: true,
            follow_distance_factor: FOLLOW_DISTANCE_FACTOR,
            reframe_pending: false,
        }
    }
}

impl CameraRig {
    pub fn state(&self) -> &CameraState {
        &self.state
    }

    /// Name of the locked target, if any.
    pub fn locked_target(&self) -> Option<&str> {
        match &self.state {
            CameraState::Locked { name } => Some(name),
            CameraState::Free => None,
        }
    }

    /// Lock onto `name` if the registry resolves it. Unknown names leave
    /// the rig untouched; re-targeting from an existing lock does not
    /// pass through `Free`. Returns the resolved entry so the caller can
    /// drive dependent UI.
    pub fn focus<'a>(&mut self, system: &'a SolarSystem, name: &str) -> Option<&'a PlanetEntry> {
        let entry = system.find(name)?;
        self.state = CameraState::Locked {
            name: entry.name.clone(),
        };
        self.input_enabled = false;
        self.reframe_pending = false;
        Some(entry)
    }

    /// Return to the free camera and request the default framing. Safe to
    /// call when nothing is focused.
    pub fn unfocus(&mut self) {
        self.state = CameraState::Free;
        self.input_enabled = true;
        self.reframe_pending = true;
    }
}

/// Spherical free-orbit parameters around the scene origin.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct OrbitController {
    pub azimuth: f32,
    pub elevation: f32,
    pub distance: f32,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self {
            azimuth: DEFAULT_ORBIT_AZIMUTH,
            elevation: DEFAULT_ORBIT_ELEVATION,
            distance: DEFAULT_ORBIT_DISTANCE,
        }
    }
}

impl OrbitController {
    pub fn translation(&self) -> Vec3 {
        Vec3::new(
            self.distance * self.elevation.cos() * self.azimuth.sin(),
            self.distance * self.elevation.sin(),
            self.distance * self.elevation.cos() * self.azimuth.cos(),
        )
    }
}

/// The framing restored whenever the rig returns to `Free`.
pub fn default_camera_transform() -> Transform {
    Transform::from_translation(OrbitController::default().translation())
        .looking_at(Vec3::ZERO, Vec3::Y)
}

/// Plugin providing camera setup, input, and per-frame placement.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraRig>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (free_orbit_controls, update_camera)
                    .chain()
                    .in_set(SimSet::Camera),
            )
            .add_systems(Update, log_viewport_resize);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        default_camera_transform(),
        OrbitController::default(),
        MainCamera,
    ));
}

/// Mouse input for the free camera: left drag orbits, scroll zooms.
/// Ignored entirely while the rig has input disabled.
fn free_orbit_controls(
    rig: Res<CameraRig>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut controllers: Query<&mut OrbitController, With<MainCamera>>,
) {
    if !rig.input_enabled {
        return;
    }
    let Ok(mut controller) = controllers.single_mut() else {
        return;
    };

    if mouse_buttons.pressed(MouseButton::Left) && mouse_motion.delta != Vec2::ZERO {
        controller.azimuth -= mouse_motion.delta.x * ORBIT_SENSITIVITY;
        controller.elevation = (controller.elevation + mouse_motion.delta.y * ORBIT_SENSITIVITY)
            .clamp(-ELEVATION_LIMIT, ELEVATION_LIMIT);
    }

    if mouse_scroll.delta.y != 0.0 {
        let factor = 1.0 - mouse_scroll.delta.y * ZOOM_SPEED;
        controller.distance =
            (controller.distance * factor).clamp(MIN_ORBIT_DISTANCE, MAX_ORBIT_DISTANCE);
    }
}

/// Place the camera for this frame.
///
/// Locked: position at the target plus a uniform offset of
/// `radius * follow_distance_factor`, looking at the target. A lock whose
/// body no longer exists degrades to `Free` instead of dereferencing it.
/// Free: position from the orbit controller, applying the default
/// framing first if an unfocus requested it.
pub fn update_camera(
    mut rig: ResMut<CameraRig>,
    system: Res<SolarSystem>,
    mut cameras: Query<(&mut Transform, &mut OrbitController), With<MainCamera>>,
    bodies: Query<&Transform, (With<Planet>, Without<MainCamera>)>,
) {
    let Ok((mut camera_transform, mut controller)) = cameras.single_mut() else {
        return;
    };

    if let Some(name) = rig.locked_target().map(str::to_owned) {
        let target = system
            .find(&name)
            .and_then(|entry| bodies.get(entry.body).ok().map(|t| (entry, t.translation)));
        match target {
            Some((entry, target_position)) => {
                let offset =
                    (entry.spec.radius * rig.follow_distance_factor * RENDER_SCALE) as f32;
                *camera_transform =
                    Transform::from_translation(target_position + Vec3::splat(offset))
                        .looking_at(target_position, Vec3::Y);
                return;
            }
            None => {
                warn!("focused body {name:?} is gone; returning to free camera");
                rig.unfocus();
            }
        }
    }

    if rig.reframe_pending {
        *controller = OrbitController::default();
        rig.reframe_pending = false;
    }
    *camera_transform =
        Transform::from_translation(controller.translation()).looking_at(Vec3::ZERO, Vec3::Y);
}

/// The window backend recomputes the projection aspect and surface size
/// on resize within the same schedule tick; this just records the event.
fn log_viewport_resize(mut resizes: MessageReader<WindowResized>) {
    for resize in resizes.read() {
        debug!(
            "viewport resized to {:.0}x{:.0}",
            resize.width, resize.height
        );
    }
}
