//! Simulation clock driving the per-frame kinematics.

use bevy::prelude::*;

use crate::SimSet;

/// Plugin advancing the simulation clock once per frame.
pub struct ClockPlugin;

impl Plugin for ClockPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationClock>()
            .add_systems(Update, advance_clock.in_set(SimSet::Clock));
    }
}

/// Elapsed/delta simulated seconds since scene start.
///
/// `elapsed` drives orbital phase and never decreases. `delta` is the
/// last frame's increment (zero while paused) and drives spin
/// accumulation.
#[derive(Resource, Clone, Debug)]
pub struct SimulationClock {
    pub elapsed: f64,
    pub delta: f64,
    /// Simulated seconds per real second.
    pub scale: f64,
    pub paused: bool,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            delta: 0.0,
            scale: 1.0,
            paused: false,
        }
    }
}

impl SimulationClock {
    /// Advance by one frame's real-time delta.
    pub fn tick(&mut self, real_delta: f64) {
        if self.paused {
            self.delta = 0.0;
            return;
        }
        let dt = real_delta * self.scale;
        self.delta = dt;
        self.elapsed += dt;
    }
}

fn advance_clock(mut clock: ResMut<SimulationClock>, time: Res<Time>) {
    let dt = time.delta_secs_f64();
    clock.tick(dt);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_accumulates_scaled_time() {
        let mut clock = SimulationClock::default();
        clock.scale = 2.0;
        clock.tick(0.5);
        clock.tick(0.25);
        assert_eq!(clock.elapsed, 1.5);
        assert_eq!(clock.delta, 0.5);
    }

    #[test]
    fn elapsed_never_decreases() {
        let mut clock = SimulationClock::default();
        let mut previous = clock.elapsed;
        for _ in 0..100 {
            clock.tick(0.016);
            assert!(clock.elapsed >= previous);
            previous = clock.elapsed;
        }
    }

    #[test]
    fn pausing_freezes_elapsed_and_zeroes_delta() {
        let mut clock = SimulationClock::default();
        clock.tick(1.0);
        let frozen = clock.elapsed;

        clock.paused = true;
        clock.tick(1.0);
        clock.tick(1.0);
        assert_eq!(clock.elapsed, frozen);
        assert_eq!(clock.delta, 0.0);

        clock.paused = false;
        clock.tick(1.0);
        assert_eq!(clock.elapsed, frozen + 1.0);
    }
}
