//! Fundamental simulation types and heading math.
//!
//! Simulation space is right-handed with y up: x = East, z = North.
//! Headings are rotations about +y, matching the flat courses the rail runs
//! through.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / crate::constants::TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

/// Yaw rotation that faces `to` when standing at `from`.
///
/// Height difference is ignored: waypoint heights are flattened to the
/// rider's eye height at course build, so facing is purely a yaw.
/// Returns identity when the two points stack vertically.
pub fn face_toward(from: Vec3, to: Vec3) -> Quat {
    let d = to - from;
    if d.x == 0.0 && d.z == 0.0 {
        return Quat::IDENTITY;
    }
    Quat::from_rotation_y(d.x.atan2(d.z))
}

/// Horizontal (xz-plane) distance between two points.
pub fn flat_distance(a: Vec3, b: Vec3) -> f32 {
    let dx = b.x - a.x;
    let dz = b.z - a.z;
    (dx * dx + dz * dz).sqrt()
}
