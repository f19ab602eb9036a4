//! Host commands sent to the simulation.
//!
//! Commands are queued and drained at the next tick boundary, in arrival
//! order, before any system runs.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All possible host actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    // --- Combat ---
    /// A shot from the external hit-scan layer landed on a unit.
    Strike {
        unit_id: u32,
        damage: f32,
        /// Body region hit, when the shot resolved against a region collider.
        region: Option<HitRegion>,
    },

    // --- Simulation control ---
    /// Set time scale (1.0 = normal, 2.0 = double, 0.0 = paused).
    SetTimeScale { scale: f64 },
    /// Select a built-in course before starting.
    SelectScenario { scenario: ScenarioId },
    /// Start the encounter on the selected course.
    Start,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
