//! Events emitted by the simulation for audio and presentation feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Cue events for the host's sound and presentation layer.
///
/// Each cue fires on exactly one tick per occurrence; the host plays it and
/// forgets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CueEvent {
    /// Rider arrived at a waypoint.
    NodeReached { node: usize },
    /// Combat gate placed, wave released.
    CombatStarted { node: usize, group_id: u32 },
    /// Every unit in a group has left it. Fires once per group.
    WaveCleared { group_id: u32 },
    /// A unit's attack landed on the rider.
    UnitAttack { unit_id: u32, damage: f32 },
    /// A non-lethal strike staggered a unit.
    UnitStaggered { unit_id: u32 },
    /// A strike killed a unit.
    UnitDown { unit_id: u32, score: u32 },
    /// Door trigger tripped, panels about to move.
    DoorOpening { door: usize },
    /// Door fully open.
    DoorOpened { door: usize },
    /// Rider health reached zero.
    RiderDown,
    /// Encounter over. Fires exactly once.
    EncounterComplete { outcome: EncounterOutcome },
}
