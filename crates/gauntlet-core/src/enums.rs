//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy unit lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitState {
    /// Dormant until the owning group is activated.
    #[default]
    Idle,
    /// Closing on the rider.
    Walking,
    /// In reach, running the attack timer.
    Attacking,
    /// Hit reaction in progress, locomotion suspended.
    Staggered,
    /// Terminal. A dead unit never transitions again.
    Dead,
}

/// Enemy archetype category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitArchetype {
    /// Baseline walker.
    Shambler,
    /// Fast and fragile, short attack cycle.
    Sprinter,
    /// Slow heavy hitter, immune to stagger.
    Brute,
}

/// Rail traversal phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RailPhase {
    /// Heading toward the current destination waypoint.
    #[default]
    Advancing,
    /// Held at a combat waypoint until its wave clears.
    Gated,
    /// Final waypoint reached, traversal over.
    Finished,
}

/// Encounter phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterPhase {
    /// No course running. Commands other than scenario selection are ignored.
    #[default]
    Idle,
    Active,
    Paused,
    /// Encounter over, see [`EncounterOutcome`].
    Complete,
}

/// How a completed encounter ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterOutcome {
    /// Rider reached the final waypoint.
    Cleared,
    /// Rider health reached zero.
    RiderDown,
}

/// Body region resolved by the external hit-scan layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HitRegion {
    Head,
    Torso,
    Limb,
}

/// Door opening phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DoorPhase {
    #[default]
    Closed,
    /// Triggered, holding shut through the opening delay.
    Waiting,
    /// Panels sliding apart.
    Opening,
    Open,
}

/// Built-in demo course.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioId {
    /// Short straight course with a single combat waypoint.
    #[default]
    Training,
    /// Door-gated corridor with two waves.
    Corridor,
    /// Long course, mixed archetypes, scattered spawns.
    Gauntlet,
}
