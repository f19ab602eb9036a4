//! Encounter snapshot: the complete visible state sent to the host each tick.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::CueEvent;
use crate::types::SimTime;

/// Complete encounter state broadcast to the host after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncounterSnapshot {
    pub time: SimTime,
    pub phase: EncounterPhase,
    pub outcome: Option<EncounterOutcome>,
    pub scenario: Option<ScenarioId>,
    pub rail: RailView,
    pub rider: RiderView,
    pub units: Vec<UnitView>,
    pub groups: Vec<GroupView>,
    pub doors: Vec<DoorView>,
    pub events: Vec<CueEvent>,
}

/// Rail scheduler status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RailView {
    /// Waypoint currently targeted, or gated at.
    pub node_index: usize,
    pub phase: RailPhase,
    /// True while traversal runs at walking pace.
    pub is_walking: bool,
    /// True while a turn toward the next waypoint is in progress.
    pub reorienting: bool,
}

/// Rider status for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RiderView {
    pub position: Vec3,
    /// Body yaw rotation.
    pub rotation: Quat,
    /// Camera pitch relative to the body.
    pub camera_pitch: Quat,
    pub health: f32,
    pub max_health: f32,
    pub score: u32,
    /// Whether the host should feed look input to the rider right now.
    pub rotate_input_enabled: bool,
}

/// A visible enemy unit. Dead units stay in the list so the host can keep
/// rendering the corpse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitView {
    pub unit_id: u32,
    pub archetype: UnitArchetype,
    pub state: UnitState,
    pub position: Vec3,
    pub health: f32,
    /// Locomotion speed this tick (m/s), drives the walk animation blend.
    pub speed: f32,
}

/// Wave status for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupView {
    pub group_id: u32,
    /// Units still alive in the group.
    pub remaining: usize,
    pub activated: bool,
    /// One-shot clearance latch state.
    pub cleared: bool,
}

/// Door status for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoorView {
    pub door: usize,
    pub phase: DoorPhase,
    /// Panel slide progress, 0 closed to 1 open.
    pub progress: f32,
}
