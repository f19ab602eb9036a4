//! Course configuration: the data-driven description of a rail encounter.
//!
//! A [`CourseConfig`] deserializes from JSON, is validated by
//! [`CourseConfig::build`], and becomes the [`Course`] the engine runs.
//! Validation refuses any course whose gating could deadlock, so a broken
//! course never reaches the tick loop.

use std::collections::HashSet;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::RegionMultipliers;
use crate::constants::*;
use crate::enums::UnitArchetype;

/// Course validation failure, raised by [`CourseConfig::build`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("course has no waypoints")]
    EmptyCourse,
    #[error("waypoint {node} is a combat gate but names no group")]
    GateWithoutGroup { node: usize },
    #[error("waypoint {node} references unknown group {group_id}")]
    UnknownGroup { node: usize, group_id: u32 },
    #[error("group {group_id} has no units; its gate could never clear")]
    EmptyGroup { group_id: u32 },
    #[error("group {group_id} is defined more than once")]
    DuplicateGroup { group_id: u32 },
    #[error("group {group_id} is gated by more than one waypoint")]
    GroupReused { group_id: u32 },
}

/// Rider tuning for a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiderConfig {
    /// Spawn position. Waypoint heights are flattened to this height at
    /// build time.
    pub start: Vec3,
    #[serde(default = "default_walk_speed")]
    pub walk_speed: f32,
    #[serde(default = "default_run_speed")]
    pub run_speed: f32,
    #[serde(default = "default_stopping_distance")]
    pub stopping_distance: f32,
    #[serde(default = "default_rotation_duration")]
    pub rotation_duration_secs: f32,
    #[serde(default = "default_max_health")]
    pub max_health: f32,
}

impl Default for RiderConfig {
    fn default() -> Self {
        Self {
            start: Vec3::ZERO,
            walk_speed: RIDER_WALK_SPEED,
            run_speed: RIDER_RUN_SPEED,
            stopping_distance: RIDER_STOPPING_DISTANCE,
            rotation_duration_secs: ROTATION_DURATION_SECS,
            max_health: RIDER_MAX_HEALTH,
        }
    }
}

/// One waypoint along the rail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaypointConfig {
    pub position: Vec3,
    /// Traverse the leg after this waypoint at running speed.
    #[serde(default)]
    pub running_area: bool,
    /// Stop here and release the referenced group before continuing.
    #[serde(default)]
    pub combat_gate: bool,
    /// Skip the turn toward the next waypoint on arrival.
    #[serde(default)]
    pub ignore_rotation: bool,
    /// Group released by this waypoint's gate.
    #[serde(default)]
    pub group_id: Option<u32>,
}

impl WaypointConfig {
    /// Plain waypoint at a position, no gate, default flags.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            running_area: false,
            combat_gate: false,
            ignore_rotation: false,
            group_id: None,
        }
    }

    /// Combat-gate waypoint releasing `group_id`.
    pub fn gate(position: Vec3, group_id: u32) -> Self {
        Self {
            position,
            running_area: false,
            combat_gate: true,
            ignore_rotation: false,
            group_id: Some(group_id),
        }
    }
}

/// A wave of units released together by one combat gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupConfig {
    pub id: u32,
    pub units: Vec<UnitSpawnConfig>,
}

/// One unit placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitSpawnConfig {
    pub archetype: UnitArchetype,
    pub position: Vec3,
    /// Override the archetype's region multipliers for this unit.
    #[serde(default)]
    pub region_multipliers: Option<RegionMultipliers>,
}

/// A sliding door across the rail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoorConfig {
    pub position: Vec3,
    #[serde(default = "default_trigger_radius")]
    pub trigger_radius: f32,
    /// Hold the rider in front of the door until it is fully open.
    #[serde(default)]
    pub stop_rider: bool,
    #[serde(default = "default_slide_secs")]
    pub slide_secs: f32,
}

/// Whole-course description as authored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseConfig {
    #[serde(default)]
    pub rider: RiderConfig,
    pub waypoints: Vec<WaypointConfig>,
    #[serde(default)]
    pub groups: Vec<GroupConfig>,
    #[serde(default)]
    pub doors: Vec<DoorConfig>,
}

impl CourseConfig {
    /// Validate and freeze into a runnable course.
    ///
    /// Refuses any configuration whose gating could deadlock: a combat gate
    /// naming no group, an unknown or empty group, or one group shared by
    /// two gates. A group no gate references is allowed; it simply never
    /// activates.
    pub fn build(self) -> Result<Course, ConfigError> {
        if self.waypoints.is_empty() {
            return Err(ConfigError::EmptyCourse);
        }

        let mut known = HashSet::new();
        for group in &self.groups {
            if !known.insert(group.id) {
                return Err(ConfigError::DuplicateGroup { group_id: group.id });
            }
            if group.units.is_empty() {
                return Err(ConfigError::EmptyGroup { group_id: group.id });
            }
        }

        let mut gated = HashSet::new();
        for (node, wp) in self.waypoints.iter().enumerate() {
            if wp.combat_gate {
                let group_id = wp.group_id.ok_or(ConfigError::GateWithoutGroup { node })?;
                if !known.contains(&group_id) {
                    return Err(ConfigError::UnknownGroup { node, group_id });
                }
                if !gated.insert(group_id) {
                    return Err(ConfigError::GroupReused { group_id });
                }
            }
        }

        // Headings along the rail are horizontal: waypoints ride at the
        // rider's eye height.
        let eye = self.rider.start.y;
        let mut waypoints = self.waypoints;
        for wp in &mut waypoints {
            wp.position.y = eye;
        }

        Ok(Course {
            rider: self.rider,
            waypoints,
            groups: self.groups,
            doors: self.doors,
        })
    }
}

/// A validated, runnable course, produced by [`CourseConfig::build`].
#[derive(Debug, Clone)]
pub struct Course {
    pub rider: RiderConfig,
    pub waypoints: Vec<WaypointConfig>,
    pub groups: Vec<GroupConfig>,
    pub doors: Vec<DoorConfig>,
}

impl Course {
    /// Index of the final waypoint. Courses are never empty.
    pub fn last_node(&self) -> usize {
        self.waypoints.len() - 1
    }
}

fn default_walk_speed() -> f32 {
    RIDER_WALK_SPEED
}

fn default_run_speed() -> f32 {
    RIDER_RUN_SPEED
}

fn default_stopping_distance() -> f32 {
    RIDER_STOPPING_DISTANCE
}

fn default_rotation_duration() -> f32 {
    ROTATION_DURATION_SECS
}

fn default_max_health() -> f32 {
    RIDER_MAX_HEALTH
}

fn default_trigger_radius() -> f32 {
    DOOR_TRIGGER_RADIUS
}

fn default_slide_secs() -> f32 {
    DOOR_SLIDE_SECS
}
