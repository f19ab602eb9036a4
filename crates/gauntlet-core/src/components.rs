//! ECS components for hecs entities.
//!
//! Components carry plain state plus small transition helpers; per-tick
//! behavior lives in systems.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::PATH_PENDING_TICKS;
use crate::enums::*;

/// World-space position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(pub Vec3);

/// Kinematic navigation agent, attached to the rider and to enemy units.
///
/// Stands in for the external path-following capability: straight-line
/// steering toward a destination, with a one-tick path computation latency
/// after each [`NavAgent::set_destination`]. Callers observe path-pending,
/// remaining distance, path presence, and last-tick velocity; the movement
/// system owns the actual integration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NavAgent {
    /// Current destination. Cleared when the path completes.
    pub destination: Option<Vec3>,
    /// Commanded speed (m/s).
    pub speed: f32,
    /// Radius around the destination inside which the agent halts (meters).
    pub stopping_distance: f32,
    /// Manual halt. A stopped agent keeps its path but does not move.
    pub stopped: bool,
    /// Agent switched off entirely (dead units). Never re-enabled.
    pub enabled: bool,
    /// Ticks remaining before the requested path is ready.
    pub path_pending_ticks: u8,
    /// Velocity applied last tick (m/s). Zero while pending, stopped, or
    /// arrived.
    pub velocity: Vec3,
}

impl NavAgent {
    pub fn new(speed: f32, stopping_distance: f32) -> Self {
        Self {
            destination: None,
            speed,
            stopping_distance,
            stopped: false,
            enabled: true,
            path_pending_ticks: 0,
            velocity: Vec3::ZERO,
        }
    }

    /// Request a new path. The agent reports path-pending and zero velocity
    /// until the movement system consumes the latency.
    pub fn set_destination(&mut self, point: Vec3) {
        self.destination = Some(point);
        self.path_pending_ticks = PATH_PENDING_TICKS;
        self.velocity = Vec3::ZERO;
    }

    /// Halt in place without discarding the current path.
    pub fn stop(&mut self) {
        self.stopped = true;
        self.velocity = Vec3::ZERO;
    }

    /// Lift a manual halt.
    pub fn resume(&mut self) {
        self.stopped = false;
    }

    /// Switch the agent off permanently.
    pub fn disable(&mut self) {
        self.enabled = false;
        self.velocity = Vec3::ZERO;
    }

    pub fn is_path_pending(&self) -> bool {
        self.path_pending_ticks > 0
    }

    pub fn has_path(&self) -> bool {
        self.destination.is_some()
    }

    /// Straight-line distance left to the destination. Zero with no path.
    pub fn remaining_distance(&self, from: Vec3) -> f32 {
        match self.destination {
            Some(dest) => (dest - from).length(),
            None => 0.0,
        }
    }
}

/// Vitality pool for enemy units. The rider's pool lives in the engine's
/// rider state, not on the entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }
}

/// Enemy unit behavior state and timers, advanced by the unit FSM each tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UnitAi {
    pub archetype: UnitArchetype,
    pub state: UnitState,
    /// Countdown to the next attack (seconds). Frozen during a swing.
    pub attack_timer_secs: f32,
    /// Remaining swing time. While positive, the attack timer does not run.
    pub swing_remaining_secs: f32,
    /// Remaining hit-reaction time while staggered.
    pub stagger_remaining_secs: f32,
}

/// Combat tuning for one unit, fixed at spawn from its archetype profile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CombatStats {
    /// Damage dealt to the rider per landed attack.
    pub damage_per_hit: f32,
    /// Seconds between attacks once in reach.
    pub attack_interval_secs: f32,
    /// Swing duration in seconds.
    pub swing_secs: f32,
    /// Score awarded for the kill.
    pub score_value: u32,
    /// Whether non-lethal hits stagger this unit.
    pub stagger_enabled: bool,
    /// Hit-reaction duration in seconds.
    pub stagger_secs: f32,
    /// Per-region scaling for incoming strikes.
    pub region_multipliers: RegionMultipliers,
}

/// Damage multipliers by body region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionMultipliers {
    pub head: f32,
    pub torso: f32,
    pub limb: f32,
}

impl Default for RegionMultipliers {
    fn default() -> Self {
        Self {
            head: 1.0,
            torso: 1.0,
            limb: 1.0,
        }
    }
}

impl RegionMultipliers {
    /// Multiplier for a strike. Strikes without region data scale by 1.0.
    pub fn factor(&self, region: Option<HitRegion>) -> f32 {
        match region {
            Some(HitRegion::Head) => self.head,
            Some(HitRegion::Torso) => self.torso,
            Some(HitRegion::Limb) => self.limb,
            None => 1.0,
        }
    }
}

/// Stable external identifier for an enemy unit. Strike commands address
/// units by this id, never by entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitTag {
    pub unit_id: u32,
}

/// Wave membership. A unit belongs to exactly one encounter group.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GroupMember {
    pub group_id: u32,
}

/// Marks the rider entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rider;

/// Marks an enemy unit entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Unit;
