//! Engine-owned encounter state: wave groups, rider status, door runtime.
//!
//! None of this lives in the ECS world. Groups and doors are bookkeeping
//! over entities, and the rider's non-spatial state (vitals, score,
//! orientation) is singular, so the engine holds them directly.

use glam::{Quat, Vec3};
use hecs::{Entity, World};

use gauntlet_core::components::{NavAgent, Position, UnitAi};
use gauntlet_core::config::DoorConfig;
use gauntlet_core::enums::{DoorPhase, UnitState};
use gauntlet_core::events::CueEvent;

/// One wave of enemy units, released together by a combat gate.
#[derive(Debug, Clone)]
pub struct EncounterGroup {
    pub id: u32,
    /// Members still in the fight. Only ever shrinks.
    pub members: Vec<Entity>,
    /// Set once the gate has released this wave.
    pub activated: bool,
    /// One-shot clearance latch, set when the last member departs.
    pub resume_signaled: bool,
}

impl EncounterGroup {
    pub fn new(id: u32, members: Vec<Entity>) -> Self {
        Self {
            id,
            members,
            activated: false,
            resume_signaled: false,
        }
    }

    /// Release the wave: every member still dormant starts walking toward
    /// the rider. Idempotent; members already dead or staggered by early
    /// strikes are left alone. Destinations keep each unit's own height,
    /// the way a ground agent closes on a mounted target.
    pub fn activate(&mut self, world: &mut World, rider_position: Vec3) {
        if self.activated {
            return;
        }
        self.activated = true;

        for &entity in &self.members {
            if let Ok(mut ai) = world.get::<&mut UnitAi>(entity) {
                if ai.state != UnitState::Idle {
                    continue;
                }
                ai.state = UnitState::Walking;
            } else {
                continue;
            }
            let ground_y = world
                .get::<&Position>(entity)
                .map(|position| position.0.y)
                .unwrap_or(rider_position.y);
            if let Ok(mut nav) = world.get::<&mut NavAgent>(entity) {
                nav.set_destination(Vec3::new(rider_position.x, ground_y, rider_position.z));
            }
        }
    }

    /// Drop a departed (dead) unit from the wave. Unknown entities are a
    /// no-op. The last departure sets the clearance latch and emits
    /// `WaveCleared`, exactly once, whether or not the wave was ever
    /// activated.
    pub fn notify_departure(&mut self, entity: Entity, events: &mut Vec<CueEvent>) {
        match self.members.iter().position(|&member| member == entity) {
            Some(index) => {
                self.members.swap_remove(index);
            }
            None => return,
        }

        if self.members.is_empty() && !self.resume_signaled {
            self.resume_signaled = true;
            events.push(CueEvent::WaveCleared { group_id: self.id });
        }
    }
}

/// The rider's non-spatial state. Position and pathing live on the rider
/// entity; this is everything else the host needs to present.
#[derive(Debug, Clone)]
pub struct RiderState {
    pub health: f32,
    pub max_health: f32,
    pub score: u32,
    /// Body yaw.
    pub rotation: Quat,
    /// Camera pitch, relative to the body.
    pub camera_pitch: Quat,
    /// Whether the host may apply look input this tick.
    pub rotate_input_enabled: bool,
    /// Latched when health reaches zero. Further damage is ignored.
    pub down: bool,
}

impl RiderState {
    pub fn new(max_health: f32) -> Self {
        Self {
            health: max_health,
            max_health,
            score: 0,
            rotation: Quat::IDENTITY,
            camera_pitch: Quat::IDENTITY,
            rotate_input_enabled: true,
            down: false,
        }
    }

    /// Apply incoming damage. Returns true when this hit dropped the rider.
    pub fn receive_damage(&mut self, damage: f32) -> bool {
        if self.down {
            return false;
        }
        self.health -= damage;
        if self.health <= 0.0 {
            self.down = true;
            return true;
        }
        false
    }

    pub fn award_score(&mut self, amount: u32) {
        self.score += amount;
    }
}

/// Runtime state for one course door.
#[derive(Debug, Clone)]
pub struct DoorRuntime {
    pub config: DoorConfig,
    pub phase: DoorPhase,
    /// Remaining opening delay while `Waiting`.
    pub delay_remaining_secs: f32,
    /// Panel slide progress, 0 closed through 1 open.
    pub progress: f32,
    /// This door currently holds the rail.
    pub holding: bool,
}

impl DoorRuntime {
    pub fn new(config: DoorConfig) -> Self {
        Self {
            config,
            phase: DoorPhase::Closed,
            delay_remaining_secs: 0.0,
            progress: 0.0,
            holding: false,
        }
    }
}
