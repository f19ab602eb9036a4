//! Rail traversal scheduler state.
//!
//! Advanced once per tick by `systems::rail::run`. Owns the node pointer,
//! the gating phase, the hold set, and any in-flight reorientation.

use gauntlet_core::components::NavAgent;
use gauntlet_core::enums::RailPhase;

/// Reasons the rider is currently halted. The nav agent resumes only when
/// every hold has been released.
#[derive(Debug, Clone, Copy, Default)]
pub struct Holds {
    /// Held at a combat gate until its wave clears.
    pub combat: bool,
    /// Number of doors currently holding the rider.
    pub doors: u32,
}

impl Holds {
    pub fn any(&self) -> bool {
        self.combat || self.doors > 0
    }
}

/// An in-flight turn toward an upcoming waypoint.
#[derive(Debug, Clone, Copy)]
pub struct Reorientation {
    pub elapsed_secs: f32,
    pub duration_secs: f32,
    /// Waypoint the rider turns to face.
    pub target_node: usize,
}

/// Drives the rider along the course, one waypoint at a time.
#[derive(Debug, Clone)]
pub struct RailScheduler {
    /// Waypoint currently targeted, or gated at.
    pub node_index: usize,
    pub phase: RailPhase,
    pub holds: Holds,
    pub reorientation: Option<Reorientation>,
    /// True while the course runs at walking pace.
    pub walking: bool,
}

impl RailScheduler {
    pub fn new() -> Self {
        Self {
            node_index: 0,
            phase: RailPhase::Advancing,
            holds: Holds::default(),
            reorientation: None,
            walking: true,
        }
    }

    /// Halt the rider for a combat gate.
    pub fn hold_for_combat(&mut self, nav: &mut NavAgent) {
        self.holds.combat = true;
        nav.stop();
    }

    /// Lift the combat hold. The agent resumes only once no door holds the
    /// rider either.
    pub fn release_combat_hold(&mut self, nav: &mut NavAgent) {
        self.holds.combat = false;
        if !self.holds.any() {
            nav.resume();
        }
    }

    /// Halt the rider while a door opens.
    pub fn hold_for_door(&mut self, nav: &mut NavAgent) {
        self.holds.doors += 1;
        nav.stop();
    }

    /// Lift one door hold. The agent resumes only once no hold of any kind
    /// remains.
    pub fn release_door_hold(&mut self, nav: &mut NavAgent) {
        self.holds.doors = self.holds.doors.saturating_sub(1);
        if !self.holds.any() {
            nav.resume();
        }
    }
}

impl Default for RailScheduler {
    fn default() -> Self {
        Self::new()
    }
}
