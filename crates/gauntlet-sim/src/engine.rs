//! Encounter engine.
//!
//! `EncounterEngine` owns the hecs ECS world plus all engine-side state,
//! drains host commands at tick boundaries, runs the systems in a fixed
//! order, and hands back a complete snapshot every tick. No wall-clock
//! time anywhere; the host decides how often to call `tick`.

use std::collections::{HashMap, VecDeque};
use std::mem;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use gauntlet_core::commands::Command;
use gauntlet_core::config::{ConfigError, Course, CourseConfig};
use gauntlet_core::constants::{MAX_TIME_SCALE, RIDER_MAX_HEALTH};
use gauntlet_core::enums::{EncounterOutcome, EncounterPhase, RailPhase, ScenarioId};
use gauntlet_core::events::CueEvent;
use gauntlet_core::state::EncounterSnapshot;
use gauntlet_core::types::SimTime;

use crate::encounter::{DoorRuntime, EncounterGroup, RiderState};
use crate::rail::RailScheduler;
use crate::{scenario, systems, world_setup};

/// Configuration for constructing an encounter engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// RNG seed. The same seed and command trace reproduce the same run.
    pub seed: u64,
    /// Initial host pacing hint (1.0 = realtime).
    pub time_scale: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
        }
    }
}

/// The encounter engine. Owns the ECS world and all sim state.
pub struct EncounterEngine {
    world: World,
    time: SimTime,
    phase: EncounterPhase,
    outcome: Option<EncounterOutcome>,
    scenario: Option<ScenarioId>,
    time_scale: f64,
    rng: ChaCha8Rng,
    /// Custom course staged by `load_course`. Every Start uses it until a
    /// scenario selection replaces it.
    loaded_course: Option<Course>,
    /// Course of the running (or last run) encounter.
    course: Option<Course>,
    rail: RailScheduler,
    groups: HashMap<u32, EncounterGroup>,
    doors: Vec<DoorRuntime>,
    rider: RiderState,
    next_unit_id: u32,
    command_queue: VecDeque<Command>,
    cue_events: Vec<CueEvent>,
}

impl EncounterEngine {
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: EncounterPhase::Idle,
            outcome: None,
            scenario: None,
            time_scale: config.time_scale.clamp(0.0, MAX_TIME_SCALE),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            loaded_course: None,
            course: None,
            rail: RailScheduler::new(),
            groups: HashMap::new(),
            doors: Vec::new(),
            rider: RiderState::new(RIDER_MAX_HEALTH),
            next_unit_id: 0,
            command_queue: VecDeque::new(),
            cue_events: Vec::new(),
        }
    }

    /// Queue a host command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: Command) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: Vec<Command>) {
        self.command_queue.extend(commands);
    }

    /// Validate and stage a custom course for the next Start. A running
    /// encounter keeps its own course; loading is refused until it ends.
    pub fn load_course(&mut self, config: CourseConfig) -> Result<(), ConfigError> {
        if matches!(self.phase, EncounterPhase::Active | EncounterPhase::Paused) {
            log::warn!("course load ignored while an encounter is running");
            return Ok(());
        }
        let course = config.build()?;
        self.loaded_course = Some(course);
        self.scenario = None;
        Ok(())
    }

    /// Advance the simulation one tick: drain queued commands, run the
    /// systems if the encounter is active, and build the tick's snapshot.
    pub fn tick(&mut self) -> EncounterSnapshot {
        self.process_commands();

        if self.phase == EncounterPhase::Active {
            self.run_systems();
            self.check_completion();
            self.time.advance();
        }

        let events = mem::take(&mut self.cue_events);
        systems::snapshot::build(
            &self.world,
            &self.time,
            self.phase,
            self.outcome,
            self.scenario,
            &self.rail,
            &self.rider,
            &self.groups,
            &self.doors,
            events,
        )
    }

    pub fn phase(&self) -> EncounterPhase {
        self.phase
    }

    pub fn time(&self) -> &SimTime {
        &self.time
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    #[cfg(test)]
    pub fn rail(&self) -> &RailScheduler {
        &self.rail
    }

    #[cfg(test)]
    pub fn groups(&self) -> &HashMap<u32, EncounterGroup> {
        &self.groups
    }

    #[cfg(test)]
    pub fn rider_state(&self) -> &RiderState {
        &self.rider
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::SelectScenario { scenario } => {
                if matches!(self.phase, EncounterPhase::Idle | EncounterPhase::Complete) {
                    self.scenario = Some(scenario);
                    self.loaded_course = None;
                }
            }
            Command::Start => {
                if matches!(self.phase, EncounterPhase::Idle | EncounterPhase::Complete) {
                    self.start_encounter();
                }
            }
            Command::Pause => {
                if self.phase == EncounterPhase::Active {
                    self.phase = EncounterPhase::Paused;
                }
            }
            Command::Resume => {
                if self.phase == EncounterPhase::Paused {
                    self.phase = EncounterPhase::Active;
                }
            }
            Command::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, MAX_TIME_SCALE);
            }
            Command::Strike {
                unit_id,
                damage,
                region,
            } => {
                if self.phase == EncounterPhase::Active {
                    systems::damage::apply_strike(
                        &mut self.world,
                        &mut self.groups,
                        &mut self.rider,
                        &mut self.cue_events,
                        unit_id,
                        damage,
                        region,
                    );
                }
            }
        }
    }

    fn start_encounter(&mut self) {
        let course = if let Some(course) = &self.loaded_course {
            course.clone()
        } else {
            let scenario = self.scenario.unwrap_or_default();
            self.scenario = Some(scenario);
            match scenario::build_course(scenario, &mut self.rng).build() {
                Ok(course) => course,
                Err(err) => {
                    log::error!("refusing to start, scenario course invalid: {err}");
                    return;
                }
            }
        };

        self.world = World::new();
        self.time = SimTime::default();
        self.outcome = None;
        self.rail = RailScheduler::new();
        self.groups.clear();
        self.next_unit_id = 0;

        self.rider = RiderState::new(course.rider.max_health);
        world_setup::spawn_rider(&mut self.world, &course);

        for group in &course.groups {
            let mut members = Vec::with_capacity(group.units.len());
            for spawn in &group.units {
                let unit_id = self.next_unit_id;
                self.next_unit_id += 1;
                members.push(world_setup::spawn_unit(
                    &mut self.world,
                    spawn,
                    unit_id,
                    group.id,
                ));
            }
            self.groups
                .insert(group.id, EncounterGroup::new(group.id, members));
        }

        self.doors = course.doors.iter().cloned().map(DoorRuntime::new).collect();

        log::info!(
            "encounter started: {} waypoints, {} groups, {} doors",
            course.waypoints.len(),
            course.groups.len(),
            course.doors.len()
        );

        self.course = Some(course);
        self.phase = EncounterPhase::Active;
    }

    fn run_systems(&mut self) {
        let course = match &self.course {
            Some(course) => course,
            None => return,
        };

        // 1. Rail scheduler: arrival, gating, clearance, reorientation
        systems::rail::run(
            &mut self.world,
            &mut self.rail,
            course,
            &mut self.groups,
            &mut self.rider,
            &mut self.cue_events,
        );

        // 2. Doors: triggers, opening delays, slides, rail holds
        systems::door::run(
            &mut self.world,
            &mut self.doors,
            &mut self.rail,
            &mut self.cue_events,
        );

        // 3. Unit FSMs: melee cadence, stagger expiry, attacks on the rider
        systems::unit_ai::run(&mut self.world, &mut self.rider, &mut self.cue_events);

        // 4. Nav integration: move every agent toward its destination
        systems::nav::run(&mut self.world);
    }

    /// End the encounter when the rider goes down or the course finishes.
    /// Rider death wins a same-tick race against course completion.
    fn check_completion(&mut self) {
        let outcome = if self.rider.down {
            EncounterOutcome::RiderDown
        } else if self.rail.phase == RailPhase::Finished {
            EncounterOutcome::Cleared
        } else {
            return;
        };

        self.phase = EncounterPhase::Complete;
        self.outcome = Some(outcome);
        self.cue_events.push(CueEvent::EncounterComplete { outcome });
    }
}

impl Default for EncounterEngine {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}
