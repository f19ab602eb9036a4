//! Snapshot system: reads the world and engine state into a complete
//! EncounterSnapshot for the host. Never modifies anything.

use std::collections::HashMap;

use hecs::World;

use gauntlet_core::components::{Health, NavAgent, Position, Rider, Unit, UnitAi, UnitTag};
use gauntlet_core::enums::{EncounterOutcome, EncounterPhase, ScenarioId};
use gauntlet_core::events::CueEvent;
use gauntlet_core::state::{
    DoorView, EncounterSnapshot, GroupView, RailView, RiderView, UnitView,
};
use gauntlet_core::types::SimTime;

use crate::encounter::{DoorRuntime, EncounterGroup, RiderState};
use crate::rail::RailScheduler;

#[allow(clippy::too_many_arguments)]
pub fn build(
    world: &World,
    time: &SimTime,
    phase: EncounterPhase,
    outcome: Option<EncounterOutcome>,
    scenario: Option<ScenarioId>,
    rail: &RailScheduler,
    rider: &RiderState,
    groups: &HashMap<u32, EncounterGroup>,
    doors: &[DoorRuntime],
    events: Vec<CueEvent>,
) -> EncounterSnapshot {
    EncounterSnapshot {
        time: *time,
        phase,
        outcome,
        scenario,
        rail: build_rail(rail),
        rider: build_rider(world, rider),
        units: build_units(world),
        groups: build_groups(groups),
        doors: build_doors(doors),
        events,
    }
}

fn build_rail(rail: &RailScheduler) -> RailView {
    RailView {
        node_index: rail.node_index,
        phase: rail.phase,
        is_walking: rail.walking,
        reorienting: rail.reorientation.is_some(),
    }
}

fn build_rider(world: &World, rider: &RiderState) -> RiderView {
    let position = world
        .query::<(&Rider, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, position))| position.0)
        .unwrap_or_default();

    RiderView {
        position,
        rotation: rider.rotation,
        camera_pitch: rider.camera_pitch,
        health: rider.health,
        max_health: rider.max_health,
        score: rider.score,
        rotate_input_enabled: rider.rotate_input_enabled,
    }
}

fn build_units(world: &World) -> Vec<UnitView> {
    let mut units: Vec<UnitView> = world
        .query::<(&Unit, &UnitTag, &UnitAi, &Position, &Health, &NavAgent)>()
        .iter()
        .map(|(_, (_, tag, ai, position, health, nav))| UnitView {
            unit_id: tag.unit_id,
            archetype: ai.archetype,
            state: ai.state,
            position: position.0,
            health: health.current,
            speed: nav.velocity.length(),
        })
        .collect();

    units.sort_by_key(|unit| unit.unit_id);
    units
}

fn build_groups(groups: &HashMap<u32, EncounterGroup>) -> Vec<GroupView> {
    let mut views: Vec<GroupView> = groups
        .values()
        .map(|group| GroupView {
            group_id: group.id,
            remaining: group.members.len(),
            activated: group.activated,
            cleared: group.resume_signaled,
        })
        .collect();

    views.sort_by_key(|view| view.group_id);
    views
}

fn build_doors(doors: &[DoorRuntime]) -> Vec<DoorView> {
    doors
        .iter()
        .enumerate()
        .map(|(index, door)| DoorView {
            door: index,
            phase: door.phase,
            progress: door.progress,
        })
        .collect()
}
