//! Rail scheduler system.
//!
//! Polls the rider's nav agent for waypoint arrival, applies the reached
//! waypoint's pace and gating, and drives any in-flight reorientation.
//! Placing a gate ends the tick's scheduler work; the clearance latch is
//! only polled on later ticks, so a pre-cleared wave still holds the rider
//! for at least one tick.

use std::collections::HashMap;

use glam::{Quat, Vec3};
use hecs::{Entity, World};

use gauntlet_core::components::{NavAgent, Position, Rider};
use gauntlet_core::config::Course;
use gauntlet_core::constants::DT;
use gauntlet_core::enums::RailPhase;
use gauntlet_core::events::CueEvent;
use gauntlet_core::types::face_toward;

use crate::encounter::{EncounterGroup, RiderState};
use crate::rail::{RailScheduler, Reorientation};

pub fn run(
    world: &mut World,
    rail: &mut RailScheduler,
    course: &Course,
    groups: &mut HashMap<u32, EncounterGroup>,
    rider: &mut RiderState,
    events: &mut Vec<CueEvent>,
) {
    let (rider_entity, rider_position, nav) = match find_rider(world) {
        Some(found) => found,
        None => return,
    };

    advance_reorientation(rail, course, rider, rider_position);

    match rail.phase {
        RailPhase::Advancing => {
            if arrived(&nav, rider_position) {
                arrive(world, rail, course, groups, rider, events, rider_entity, rider_position);
            }
        }
        RailPhase::Gated => {
            if gate_cleared(rail, course, groups) {
                if let Ok(mut nav) = world.get::<&mut NavAgent>(rider_entity) {
                    rail.release_combat_hold(&mut nav);
                }
                let node = rail.node_index;
                advance_past(world, rail, course, rider_entity, node);
            }
        }
        RailPhase::Finished => {}
    }
}

fn find_rider(world: &World) -> Option<(Entity, Vec3, NavAgent)> {
    world
        .query::<(&Rider, &Position, &NavAgent)>()
        .iter()
        .next()
        .map(|(entity, (_, position, nav))| (entity, position.0, *nav))
}

/// The three-part arrival test. A fresh path is pending for a tick, so the
/// zeroed velocity left over from `set_destination` never passes here.
fn arrived(nav: &NavAgent, from: Vec3) -> bool {
    !nav.is_path_pending()
        && nav.remaining_distance(from) <= nav.stopping_distance
        && (!nav.has_path() || nav.velocity.length_squared() == 0.0)
}

#[allow(clippy::too_many_arguments)]
fn arrive(
    world: &mut World,
    rail: &mut RailScheduler,
    course: &Course,
    groups: &mut HashMap<u32, EncounterGroup>,
    rider: &mut RiderState,
    events: &mut Vec<CueEvent>,
    rider_entity: Entity,
    rider_position: Vec3,
) {
    let node = rail.node_index;
    let waypoint = &course.waypoints[node];
    events.push(CueEvent::NodeReached { node });

    // The reached waypoint sets the pace for the next leg.
    rail.walking = !waypoint.running_area;
    let speed = if rail.walking {
        course.rider.walk_speed
    } else {
        course.rider.run_speed
    };
    if let Ok(mut nav) = world.get::<&mut NavAgent>(rider_entity) {
        nav.speed = speed;
    }

    // Turn toward the next waypoint. Runs alongside gating and movement,
    // and never blocks advancement. A turn already in flight is replaced.
    if node < course.last_node() && !waypoint.ignore_rotation {
        rail.reorientation = Some(Reorientation {
            elapsed_secs: 0.0,
            duration_secs: course.rider.rotation_duration_secs,
            target_node: node + 1,
        });
        rider.rotate_input_enabled = false;
    }

    if waypoint.combat_gate {
        rail.phase = RailPhase::Gated;
        if let Ok(mut nav) = world.get::<&mut NavAgent>(rider_entity) {
            rail.hold_for_combat(&mut nav);
        }
        if let Some(group_id) = waypoint.group_id {
            events.push(CueEvent::CombatStarted { node, group_id });
            if let Some(group) = groups.get_mut(&group_id) {
                group.activate(world, rider_position);
            }
        }
        return;
    }

    advance_past(world, rail, course, rider_entity, node);
}

/// Step past `node`: finish the course at the last waypoint, otherwise
/// target the next one.
fn advance_past(
    world: &mut World,
    rail: &mut RailScheduler,
    course: &Course,
    rider_entity: Entity,
    node: usize,
) {
    if node >= course.last_node() {
        rail.phase = RailPhase::Finished;
        return;
    }

    rail.node_index = node + 1;
    rail.phase = RailPhase::Advancing;
    if let Ok(mut nav) = world.get::<&mut NavAgent>(rider_entity) {
        nav.set_destination(course.waypoints[rail.node_index].position);
    }
}

fn gate_cleared(rail: &RailScheduler, course: &Course, groups: &HashMap<u32, EncounterGroup>) -> bool {
    // Course validation refuses gates without a group.
    match course.waypoints[rail.node_index].group_id {
        Some(group_id) => groups
            .get(&group_id)
            .is_some_and(|group| group.resume_signaled),
        None => true,
    }
}

/// Advance an in-flight turn. The target heading is recomputed from the
/// rider's current position every tick, and the final tick assigns it
/// outright, leaving zero residual error. Look input comes back exactly
/// once, at completion.
fn advance_reorientation(
    rail: &mut RailScheduler,
    course: &Course,
    rider: &mut RiderState,
    rider_position: Vec3,
) {
    let mut turn = match rail.reorientation {
        Some(turn) => turn,
        None => return,
    };

    turn.elapsed_secs += DT;
    let target = face_toward(rider_position, course.waypoints[turn.target_node].position);

    if turn.elapsed_secs >= turn.duration_secs {
        rider.rotation = target;
        rider.camera_pitch = Quat::IDENTITY;
        rider.rotate_input_enabled = true;
        rail.reorientation = None;
        return;
    }

    let factor = turn.elapsed_secs / turn.duration_secs;
    rider.rotation = rider.rotation.slerp(target, factor);
    rider.camera_pitch = rider.camera_pitch.slerp(Quat::IDENTITY, factor);
    rail.reorientation = Some(turn);
}
