//! Door progression.
//!
//! Doors trip once when the rider enters their trigger radius, wait through
//! the opening delay, slide open, and never close again. A door flagged
//! `stop_rider` holds the rail while it opens; the hold set on the
//! scheduler decides when the rider actually resumes.

use hecs::World;

use gauntlet_core::components::{NavAgent, Position, Rider};
use gauntlet_core::constants::{DOOR_OPEN_DELAY_SECS, DT};
use gauntlet_core::enums::DoorPhase;
use gauntlet_core::events::CueEvent;
use gauntlet_core::types::flat_distance;

use crate::encounter::DoorRuntime;
use crate::rail::RailScheduler;

pub fn run(
    world: &mut World,
    doors: &mut [DoorRuntime],
    rail: &mut RailScheduler,
    events: &mut Vec<CueEvent>,
) {
    let (rider_entity, rider_position) = match world
        .query::<(&Rider, &Position)>()
        .iter()
        .next()
        .map(|(entity, (_, position))| (entity, position.0))
    {
        Some(found) => found,
        None => return,
    };

    for (index, door) in doors.iter_mut().enumerate() {
        match door.phase {
            DoorPhase::Closed => {
                if flat_distance(rider_position, door.config.position) <= door.config.trigger_radius {
                    if door.config.stop_rider {
                        if let Ok(mut nav) = world.get::<&mut NavAgent>(rider_entity) {
                            rail.hold_for_door(&mut nav);
                        }
                        door.holding = true;
                    }
                    door.phase = DoorPhase::Waiting;
                    door.delay_remaining_secs = DOOR_OPEN_DELAY_SECS;
                }
            }
            DoorPhase::Waiting => {
                door.delay_remaining_secs -= DT;
                if door.delay_remaining_secs <= 0.0 {
                    door.phase = DoorPhase::Opening;
                    door.progress = 0.0;
                    events.push(CueEvent::DoorOpening { door: index });
                }
            }
            DoorPhase::Opening => {
                door.progress += DT / door.config.slide_secs;
                if door.progress >= 1.0 {
                    door.progress = 1.0;
                    door.phase = DoorPhase::Open;
                    if door.holding {
                        door.holding = false;
                        if let Ok(mut nav) = world.get::<&mut NavAgent>(rider_entity) {
                            rail.release_door_hold(&mut nav);
                        }
                    }
                    events.push(CueEvent::DoorOpened { door: index });
                }
            }
            DoorPhase::Open => {}
        }
    }
}
