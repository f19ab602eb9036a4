//! Unit AI system.
//!
//! Feeds every unit's state and motion into the FSM from gauntlet-enemy-ai,
//! writes the verdict back, lands triggered attacks on the rider, and lifts
//! nav halts when staggers expire.

use hecs::World;

use gauntlet_core::components::{CombatStats, NavAgent, Unit, UnitAi, UnitTag};
use gauntlet_core::constants::DT;
use gauntlet_core::events::CueEvent;
use gauntlet_enemy_ai::fsm::{evaluate, UnitContext};

use crate::encounter::RiderState;

pub fn run(world: &mut World, rider: &mut RiderState, events: &mut Vec<CueEvent>) {
    for (_entity, (_unit, tag, ai, stats, nav)) in
        world.query_mut::<(&Unit, &UnitTag, &mut UnitAi, &CombatStats, &mut NavAgent)>()
    {
        let context = UnitContext {
            state: ai.state,
            velocity: nav.velocity,
            attack_timer_secs: ai.attack_timer_secs,
            swing_remaining_secs: ai.swing_remaining_secs,
            stagger_remaining_secs: ai.stagger_remaining_secs,
            attack_interval_secs: stats.attack_interval_secs,
            swing_secs: stats.swing_secs,
            dt: DT,
        };

        let update = evaluate(&context);
        ai.state = update.new_state;
        ai.attack_timer_secs = update.attack_timer_secs;
        ai.swing_remaining_secs = update.swing_remaining_secs;
        ai.stagger_remaining_secs = update.stagger_remaining_secs;

        if update.resume_locomotion {
            nav.resume();
        }

        // Attacks on a downed rider land on nothing; the completion check
        // at the end of the tick ends the encounter.
        if update.attack_triggered && !rider.down {
            events.push(CueEvent::UnitAttack {
                unit_id: tag.unit_id,
                damage: stats.damage_per_hit,
            });
            if rider.receive_damage(stats.damage_per_hit) {
                events.push(CueEvent::RiderDown);
            }
        }
    }
}
