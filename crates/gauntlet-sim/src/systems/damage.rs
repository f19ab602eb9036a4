//! Strike application.
//!
//! Runs when Strike commands drain at the tick boundary, not as a per-tick
//! system. Death is terminal and wins every race: the score award, the
//! group departure, and the down cue each fire exactly once, and stagger
//! only applies to units that survive the hit.

use std::collections::HashMap;

use hecs::{Entity, World};

use gauntlet_core::components::{CombatStats, GroupMember, Health, NavAgent, UnitAi, UnitTag};
use gauntlet_core::enums::{HitRegion, UnitState};
use gauntlet_core::events::CueEvent;

use crate::encounter::{EncounterGroup, RiderState};

/// Apply one strike from the host's hit-scan layer. Strikes addressing an
/// unknown unit are ignored.
pub fn apply_strike(
    world: &mut World,
    groups: &mut HashMap<u32, EncounterGroup>,
    rider: &mut RiderState,
    events: &mut Vec<CueEvent>,
    unit_id: u32,
    damage: f32,
    region: Option<HitRegion>,
) {
    let entity = match find_unit(world, unit_id) {
        Some(entity) => entity,
        None => return,
    };
    apply_damage(world, groups, rider, events, entity, damage, region);
}

fn find_unit(world: &World, unit_id: u32) -> Option<Entity> {
    world
        .query::<&UnitTag>()
        .iter()
        .find(|(_, tag)| tag.unit_id == unit_id)
        .map(|(entity, _)| entity)
}

pub fn apply_damage(
    world: &mut World,
    groups: &mut HashMap<u32, EncounterGroup>,
    rider: &mut RiderState,
    events: &mut Vec<CueEvent>,
    entity: Entity,
    damage: f32,
    region: Option<HitRegion>,
) {
    let (ai, health, stats, nav, tag, member) = match world.query_one_mut::<(
        &mut UnitAi,
        &mut Health,
        &CombatStats,
        &mut NavAgent,
        &UnitTag,
        &GroupMember,
    )>(entity)
    {
        Ok(parts) => parts,
        Err(_) => return,
    };

    // Dead units absorb strikes without effect.
    if ai.state == UnitState::Dead {
        return;
    }

    health.current -= damage * stats.region_multipliers.factor(region);

    if health.current <= 0.0 {
        ai.state = UnitState::Dead;
        nav.disable();
        rider.award_score(stats.score_value);
        events.push(CueEvent::UnitDown {
            unit_id: tag.unit_id,
            score: stats.score_value,
        });
        if let Some(group) = groups.get_mut(&member.group_id) {
            group.notify_departure(entity, events);
        }
        return;
    }

    // Survivors flinch, unless the archetype is stagger-immune or a
    // countdown is already running. A running countdown never restarts.
    if stats.stagger_enabled && ai.state != UnitState::Staggered {
        ai.state = UnitState::Staggered;
        ai.stagger_remaining_secs = stats.stagger_secs;
        ai.swing_remaining_secs = 0.0;
        nav.stop();
        events.push(CueEvent::UnitStaggered {
            unit_id: tag.unit_id,
        });
    }
}
