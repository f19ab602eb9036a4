//! Entity spawn factories for populating the encounter world.

use hecs::{Entity, World};

use gauntlet_core::components::{
    CombatStats, GroupMember, Health, NavAgent, Position, Rider, Unit, UnitAi, UnitTag,
};
use gauntlet_core::config::{Course, UnitSpawnConfig};
use gauntlet_core::enums::UnitState;
use gauntlet_enemy_ai::profiles::get_profile;

/// Spawn the rider at the course start, already targeting the first
/// waypoint.
pub fn spawn_rider(world: &mut World, course: &Course) -> Entity {
    let mut nav = NavAgent::new(course.rider.walk_speed, course.rider.stopping_distance);
    nav.set_destination(course.waypoints[0].position);

    world.spawn((Rider, Position(course.rider.start), nav))
}

/// Spawn one enemy unit from its placement config, dormant until its group
/// activates. The attack timer starts full, so the first swing lands a
/// whole interval after the unit reaches the rider.
pub fn spawn_unit(
    world: &mut World,
    spawn: &UnitSpawnConfig,
    unit_id: u32,
    group_id: u32,
) -> Entity {
    let profile = get_profile(spawn.archetype);

    let ai = UnitAi {
        archetype: spawn.archetype,
        state: UnitState::Idle,
        attack_timer_secs: profile.attack_interval_secs,
        swing_remaining_secs: 0.0,
        stagger_remaining_secs: 0.0,
    };

    let stats = CombatStats {
        damage_per_hit: profile.damage_per_hit,
        attack_interval_secs: profile.attack_interval_secs,
        swing_secs: profile.swing_secs,
        score_value: profile.score_value,
        stagger_enabled: profile.stagger_enabled,
        stagger_secs: profile.stagger_secs,
        region_multipliers: spawn
            .region_multipliers
            .unwrap_or(profile.region_multipliers),
    };

    world.spawn((
        Unit,
        UnitTag { unit_id },
        GroupMember { group_id },
        Position(spawn.position),
        NavAgent::new(profile.speed, profile.stopping_distance),
        Health::new(profile.health),
        ai,
        stats,
    ))
}
