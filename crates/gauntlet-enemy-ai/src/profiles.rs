//! Archetype-specific combat profiles.
//!
//! Consolidates per-archetype tuning consumed at spawn time and by the
//! unit FSM.

use gauntlet_core::components::RegionMultipliers;
use gauntlet_core::enums::UnitArchetype;

/// Combat profile for a unit archetype.
pub struct UnitProfile {
    /// Health pool.
    pub health: f32,
    /// Walk speed (m/s).
    pub speed: f32,
    /// Distance from the rider at which the unit halts and fights (m).
    pub stopping_distance: f32,
    /// Seconds between attacks once in reach.
    pub attack_interval_secs: f32,
    /// Swing duration (seconds).
    pub swing_secs: f32,
    /// Damage dealt to the rider per landed attack.
    pub damage_per_hit: f32,
    /// Score awarded for the kill.
    pub score_value: u32,
    /// Whether non-lethal hits stagger this archetype.
    pub stagger_enabled: bool,
    /// Hit-reaction duration (seconds), unused when stagger is disabled.
    pub stagger_secs: f32,
    /// Per-region damage scaling.
    pub region_multipliers: RegionMultipliers,
}

/// Get the combat profile for a given archetype.
pub fn get_profile(archetype: UnitArchetype) -> UnitProfile {
    use gauntlet_core::constants::*;

    match archetype {
        UnitArchetype::Shambler => UnitProfile {
            health: UNIT_BASE_HEALTH,
            speed: UNIT_BASE_SPEED,
            stopping_distance: UNIT_STOPPING_DISTANCE,
            attack_interval_secs: UNIT_ATTACK_INTERVAL_SECS,
            swing_secs: UNIT_SWING_SECS,
            damage_per_hit: UNIT_ATTACK_DAMAGE,
            score_value: UNIT_SCORE_VALUE,
            stagger_enabled: true,
            stagger_secs: UNIT_STAGGER_SECS,
            region_multipliers: RegionMultipliers {
                head: HEADSHOT_MULTIPLIER,
                ..RegionMultipliers::default()
            },
        },
        UnitArchetype::Sprinter => UnitProfile {
            health: UNIT_BASE_HEALTH * 0.6,
            speed: UNIT_BASE_SPEED * 2.5,
            stopping_distance: UNIT_STOPPING_DISTANCE,
            attack_interval_secs: UNIT_ATTACK_INTERVAL_SECS * 0.5,
            swing_secs: UNIT_SWING_SECS * 0.75,
            damage_per_hit: UNIT_ATTACK_DAMAGE * 0.6,
            score_value: 150,
            stagger_enabled: true,
            stagger_secs: UNIT_STAGGER_SECS * 0.8,
            region_multipliers: RegionMultipliers {
                head: HEADSHOT_MULTIPLIER,
                ..RegionMultipliers::default()
            },
        },
        UnitArchetype::Brute => UnitProfile {
            health: UNIT_BASE_HEALTH * 2.5,
            speed: UNIT_BASE_SPEED * 0.6,
            stopping_distance: UNIT_STOPPING_DISTANCE * 1.5,
            attack_interval_secs: UNIT_ATTACK_INTERVAL_SECS * 1.5,
            swing_secs: UNIT_SWING_SECS * 1.5,
            damage_per_hit: UNIT_ATTACK_DAMAGE * 2.0,
            score_value: 250,
            stagger_enabled: false, // too heavy to flinch
            stagger_secs: 0.0,
            region_multipliers: RegionMultipliers {
                head: HEADSHOT_MULTIPLIER,
                torso: 1.0,
                limb: 0.5, // armored limbs
            },
        },
    }
}
