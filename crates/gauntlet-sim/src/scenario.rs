//! Built-in courses.
//!
//! Each scenario is a hardcoded course config: waypoints, wave groups,
//! unit placements, and doors. Gauntlet scatters its unit placements with
//! the engine RNG, which is the only RNG consumer in the whole sim.

use glam::Vec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gauntlet_core::config::{
    CourseConfig, DoorConfig, GroupConfig, RiderConfig, UnitSpawnConfig, WaypointConfig,
};
use gauntlet_core::enums::{ScenarioId, UnitArchetype};

pub fn build_course(scenario: ScenarioId, rng: &mut ChaCha8Rng) -> CourseConfig {
    match scenario {
        ScenarioId::Training => build_training(),
        ScenarioId::Corridor => build_corridor(),
        ScenarioId::Gauntlet => build_gauntlet(rng),
    }
}

fn unit(archetype: UnitArchetype, x: f32, z: f32) -> UnitSpawnConfig {
    UnitSpawnConfig {
        archetype,
        position: Vec3::new(x, 0.0, z),
        region_multipliers: None,
    }
}

/// Scatter `count` units of one archetype around an anchor point.
fn scatter(
    rng: &mut ChaCha8Rng,
    anchor: Vec3,
    archetype: UnitArchetype,
    count: usize,
) -> Vec<UnitSpawnConfig> {
    (0..count)
        .map(|_| {
            let dx: f32 = rng.gen_range(-3.0..3.0);
            let dz: f32 = rng.gen_range(-2.0..2.0);
            UnitSpawnConfig {
                archetype,
                position: anchor + Vec3::new(dx, 0.0, dz),
                region_multipliers: None,
            }
        })
        .collect()
}

/// Training: three waypoints with one bend and a two-shambler wave at the
/// middle gate.
fn build_training() -> CourseConfig {
    CourseConfig {
        rider: RiderConfig {
            start: Vec3::new(0.0, 1.7, 0.0),
            ..RiderConfig::default()
        },
        waypoints: vec![
            WaypointConfig::at(Vec3::new(0.0, 0.0, 12.0)),
            WaypointConfig::gate(Vec3::new(10.0, 0.0, 22.0), 1),
            WaypointConfig::at(Vec3::new(10.0, 0.0, 40.0)),
        ],
        groups: vec![GroupConfig {
            id: 1,
            units: vec![
                unit(UnitArchetype::Shambler, 8.0, 30.0),
                unit(UnitArchetype::Shambler, 13.0, 30.0),
            ],
        }],
        doors: vec![],
    }
}

/// Corridor: a straight door-gated run with two waves. The second door sits
/// on the first combat gate itself, so its hold overlaps the combat hold
/// and the rider stays put until both lift.
fn build_corridor() -> CourseConfig {
    CourseConfig {
        rider: RiderConfig {
            start: Vec3::new(0.0, 1.7, 0.0),
            ..RiderConfig::default()
        },
        waypoints: vec![
            WaypointConfig::at(Vec3::new(0.0, 0.0, 10.0)),
            WaypointConfig {
                running_area: true,
                ..WaypointConfig::at(Vec3::new(0.0, 0.0, 18.0))
            },
            WaypointConfig::gate(Vec3::new(0.0, 0.0, 30.0), 1),
            WaypointConfig::at(Vec3::new(0.0, 0.0, 44.0)),
            WaypointConfig::gate(Vec3::new(0.0, 0.0, 58.0), 2),
            WaypointConfig::at(Vec3::new(0.0, 0.0, 70.0)),
        ],
        groups: vec![
            GroupConfig {
                id: 1,
                units: vec![
                    unit(UnitArchetype::Shambler, -2.0, 36.0),
                    unit(UnitArchetype::Shambler, 2.0, 36.0),
                    unit(UnitArchetype::Sprinter, 0.0, 40.0),
                ],
            },
            GroupConfig {
                id: 2,
                units: vec![
                    unit(UnitArchetype::Brute, 0.0, 64.0),
                    unit(UnitArchetype::Shambler, -2.0, 62.0),
                    unit(UnitArchetype::Shambler, 2.5, 66.0),
                ],
            },
        ],
        doors: vec![
            DoorConfig {
                position: Vec3::new(0.0, 0.0, 14.0),
                trigger_radius: 2.0,
                stop_rider: false,
                slide_secs: 1.5,
            },
            // Opens onto the first arena. The tight trigger only trips once
            // the rider has settled on the gate's stopping ring.
            DoorConfig {
                position: Vec3::new(0.0, 0.0, 30.0),
                trigger_radius: 0.55,
                stop_rider: true,
                slide_secs: 1.5,
            },
        ],
    }
}

/// Gauntlet: the long mixed course. Three waves, pace changes, a bend the
/// rider crosses without turning, and scattered unit placements.
fn build_gauntlet(rng: &mut ChaCha8Rng) -> CourseConfig {
    let mut group_1 = scatter(rng, Vec3::new(-8.0, 0.0, 34.0), UnitArchetype::Shambler, 3);
    group_1.extend(scatter(
        rng,
        Vec3::new(-12.0, 0.0, 30.0),
        UnitArchetype::Sprinter,
        1,
    ));

    let mut group_2 = scatter(rng, Vec3::new(4.0, 0.0, 60.0), UnitArchetype::Sprinter, 2);
    group_2.push(unit(UnitArchetype::Shambler, 0.0, 58.0));

    let mut group_3 = vec![unit(UnitArchetype::Brute, 16.0, 86.0)];
    group_3.extend(scatter(
        rng,
        Vec3::new(20.0, 0.0, 84.0),
        UnitArchetype::Shambler,
        2,
    ));

    CourseConfig {
        rider: RiderConfig {
            start: Vec3::new(0.0, 1.8, 0.0),
            ..RiderConfig::default()
        },
        waypoints: vec![
            WaypointConfig::at(Vec3::new(0.0, 0.0, 14.0)),
            WaypointConfig::gate(Vec3::new(-8.0, 0.0, 26.0), 1),
            WaypointConfig {
                running_area: true,
                ..WaypointConfig::at(Vec3::new(-8.0, 0.0, 40.0))
            },
            WaypointConfig::gate(Vec3::new(4.0, 0.0, 52.0), 2),
            WaypointConfig {
                ignore_rotation: true,
                ..WaypointConfig::at(Vec3::new(4.0, 0.0, 66.0))
            },
            WaypointConfig::gate(Vec3::new(16.0, 0.0, 78.0), 3),
            WaypointConfig {
                running_area: true,
                ..WaypointConfig::at(Vec3::new(16.0, 0.0, 92.0))
            },
            WaypointConfig::at(Vec3::new(16.0, 0.0, 104.0)),
        ],
        groups: vec![
            GroupConfig { id: 1, units: group_1 },
            GroupConfig { id: 2, units: group_2 },
            GroupConfig { id: 3, units: group_3 },
        ],
        doors: vec![DoorConfig {
            position: Vec3::new(8.0, 0.0, 70.0),
            trigger_radius: 2.5,
            stop_rider: false,
            slide_secs: 2.0,
        }],
    }
}
