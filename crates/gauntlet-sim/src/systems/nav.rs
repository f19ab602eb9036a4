//! Nav agent integration.
//!
//! Steers every enabled agent straight toward its destination at its
//! commanded speed, landing on the stopping ring rather than overshooting.
//! The first tick after a destination is set only consumes the path-pending
//! latency, so a stale zero velocity can never read as an arrival.

use glam::Vec3;
use hecs::World;

use gauntlet_core::components::{NavAgent, Position};
use gauntlet_core::constants::DT;

pub fn run(world: &mut World) {
    for (_entity, (position, nav)) in world.query_mut::<(&mut Position, &mut NavAgent)>() {
        if !nav.enabled || nav.stopped {
            continue;
        }

        if nav.is_path_pending() {
            nav.path_pending_ticks -= 1;
            nav.velocity = Vec3::ZERO;
            continue;
        }

        let destination = match nav.destination {
            Some(destination) => destination,
            None => {
                nav.velocity = Vec3::ZERO;
                continue;
            }
        };

        let offset = destination - position.0;
        let distance = offset.length();
        if distance <= nav.stopping_distance {
            nav.destination = None;
            nav.velocity = Vec3::ZERO;
            continue;
        }

        let direction = offset / distance;
        let step = nav.speed * DT;
        if step >= distance - nav.stopping_distance {
            // Land exactly on the stopping ring.
            position.0 += direction * (distance - nav.stopping_distance);
            nav.destination = None;
            nav.velocity = Vec3::ZERO;
        } else {
            position.0 += direction * step;
            nav.velocity = direction * nav.speed;
        }
    }
}
