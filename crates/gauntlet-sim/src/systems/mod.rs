//! ECS systems that advance the simulation each tick.
//!
//! Systems are free functions over `&mut World` plus whatever engine-owned
//! state they drive. They hold no state of their own.

pub mod damage;
pub mod door;
pub mod nav;
pub mod rail;
pub mod snapshot;
pub mod unit_ai;
