//! Simulation engine for GAUNTLET.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate, and produces
//! EncounterSnapshots for the host. Completely headless (no rendering, no
//! input handling), enabling deterministic testing.

pub mod encounter;
pub mod engine;
pub mod rail;
pub mod scenario;
pub mod systems;
pub mod world_setup;

pub use engine::EncounterEngine;
pub use gauntlet_core as core;
