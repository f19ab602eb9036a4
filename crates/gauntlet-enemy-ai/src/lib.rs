//! Enemy unit AI for GAUNTLET.
//!
//! Implements the per-unit behavior state machine and archetype-driven
//! combat profiles.

pub mod fsm;
pub mod profiles;

pub use gauntlet_core as core;
