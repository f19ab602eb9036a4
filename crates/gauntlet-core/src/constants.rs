//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Rail traversal ---

/// Rider speed between ordinary waypoints (m/s).
pub const RIDER_WALK_SPEED: f32 = 5.0;

/// Rider speed after waypoints flagged as running areas (m/s).
pub const RIDER_RUN_SPEED: f32 = 10.0;

/// Arrival radius around a waypoint (meters).
pub const RIDER_STOPPING_DISTANCE: f32 = 0.5;

/// Ticks a nav agent reports path-pending after receiving a destination.
/// Arrival checks treat a pending path as not-arrived, so a freshly
/// retargeted agent cannot pass the arrival test on stale zero velocity.
pub const PATH_PENDING_TICKS: u8 = 1;

// --- Reorientation ---

/// Time to turn the rider toward the next waypoint (seconds).
pub const ROTATION_DURATION_SECS: f32 = 1.0;

// --- Rider vitals ---

/// Rider starting and maximum health.
pub const RIDER_MAX_HEALTH: f32 = 100.0;

// --- Unit baseline (Shambler; other archetypes scale these) ---

/// Baseline unit health.
pub const UNIT_BASE_HEALTH: f32 = 100.0;

/// Baseline unit walk speed (m/s).
pub const UNIT_BASE_SPEED: f32 = 2.0;

/// Distance from the rider at which a unit halts and fights (meters).
pub const UNIT_STOPPING_DISTANCE: f32 = 1.0;

/// Baseline seconds between unit attacks once in reach.
pub const UNIT_ATTACK_INTERVAL_SECS: f32 = 3.0;

/// Baseline swing duration (seconds). The attack timer is frozen while a
/// swing is in progress.
pub const UNIT_SWING_SECS: f32 = 1.2;

/// Baseline damage per landed unit attack.
pub const UNIT_ATTACK_DAMAGE: f32 = 15.0;

/// Baseline score for killing a unit.
pub const UNIT_SCORE_VALUE: u32 = 100;

/// Baseline hit-reaction duration (seconds).
pub const UNIT_STAGGER_SECS: f32 = 2.5;

/// Baseline headshot damage multiplier.
pub const HEADSHOT_MULTIPLIER: f32 = 1.5;

// --- Doors ---

/// Delay between a door trigger firing and the panels moving (seconds).
pub const DOOR_OPEN_DELAY_SECS: f32 = 1.0;

/// Time for door panels to slide fully open (seconds).
pub const DOOR_SLIDE_SECS: f32 = 1.5;

/// Default radius of a door's trigger volume (meters).
pub const DOOR_TRIGGER_RADIUS: f32 = 2.0;

// --- Time scale ---

/// Maximum host time scale.
pub const MAX_TIME_SCALE: f64 = 4.0;
