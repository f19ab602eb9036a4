//! Unit behavior finite state machine.
//!
//! Pure functions that compute state transitions and timer updates for
//! enemy units based on their current state and nav telemetry. No ECS
//! dependency; operates on plain data.
//!
//! The FSM owns only the tick-driven transitions. Event-driven transitions
//! (stagger and death on incoming strikes) are applied by the damage path
//! in the sim, which writes the unit's state directly.

use glam::Vec3;

use gauntlet_core::enums::UnitState;

/// Input to the unit FSM for a single entity.
pub struct UnitContext {
    pub state: UnitState,
    /// Nav agent velocity applied last tick.
    pub velocity: Vec3,
    /// Countdown to the next attack (seconds).
    pub attack_timer_secs: f32,
    /// Remaining swing time. While positive, the attack timer holds.
    pub swing_remaining_secs: f32,
    /// Remaining hit-reaction time while staggered.
    pub stagger_remaining_secs: f32,
    /// Seconds between attacks, from the unit's combat stats.
    pub attack_interval_secs: f32,
    /// Swing duration, from the unit's combat stats.
    pub swing_secs: f32,
    /// Tick duration (seconds).
    pub dt: f32,
}

/// Output from the unit FSM.
pub struct UnitUpdate {
    pub new_state: UnitState,
    pub state_changed: bool,
    pub attack_timer_secs: f32,
    pub swing_remaining_secs: f32,
    pub stagger_remaining_secs: f32,
    /// An attack landed this tick; the sim applies its damage to the rider.
    pub attack_triggered: bool,
    /// Stagger ended this tick; the sim lifts the nav halt.
    pub resume_locomotion: bool,
}

/// Evaluate the FSM for one unit. Returns the updated state and timers.
pub fn evaluate(ctx: &UnitContext) -> UnitUpdate {
    let no_change = UnitUpdate {
        new_state: ctx.state,
        state_changed: false,
        attack_timer_secs: ctx.attack_timer_secs,
        swing_remaining_secs: ctx.swing_remaining_secs,
        stagger_remaining_secs: ctx.stagger_remaining_secs,
        attack_triggered: false,
        resume_locomotion: false,
    };

    // Terminal state: no transitions
    if ctx.state == UnitState::Dead {
        return no_change;
    }

    match ctx.state {
        // Dormant until the owning group is activated by the scheduler.
        UnitState::Idle => no_change,
        UnitState::Walking => evaluate_walking(ctx),
        UnitState::Attacking => evaluate_attacking(ctx),
        UnitState::Staggered => evaluate_staggered(ctx),
        UnitState::Dead => no_change,
    }
}

fn evaluate_walking(ctx: &UnitContext) -> UnitUpdate {
    // The nav agent reads zero velocity once it halts at stopping distance
    // from the rider. A freshly assigned path also reads zero for a tick;
    // the attacking state hands that case straight back.
    if ctx.velocity.length_squared() == 0.0 {
        return UnitUpdate {
            new_state: UnitState::Attacking,
            state_changed: true,
            attack_timer_secs: ctx.attack_timer_secs,
            swing_remaining_secs: ctx.swing_remaining_secs,
            stagger_remaining_secs: ctx.stagger_remaining_secs,
            attack_triggered: false,
            resume_locomotion: false,
        };
    }

    UnitUpdate {
        new_state: ctx.state,
        state_changed: false,
        attack_timer_secs: ctx.attack_timer_secs,
        swing_remaining_secs: ctx.swing_remaining_secs,
        stagger_remaining_secs: ctx.stagger_remaining_secs,
        attack_triggered: false,
        resume_locomotion: false,
    }
}

fn evaluate_attacking(ctx: &UnitContext) -> UnitUpdate {
    // Moving again: the halt was the stale zero of a fresh path, or the
    // target slipped out of reach. Back to walking.
    if ctx.velocity.length_squared() > 0.0 {
        return UnitUpdate {
            new_state: UnitState::Walking,
            state_changed: true,
            attack_timer_secs: ctx.attack_timer_secs,
            swing_remaining_secs: ctx.swing_remaining_secs,
            stagger_remaining_secs: ctx.stagger_remaining_secs,
            attack_triggered: false,
            resume_locomotion: false,
        };
    }

    // A swing in progress holds the attack timer.
    if ctx.swing_remaining_secs > 0.0 {
        return UnitUpdate {
            new_state: UnitState::Attacking,
            state_changed: false,
            attack_timer_secs: ctx.attack_timer_secs,
            swing_remaining_secs: (ctx.swing_remaining_secs - ctx.dt).max(0.0),
            stagger_remaining_secs: ctx.stagger_remaining_secs,
            attack_triggered: false,
            resume_locomotion: false,
        };
    }

    let timer = ctx.attack_timer_secs - ctx.dt;
    if timer <= 0.0 {
        // Attack lands: the timer re-arms and the swing window opens.
        return UnitUpdate {
            new_state: UnitState::Attacking,
            state_changed: false,
            attack_timer_secs: ctx.attack_interval_secs,
            swing_remaining_secs: ctx.swing_secs,
            stagger_remaining_secs: ctx.stagger_remaining_secs,
            attack_triggered: true,
            resume_locomotion: false,
        };
    }

    UnitUpdate {
        new_state: UnitState::Attacking,
        state_changed: false,
        attack_timer_secs: timer,
        swing_remaining_secs: ctx.swing_remaining_secs,
        stagger_remaining_secs: ctx.stagger_remaining_secs,
        attack_triggered: false,
        resume_locomotion: false,
    }
}

fn evaluate_staggered(ctx: &UnitContext) -> UnitUpdate {
    let remaining = ctx.stagger_remaining_secs - ctx.dt;
    if remaining <= 0.0 {
        // Hit reaction over; locomotion resumes toward the rider.
        return UnitUpdate {
            new_state: UnitState::Walking,
            state_changed: true,
            attack_timer_secs: ctx.attack_timer_secs,
            swing_remaining_secs: ctx.swing_remaining_secs,
            stagger_remaining_secs: 0.0,
            attack_triggered: false,
            resume_locomotion: true,
        };
    }

    UnitUpdate {
        new_state: UnitState::Staggered,
        state_changed: false,
        attack_timer_secs: ctx.attack_timer_secs,
        swing_remaining_secs: ctx.swing_remaining_secs,
        stagger_remaining_secs: remaining,
        attack_triggered: false,
        resume_locomotion: false,
    }
}
