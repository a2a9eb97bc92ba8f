//! Per-frame simulation step
//!
//! Moves the bucket, advances and resolves drops, then spawns on cadence.

use std::time::Duration;

use super::random::SpawnSource;
use super::state::{GameEvent, SimulationState};

/// What the player asked the bucket to do this frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MovementIntent {
    #[default]
    None,
    /// Center the bucket on this field x (pointer/touch)
    Target(f32),
    /// Signed direction, scaled by speed and frame time (keys held)
    Velocity(f32),
}

/// Raw controls for a single frame, already in field coordinates
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Projected pointer x while touched/pressed
    pub pointer_x: Option<f32>,
    /// Left key held
    pub left: bool,
    /// Right key held
    pub right: bool,
}

impl TickInput {
    /// Pointer wins over keys; opposing keys cancel
    pub fn intent(&self) -> MovementIntent {
        if let Some(px) = self.pointer_x {
            return MovementIntent::Target(px);
        }
        let dir = self.right as i8 - self.left as i8;
        if dir == 0 {
            MovementIntent::None
        } else {
            MovementIntent::Velocity(dir as f32)
        }
    }
}

/// Unclamped bucket x after applying the intent
pub fn apply_intent(x: f32, intent: MovementIntent, size: f32, speed: f32, dt: f32) -> f32 {
    match intent {
        MovementIntent::None => x,
        MovementIntent::Target(px) => px - size / 2.0,
        MovementIntent::Velocity(dir) => x + dir * speed * dt,
    }
}

/// Advance the simulation by one rendered frame.
///
/// Hosts translate raw controls with `TickInput::intent` first. `now` is a monotonic clock reading on the same timeline as the one passed
/// to `initialize`. Returns the frame's events in the order they happened.
pub fn step<S: SpawnSource>(
    state: &mut SimulationState<S>,
    intent: MovementIntent,
    dt: f32,
    now: Duration,
) -> Vec<GameEvent> {
    let dt = if dt.is_nan() || dt < 0.0 {
        log::warn!("Invalid frame time {} clamped to 0", dt);
        0.0
    } else {
        dt
    };

    let size = state.config.size();
    let speed = state.config.speed;
    let max_x = state.config.max_x();

    // Bucket
    let x = apply_intent(state.catcher.pos.x, intent, size, speed, dt);
    state.catcher.pos.x = if x.is_nan() { 0.0 } else { x.clamp(0.0, max_x) };

    // Drops
    let fall = speed * dt;
    for drop in &mut state.drops {
        drop.rect.pos.y -= fall;
    }

    let mut events = Vec::new();
    let catcher = state.catcher;
    let mut caught = 0;
    state.drops.retain(|drop| {
        if drop.rect.top() < 0.0 {
            log::debug!("Missed drop {}", drop.id);
            events.push(GameEvent::Missed { id: drop.id });
            false
        } else if drop.rect.overlaps(&catcher) {
            caught += 1;
            events.push(GameEvent::Caught { id: drop.id });
            false
        } else {
            true
        }
    });
    if caught > 0 {
        state.score += caught;
        log::debug!("Caught {} drop(s), score {}", caught, state.score);
    }

    // Spawn cadence
    if now.saturating_sub(state.last_spawn) > state.spawn_interval {
        events.push(state.spawn_drop(now));
    }

    events
}
