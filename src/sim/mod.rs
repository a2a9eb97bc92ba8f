//! Frame-driven simulation module
//!
//! All gameplay logic lives here. This module must stay free of I/O:
//! - Caller supplies frame time and clock readings
//! - Injected spawn randomness only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod random;
pub mod rect;
pub mod state;
pub mod tick;

pub use random::{SeededSpawner, SpawnSource};
pub use rect::Rect;
pub use state::{GameEvent, Raindrop, SimulationState, initialize};
pub use tick::{MovementIntent, TickInput, apply_intent, step};
