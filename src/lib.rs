//! Raindrop - catch the falling drops with a bucket
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (movement, spawning, collisions, score)
//! - `settings`: Field configuration with JSON loading and validation
//! - `host`: Driver and collaborator traits for rendering, audio and input

pub mod host;
pub mod settings;
pub mod sim;

pub use settings::{ConfigError, FieldConfig};
pub use sim::{GameEvent, MovementIntent, Rect, SimulationState, TickInput, initialize, step};

/// Game configuration constants
pub mod consts {
    /// Play field dimensions
    pub const FIELD_WIDTH: u32 = 800;
    pub const FIELD_HEIGHT: u32 = 480;

    /// Drops and the bucket share the same square size
    pub const OBJECT_SIZE: u32 = 64;

    /// Fall speed of drops and keyboard speed of the bucket (units/s)
    pub const MOVEMENT_SPEED: f32 = 200.0;

    /// Seconds between automatic spawns
    pub const SPAWN_INTERVAL_SECS: f32 = 1.0;

    /// Bottom edge of the bucket, above the bottom of the field
    pub const CATCHER_Y: f32 = 20.0;

    /// Frame length used by the headless driver (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
}
