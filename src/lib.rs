//! Driftwood - a river log-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, collisions, game state)
//! - `tuning`: Data-driven game balance
//!
//! Rendering and platform input live in a separate presentation layer that
//! consumes [`sim::GameEvent`]s and reads positions/score off the state.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;

    /// Default playfield dimensions
    pub const SCREEN_WIDTH: f32 = 400.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Boat sprite dimensions
    pub const BOAT_WIDTH: f32 = 40.0;
    pub const BOAT_HEIGHT: f32 = 60.0;
    /// Distance from the bottom edge to the boat's baseline
    pub const BOAT_BASELINE: f32 = 30.0;
    /// Boat travel speed (units per sim-second)
    pub const BOAT_SPEED: f32 = 500.0;

    /// Log sprite dimensions
    pub const LOG_WIDTH: f32 = 180.0;
    pub const LOG_HEIGHT: f32 = 40.0;

    /// Width of the scoring gap between a log pair
    pub const GAP_WIDTH: f32 = 80.0;
    /// Height of the invisible gap sensor
    pub const GAP_SENSOR_HEIGHT: f32 = 30.0;

    /// Seconds between spawn cycles
    pub const SPAWN_PERIOD: f32 = 3.0;
    /// Seconds for an obstacle pair to travel top to bottom
    pub const FALL_DURATION: f32 = 5.0;
}

/// Clamp an X coordinate into the horizontal channel `[half_width, screen_width - half_width]`
#[inline]
pub fn clamp_to_channel(x: f32, half_width: f32, screen_width: f32) -> f32 {
    x.clamp(half_width, screen_width - half_width)
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).length()
}
