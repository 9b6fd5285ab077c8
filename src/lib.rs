//! Fuel Dash - a side-scrolling driving game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (driving physics, collisions, game state)
//! - `renderer`: WebGPU rendering pipeline
//! - `highscores`: LocalStorage-backed leaderboard

pub mod highscores;
pub mod renderer;
pub mod sim;

pub use highscores::HighScores;

/// Game configuration constants
///
/// Rates are per second and get multiplied by the timestep, so the feel is
/// the same at any display refresh rate.
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Vehicle dimensions (track units, 1:1 with CSS pixels)
    pub const VEHICLE_WIDTH: f32 = 50.0;
    pub const VEHICLE_HEIGHT: f32 = 30.0;
    /// Track position the vehicle starts from
    pub const VEHICLE_START_X: f32 = 50.0;

    /// Top speed, track units per second
    pub const MAX_SPEED: f32 = 300.0;
    /// Throttle acceleration, units/s²
    pub const ACCELERATION: f32 = 720.0;
    /// Coast-down deceleration when the throttle is released
    pub const DECELERATION: f32 = 180.0;

    /// Full tank
    pub const FUEL_CAPACITY: f32 = 100.0;
    /// Fuel burned per second while the throttle is held
    pub const FUEL_DRAIN: f32 = 6.0;
    /// Fuel granted by one pickup (tank caps at FUEL_CAPACITY)
    pub const FUEL_PICKUP_AMOUNT: f32 = 50.0;

    /// Downward acceleration while airborne, units/s²
    pub const GRAVITY: f32 = 1800.0;
    /// Initial upward velocity of a jump
    pub const JUMP_VELOCITY: f32 = 600.0;

    /// Obstacles are square ground-level hazards
    pub const OBSTACLE_SIZE: f32 = 20.0;
    /// Pickup square size
    pub const PICKUP_SIZE: f32 = 15.0;
    /// Pickups float this far above the ground line
    pub const PICKUP_ALTITUDE: f32 = 20.0;
    /// Horizontal distance within which a pickup is collected
    pub const PICKUP_REACH: f32 = 20.0;

    /// Track units per score point
    pub const UNITS_PER_POINT: f32 = 10.0;

    /// Ground line offset from the bottom of the canvas
    pub const GROUND_MARGIN: f32 = 100.0;
}
