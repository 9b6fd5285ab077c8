//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{pickup_in_reach, spans_overlap, vehicle_hits_obstacle};
pub use state::{
    FuelPickup, GameOverCause, GamePhase, GameState, Obstacle, TrackParams, Vehicle,
};
pub use tick::{TickInput, generate_track, tick};
