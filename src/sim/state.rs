//! Game state and core simulation types

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Track generated, waiting for the first press
    Ready,
    /// Active gameplay
    Driving,
    /// Run ended; no further simulation steps until reinit
    GameOver,
}

/// Why the run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverCause {
    /// Hit a ground hazard
    Collision,
    /// Tank ran dry
    OutOfFuel,
}

/// The player's vehicle
///
/// `x` is the cumulative distance traveled along the track (the camera keeps
/// the vehicle horizontally centered, so this never appears on screen
/// directly). `altitude` is the height of the underside above the ground
/// line; grounded vehicles sit at 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// Track position of the vehicle center (monotonically non-decreasing)
    pub x: f32,
    /// Underside height above the ground line (>= 0)
    pub altitude: f32,
    /// Vertical velocity while airborne (positive = up)
    pub vel_y: f32,
    pub width: f32,
    pub height: f32,
    /// Mid-jump; cleared on landing
    pub airborne: bool,
}

impl Default for Vehicle {
    fn default() -> Self {
        Self {
            x: VEHICLE_START_X,
            altitude: 0.0,
            vel_y: 0.0,
            width: VEHICLE_WIDTH,
            height: VEHICLE_HEIGHT,
            airborne: false,
        }
    }
}

impl Vehicle {
    /// Leading edge of the occupied track interval
    #[inline]
    pub fn front(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Trailing edge of the occupied track interval
    #[inline]
    pub fn back(&self) -> f32 {
        self.x - self.width / 2.0
    }

    /// True when the underside has cleared the given height
    #[inline]
    pub fn clears(&self, height: f32) -> bool {
        self.altitude > height
    }
}

/// A ground-level hazard. Immutable once generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    /// Track position of the left edge
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    /// Track position of the right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// A fuel canister floating above the ground. Consumed on collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelPickup {
    /// Track position of the canister center
    pub x: f32,
    /// Height above the ground line
    pub altitude: f32,
    pub size: f32,
}

/// Track generation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackParams {
    /// Total generated track span
    pub length: f32,
    /// Uniform spacing range between consecutive obstacles, [min, max)
    pub obstacle_spacing: (f32, f32),
    /// Uniform spacing range between consecutive pickups, [min, max)
    pub pickup_spacing: (f32, f32),
    /// Track position of the first obstacle
    pub obstacle_start: f32,
    /// Track position of the first pickup
    pub pickup_start: f32,
}

impl Default for TrackParams {
    fn default() -> Self {
        Self {
            length: 10_000.0,
            obstacle_spacing: (300.0, 800.0),
            pickup_spacing: (500.0, 1200.0),
            obstacle_start: 300.0,
            pickup_start: 500.0,
        }
    }
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete game state (deterministic for a given seed, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG state
    pub rng_state: RngState,
    /// Track generation parameters
    pub params: TrackParams,
    /// Player vehicle
    pub vehicle: Vehicle,
    /// Ground hazards, ascending by track position
    pub obstacles: Vec<Obstacle>,
    /// Uncollected fuel canisters, ascending by track position
    pub pickups: Vec<FuelPickup>,
    /// Current forward speed, units per second
    pub speed: f32,
    /// Fuel level, 0..=FUEL_CAPACITY
    pub fuel: f32,
    /// Score, floor(distance / UNITS_PER_POINT)
    pub score: u64,
    /// Running maximum of score since init
    pub high_score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Set with the first terminal transition; never overwritten
    pub cause: Option<GameOverCause>,
}

impl GameState {
    /// Create a fresh run: full tank, vehicle at the start, track generated
    pub fn new(seed: u64, params: TrackParams) -> Self {
        let mut state = Self {
            seed,
            rng_state: RngState::new(seed),
            params,
            vehicle: Vehicle::default(),
            obstacles: Vec::new(),
            pickups: Vec::new(),
            speed: 0.0,
            fuel: FUEL_CAPACITY,
            score: 0,
            high_score: 0,
            time_ticks: 0,
            phase: GamePhase::Ready,
            cause: None,
        };

        super::tick::generate_track(&mut state);

        state
    }

    /// True once the run has ended
    #[inline]
    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Transition to the terminal phase. The first cause sticks; later calls
    /// in the same tick are no-ops.
    pub fn set_game_over(&mut self, cause: GameOverCause) {
        if self.phase != GamePhase::GameOver {
            self.phase = GamePhase::GameOver;
            self.cause = Some(cause);
        }
    }
}
