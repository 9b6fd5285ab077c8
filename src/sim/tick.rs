//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use rand::Rng;

use super::collision::{pickup_in_reach, vehicle_hits_obstacle};
use super::state::{FuelPickup, GameOverCause, GamePhase, GameState, Obstacle};
use crate::consts::*;

/// Input flags for a single tick (deterministic)
///
/// The event listeners only ever write this struct; the simulation only ever
/// reads it. `jump` is a one-shot trigger the driver clears after each
/// consumed step.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Throttle held (press-and-hold)
    pub throttle: bool,
    /// Jump trigger (swipe up / key)
    pub jump: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    match state.phase {
        // Terminal: the owning loop reacts to the flag, we do nothing
        GamePhase::GameOver => return,
        // First press starts the run and drives this same step
        GamePhase::Ready => {
            if !input.throttle {
                return;
            }
            state.phase = GamePhase::Driving;
        }
        GamePhase::Driving => {}
    }

    state.time_ticks += 1;

    // Throttle and fuel burn
    if input.throttle {
        state.speed = (state.speed + ACCELERATION * dt).min(MAX_SPEED);
        state.fuel = (state.fuel - FUEL_DRAIN * dt).max(0.0);
    } else {
        state.speed = (state.speed - DECELERATION * dt).max(0.0);
    }

    // Forward motion only; speed is floored at 0
    state.vehicle.x += state.speed * dt;

    if state.fuel <= 0.0 {
        state.set_game_over(GameOverCause::OutOfFuel);
    }

    // Jump physics: ballistic arc, clamped landing
    let vehicle = &mut state.vehicle;
    if input.jump && !vehicle.airborne {
        vehicle.airborne = true;
        vehicle.vel_y = JUMP_VELOCITY;
    }
    if vehicle.airborne {
        vehicle.vel_y -= GRAVITY * dt;
        vehicle.altitude += vehicle.vel_y * dt;
        if vehicle.altitude <= 0.0 {
            vehicle.altitude = 0.0;
            vehicle.vel_y = 0.0;
            vehicle.airborne = false;
        }
    } else {
        vehicle.altitude = 0.0;
    }

    // Scoring: distance driven, plus the running maximum
    state.score = (state.vehicle.x / UNITS_PER_POINT).floor() as u64;
    state.high_score = state.high_score.max(state.score);

    // Collision: any grounded overlap ends the run; simultaneous hits are
    // idempotent and the first cause set this tick sticks
    if state
        .obstacles
        .iter()
        .any(|o| vehicle_hits_obstacle(&state.vehicle, o))
    {
        state.set_game_over(GameOverCause::Collision);
    }

    // Fuel pickup: first canister in reach, at most one per tick
    if let Some(idx) = state
        .pickups
        .iter()
        .position(|p| pickup_in_reach(state.vehicle.x, p))
    {
        state.fuel = (state.fuel + FUEL_PICKUP_AMOUNT).min(FUEL_CAPACITY);
        state.pickups.remove(idx);
    }
}

/// Populate the track with obstacles and fuel pickups
///
/// A cursor advances from each start offset by uniform draws from the
/// configured spacing range until it passes the end of the track. Obstacles
/// and pickups draw from the same seeded stream, so a seed fully determines
/// the track.
pub fn generate_track(state: &mut GameState) {
    let mut rng = state.rng_state.to_rng();

    state.obstacles.clear();
    let (min, max) = state.params.obstacle_spacing;
    let mut cursor = state.params.obstacle_start;
    while cursor < state.params.length {
        state.obstacles.push(Obstacle {
            x: cursor,
            width: OBSTACLE_SIZE,
            height: OBSTACLE_SIZE,
        });
        cursor += rng.random_range(min..max);
    }

    state.pickups.clear();
    let (min, max) = state.params.pickup_spacing;
    let mut cursor = state.params.pickup_start;
    while cursor < state.params.length {
        state.pickups.push(FuelPickup {
            x: cursor,
            altitude: PICKUP_ALTITUDE,
            size: PICKUP_SIZE,
        });
        cursor += rng.random_range(min..max);
    }

    log::info!(
        "Track generated: {} obstacles, {} pickups over {} units",
        state.obstacles.len(),
        state.pickups.len(),
        state.params.length
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::TrackParams;
    use proptest::prelude::*;

    const THROTTLE: TickInput = TickInput {
        throttle: true,
        jump: false,
    };
    const COAST: TickInput = TickInput {
        throttle: false,
        jump: false,
    };

    fn new_state(seed: u64) -> GameState {
        GameState::new(seed, TrackParams::default())
    }

    /// A started run on an empty track, for physics-only scenarios
    fn open_road(seed: u64) -> GameState {
        let mut state = new_state(seed);
        state.obstacles.clear();
        state.pickups.clear();
        state.phase = GamePhase::Driving;
        state
    }

    #[test]
    fn test_ready_until_first_press() {
        let mut state = new_state(1);
        assert_eq!(state.phase, GamePhase::Ready);

        tick(&mut state, &COAST, SIM_DT);
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.time_ticks, 0);

        // First press starts driving the same step
        tick(&mut state, &THROTTLE, SIM_DT);
        assert_eq!(state.phase, GamePhase::Driving);
        assert!(state.speed > 0.0);
    }

    #[test]
    fn test_speed_reaches_cap_in_25_ticks() {
        let mut state = open_road(1);
        for _ in 0..24 {
            tick(&mut state, &THROTTLE, SIM_DT);
            assert!(state.speed < MAX_SPEED);
        }
        tick(&mut state, &THROTTLE, SIM_DT);
        assert_eq!(state.speed, MAX_SPEED);

        // Stays pinned at the cap
        tick(&mut state, &THROTTLE, SIM_DT);
        assert_eq!(state.speed, MAX_SPEED);
    }

    #[test]
    fn test_speed_decays_to_exactly_zero() {
        let mut state = open_road(1);
        for _ in 0..25 {
            tick(&mut state, &THROTTLE, SIM_DT);
        }
        // 300 units/s at 180 units/s² takes 100 ticks to shed
        for _ in 0..110 {
            tick(&mut state, &COAST, SIM_DT);
            assert!(state.speed >= 0.0);
        }
        assert_eq!(state.speed, 0.0);
    }

    #[test]
    fn test_score_tracks_distance() {
        let mut state = open_road(1);
        for _ in 0..200 {
            tick(&mut state, &THROTTLE, SIM_DT);
            assert_eq!(state.score, (state.vehicle.x / UNITS_PER_POINT) as u64);
            assert_eq!(state.high_score, state.score);
        }
    }

    #[test]
    fn test_full_tank_lasts_about_a_thousand_ticks() {
        let mut state = open_road(1);
        let mut ticks = 0u32;
        while !state.game_over() {
            tick(&mut state, &THROTTLE, SIM_DT);
            ticks += 1;
            assert!(ticks <= 1002, "tank should be dry by now");
        }
        assert!(ticks >= 995, "tank drained too fast: {} ticks", ticks);
        assert_eq!(state.fuel, 0.0);
        assert_eq!(state.cause, Some(GameOverCause::OutOfFuel));
    }

    #[test]
    fn test_game_over_is_terminal() {
        let mut state = open_road(1);
        state.fuel = 0.01;
        while !state.game_over() {
            tick(&mut state, &THROTTLE, SIM_DT);
        }

        let frozen_ticks = state.time_ticks;
        let frozen_x = state.vehicle.x;
        for _ in 0..10 {
            tick(&mut state, &THROTTLE, SIM_DT);
        }
        assert_eq!(state.time_ticks, frozen_ticks);
        assert_eq!(state.vehicle.x, frozen_x);
    }

    #[test]
    fn test_grounded_overlap_ends_the_run() {
        let mut state = open_road(1);
        state.vehicle.x = 100.0;
        state.obstacles.push(Obstacle {
            x: 100.0,
            width: OBSTACLE_SIZE,
            height: OBSTACLE_SIZE,
        });

        tick(&mut state, &COAST, SIM_DT);
        assert!(state.game_over());
        assert_eq!(state.cause, Some(GameOverCause::Collision));
    }

    #[test]
    fn test_jump_arc_lands_clean() {
        let mut state = open_road(1);
        let jump = TickInput {
            throttle: false,
            jump: true,
        };
        tick(&mut state, &jump, SIM_DT);
        assert!(state.vehicle.airborne);

        // Re-triggering mid-air must not reset the arc
        let vel_before = state.vehicle.vel_y;
        tick(&mut state, &jump, SIM_DT);
        assert!(state.vehicle.vel_y < vel_before);

        let mut peak: f32 = 0.0;
        for _ in 0..60 {
            tick(&mut state, &COAST, SIM_DT);
            peak = peak.max(state.vehicle.altitude);
        }
        // Full flight is ~40 ticks; well landed by now
        assert!(!state.vehicle.airborne);
        assert_eq!(state.vehicle.altitude, 0.0);
        assert_eq!(state.vehicle.vel_y, 0.0);
        // v²/2g puts the apex near 100 units
        assert!(peak > 80.0, "apex too low: {}", peak);
    }

    #[test]
    fn test_jump_clears_an_obstacle() {
        let mut state = open_road(1);
        state.vehicle.x = 250.0;
        state.speed = MAX_SPEED;
        state.obstacles.push(Obstacle {
            x: 300.0,
            width: OBSTACLE_SIZE,
            height: OBSTACLE_SIZE,
        });

        // Jump as the obstacle approaches; the arc spans the whole overlap
        let input = TickInput {
            throttle: true,
            jump: true,
        };
        for _ in 0..60 {
            tick(&mut state, &input, SIM_DT);
        }
        assert!(!state.game_over(), "vehicle should have cleared the hazard");
        assert!(state.vehicle.back() > 320.0);
    }

    #[test]
    fn test_staying_grounded_hits_the_same_obstacle() {
        let mut state = open_road(1);
        state.vehicle.x = 250.0;
        state.speed = MAX_SPEED;
        state.obstacles.push(Obstacle {
            x: 300.0,
            width: OBSTACLE_SIZE,
            height: OBSTACLE_SIZE,
        });

        for _ in 0..60 {
            tick(&mut state, &THROTTLE, SIM_DT);
        }
        assert!(state.game_over());
        assert_eq!(state.cause, Some(GameOverCause::Collision));
    }

    #[test]
    fn test_pickup_refuels_and_is_consumed() {
        let mut state = open_road(1);
        state.fuel = 40.0;
        state.vehicle.x = 100.0;
        state.pickups.push(FuelPickup {
            x: 105.0,
            altitude: PICKUP_ALTITUDE,
            size: PICKUP_SIZE,
        });
        state.pickups.push(FuelPickup {
            x: 110.0,
            altitude: PICKUP_ALTITUDE,
            size: PICKUP_SIZE,
        });

        tick(&mut state, &COAST, SIM_DT);
        // First qualifying canister only, in list order
        assert_eq!(state.fuel, 90.0);
        assert_eq!(state.pickups.len(), 1);
        assert_eq!(state.pickups[0].x, 110.0);
    }

    #[test]
    fn test_pickup_caps_at_capacity() {
        let mut state = open_road(1);
        state.fuel = 80.0;
        state.vehicle.x = 100.0;
        state.pickups.push(FuelPickup {
            x: 100.0,
            altitude: PICKUP_ALTITUDE,
            size: PICKUP_SIZE,
        });

        tick(&mut state, &COAST, SIM_DT);
        assert_eq!(state.fuel, FUEL_CAPACITY);
    }

    #[test]
    fn test_obstacle_count_bounds() {
        for seed in [1u64, 7, 42, 1234, 99999] {
            let state = new_state(seed);
            let n = state.obstacles.len();
            assert!(
                (12..=33).contains(&n),
                "seed {}: {} obstacles out of range",
                seed,
                n
            );
        }
    }

    #[test]
    fn test_track_determinism() {
        let a = new_state(4242);
        let b = new_state(4242);
        assert_eq!(a.obstacles.len(), b.obstacles.len());
        for (oa, ob) in a.obstacles.iter().zip(&b.obstacles) {
            assert_eq!(oa.x, ob.x);
        }
        assert_eq!(a.pickups.len(), b.pickups.len());
        for (pa, pb) in a.pickups.iter().zip(&b.pickups) {
            assert_eq!(pa.x, pb.x);
        }
    }

    #[test]
    fn test_run_determinism() {
        let mut a = new_state(777);
        let mut b = new_state(777);

        let inputs = [
            TickInput {
                throttle: true,
                jump: false,
            },
            TickInput {
                throttle: true,
                jump: true,
            },
            TickInput {
                throttle: false,
                jump: false,
            },
        ];
        for _ in 0..100 {
            for input in &inputs {
                tick(&mut a, input, SIM_DT);
                tick(&mut b, input, SIM_DT);
            }
        }

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.vehicle.x, b.vehicle.x);
        assert_eq!(a.fuel, b.fuel);
        assert_eq!(a.score, b.score);
        assert_eq!(a.phase, b.phase);
    }

    proptest! {
        #[test]
        fn prop_invariants_hold(
            seed in 0u64..1000,
            inputs in proptest::collection::vec((any::<bool>(), any::<bool>()), 0..400),
        ) {
            let mut state = GameState::new(seed, TrackParams::default());
            let mut prev_x = state.vehicle.x;
            for (throttle, jump) in inputs {
                tick(&mut state, &TickInput { throttle, jump }, SIM_DT);
                prop_assert!(state.speed >= 0.0 && state.speed <= MAX_SPEED);
                prop_assert!(state.fuel >= 0.0 && state.fuel <= FUEL_CAPACITY);
                prop_assert!(state.vehicle.x >= prev_x);
                prop_assert!(state.vehicle.altitude >= 0.0);
                prop_assert!(state.high_score >= state.score);
                prev_x = state.vehicle.x;
            }
        }
    }
}
