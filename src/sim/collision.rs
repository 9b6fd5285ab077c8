//! Collision and pickup predicates
//!
//! The track is one-dimensional: the vehicle and every hazard occupy a
//! horizontal interval, and the only vertical question is whether the
//! vehicle's underside has cleared a hazard's top edge.

use crate::consts::PICKUP_REACH;

use super::state::{FuelPickup, Obstacle, Vehicle};

/// Strict interval overlap: shared edges do not count, so a vehicle exactly
/// touching an obstacle on the boundary frame is not a hit.
#[inline]
pub fn spans_overlap(a_min: f32, a_max: f32, b_min: f32, b_max: f32) -> bool {
    a_max > b_min && a_min < b_max
}

/// Check whether the vehicle hits an obstacle this frame
///
/// A hit requires horizontal overlap of the occupied intervals AND that the
/// vehicle has not jumped clear of the obstacle top. An airborne vehicle with
/// its underside exactly at the obstacle top still clips it.
pub fn vehicle_hits_obstacle(vehicle: &Vehicle, obstacle: &Obstacle) -> bool {
    spans_overlap(vehicle.back(), vehicle.front(), obstacle.x, obstacle.right())
        && !vehicle.clears(obstacle.height)
}

/// Check whether a pickup is within collection reach of the vehicle
///
/// Proximity along the track only; pickups sit at a fixed reachable height,
/// so there is no vertical test.
#[inline]
pub fn pickup_in_reach(vehicle_x: f32, pickup: &FuelPickup) -> bool {
    (vehicle_x - pickup.x).abs() < PICKUP_REACH
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{OBSTACLE_SIZE, PICKUP_ALTITUDE, PICKUP_SIZE};

    fn obstacle_at(x: f32) -> Obstacle {
        Obstacle {
            x,
            width: OBSTACLE_SIZE,
            height: OBSTACLE_SIZE,
        }
    }

    fn pickup_at(x: f32) -> FuelPickup {
        FuelPickup {
            x,
            altitude: PICKUP_ALTITUDE,
            size: PICKUP_SIZE,
        }
    }

    #[test]
    fn test_grounded_overlap_is_a_hit() {
        // Vehicle centered on the obstacle, sitting on the ground
        let vehicle = Vehicle {
            x: 100.0,
            ..Default::default()
        };
        assert!(vehicle_hits_obstacle(&vehicle, &obstacle_at(100.0)));
    }

    #[test]
    fn test_touching_edges_are_not_a_hit() {
        // Vehicle front exactly at the obstacle's left edge
        let vehicle = Vehicle {
            x: 75.0, // front = 100.0
            ..Default::default()
        };
        assert!(!vehicle_hits_obstacle(&vehicle, &obstacle_at(100.0)));

        // Vehicle back exactly at the obstacle's right edge
        let vehicle = Vehicle {
            x: 145.0, // back = 120.0
            ..Default::default()
        };
        assert!(!vehicle_hits_obstacle(&vehicle, &obstacle_at(100.0)));
    }

    #[test]
    fn test_airborne_vehicle_clears_obstacle() {
        let vehicle = Vehicle {
            x: 100.0,
            altitude: OBSTACLE_SIZE + 1.0,
            airborne: true,
            ..Default::default()
        };
        assert!(!vehicle_hits_obstacle(&vehicle, &obstacle_at(100.0)));
    }

    #[test]
    fn test_underside_at_obstacle_top_still_clips() {
        let vehicle = Vehicle {
            x: 100.0,
            altitude: OBSTACLE_SIZE,
            airborne: true,
            ..Default::default()
        };
        assert!(vehicle_hits_obstacle(&vehicle, &obstacle_at(100.0)));
    }

    #[test]
    fn test_no_overlap_no_hit() {
        let vehicle = Vehicle {
            x: 100.0,
            ..Default::default()
        };
        assert!(!vehicle_hits_obstacle(&vehicle, &obstacle_at(200.0)));
        assert!(!vehicle_hits_obstacle(&vehicle, &obstacle_at(0.0)));
    }

    #[test]
    fn test_pickup_reach() {
        assert!(pickup_in_reach(100.0, &pickup_at(119.0)));
        assert!(pickup_in_reach(100.0, &pickup_at(81.0)));
        // Exactly at the threshold is out of reach
        assert!(!pickup_in_reach(100.0, &pickup_at(120.0)));
        assert!(!pickup_in_reach(100.0, &pickup_at(80.0)));
    }

    #[test]
    fn test_spans_overlap_strictness() {
        assert!(spans_overlap(0.0, 10.0, 5.0, 15.0));
        assert!(spans_overlap(5.0, 15.0, 0.0, 10.0));
        assert!(!spans_overlap(0.0, 10.0, 10.0, 20.0));
        assert!(!spans_overlap(10.0, 20.0, 0.0, 10.0));
    }
}
