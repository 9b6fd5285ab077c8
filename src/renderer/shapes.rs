//! Scene assembly for 2D primitives
//!
//! Builds the per-frame vertex list from a read-only state snapshot. All
//! coordinates are canvas pixels (origin top-left, Y down); the pipeline maps
//! them to NDC on upload.

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::consts::{FUEL_CAPACITY, GROUND_MARGIN};
use crate::sim::GameState;

/// Camera-follow transform: the vehicle stays horizontally centered and the
/// rest of the world shifts past it.
#[inline]
pub fn track_to_screen_x(track_x: f32, vehicle_x: f32, viewport_w: f32) -> f32 {
    track_x - vehicle_x + viewport_w / 2.0
}

/// Append a filled axis-aligned rectangle as two triangles
pub fn push_quad(out: &mut Vec<Vertex>, min: Vec2, size: Vec2, color: [f32; 4]) {
    let max = min + size;

    out.push(Vertex::new(min.x, min.y, color));
    out.push(Vertex::new(max.x, min.y, color));
    out.push(Vertex::new(min.x, max.y, color));

    out.push(Vertex::new(min.x, max.y, color));
    out.push(Vertex::new(max.x, min.y, color));
    out.push(Vertex::new(max.x, max.y, color));
}

/// Build the full frame: terrain, obstacles, pickups, vehicle, fuel bar
pub fn scene_vertices(state: &GameState, viewport_w: f32, viewport_h: f32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(128);
    let ground_y = viewport_h - GROUND_MARGIN;
    let vehicle = &state.vehicle;

    // Ground line across the whole viewport
    push_quad(
        &mut vertices,
        Vec2::new(0.0, ground_y - 1.0),
        Vec2::new(viewport_w, 2.0),
        colors::TERRAIN,
    );

    // Obstacles sit on the ground; off-screen ones are culled
    for obstacle in &state.obstacles {
        let screen_x = track_to_screen_x(obstacle.x, vehicle.x, viewport_w);
        if screen_x + obstacle.width < 0.0 || screen_x > viewport_w {
            continue;
        }
        push_quad(
            &mut vertices,
            Vec2::new(screen_x, ground_y - obstacle.height),
            Vec2::new(obstacle.width, obstacle.height),
            colors::OBSTACLE,
        );
    }

    // Pickups float above the ground, centered on their track position
    for pickup in &state.pickups {
        let center_x = track_to_screen_x(pickup.x, vehicle.x, viewport_w);
        if center_x + pickup.size < 0.0 || center_x - pickup.size > viewport_w {
            continue;
        }
        push_quad(
            &mut vertices,
            Vec2::new(
                center_x - pickup.size / 2.0,
                ground_y - pickup.altitude - pickup.size,
            ),
            Vec2::new(pickup.size, pickup.size),
            colors::PICKUP,
        );
    }

    // Vehicle, horizontally centered, underside at its altitude
    push_quad(
        &mut vertices,
        Vec2::new(
            viewport_w / 2.0 - vehicle.width / 2.0,
            ground_y - vehicle.altitude - vehicle.height,
        ),
        Vec2::new(vehicle.width, vehicle.height),
        colors::VEHICLE,
    );

    // Fuel bar: fixed back bar, proportional fill (1 px per fuel unit)
    push_quad(
        &mut vertices,
        Vec2::new(20.0, 20.0),
        Vec2::new(FUEL_CAPACITY, 10.0),
        colors::FUEL_BAR_BACK,
    );
    if state.fuel > 0.0 {
        push_quad(
            &mut vertices,
            Vec2::new(20.0, 20.0),
            Vec2::new(state.fuel, 10.0),
            colors::FUEL_BAR_FILL,
        );
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::TrackParams;

    fn quads_with_color(vertices: &[Vertex], color: [f32; 4]) -> usize {
        vertices.iter().filter(|v| v.color == color).count() / 6
    }

    #[test]
    fn test_camera_follow_centers_vehicle() {
        // An entity at the vehicle's own position lands mid-viewport
        assert_eq!(track_to_screen_x(1000.0, 1000.0, 800.0), 400.0);
        // One 100 units ahead sits 100 px right of center
        assert_eq!(track_to_screen_x(1100.0, 1000.0, 800.0), 500.0);
    }

    #[test]
    fn test_quad_layout() {
        let mut vertices = Vec::new();
        push_quad(
            &mut vertices,
            Vec2::new(10.0, 20.0),
            Vec2::new(30.0, 40.0),
            colors::VEHICLE,
        );
        assert_eq!(vertices.len(), 6);
        let xs: Vec<f32> = vertices.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = vertices.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_scene_culls_far_entities() {
        let state = GameState::new(7, TrackParams::default());
        let vertices = scene_vertices(&state, 800.0, 600.0);

        // Vehicle starts at x=50; only track entities within the 800 px
        // window around it survive culling
        let visible = quads_with_color(&vertices, colors::OBSTACLE);
        let total = state.obstacles.len();
        assert!(visible < total);
        for obstacle in &state.obstacles {
            let screen_x = track_to_screen_x(obstacle.x, state.vehicle.x, 800.0);
            if screen_x >= 0.0 && screen_x + obstacle.width <= 800.0 {
                assert!(visible >= 1);
            }
        }
    }

    #[test]
    fn test_fuel_bar_tracks_fuel_level() {
        let mut state = GameState::new(7, TrackParams::default());
        state.fuel = 37.5;
        let vertices = scene_vertices(&state, 800.0, 600.0);

        let fill: Vec<&Vertex> = vertices
            .iter()
            .filter(|v| v.color == colors::FUEL_BAR_FILL)
            .collect();
        assert_eq!(fill.len(), 6);
        let max_x = fill
            .iter()
            .map(|v| v.position[0])
            .fold(f32::MIN, f32::max);
        assert_eq!(max_x, 20.0 + 37.5);
    }
}
