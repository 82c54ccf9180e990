//! Iteration bounds for the scan volume

use crate::core::types::{IVec3, Vec3};
use crate::math::aabb::Aabb;
use crate::math::frustum::view_basis;

/// Axis-aligned integer bounds enclosing the view frustum truncated at
/// `range`.
///
/// The near corners collapse onto the observer position; the far
/// corners sit at the full half-width/half-height of the truncated
/// frustum. The box is deliberately loose - it only bounds the
/// iteration region, per-cell visibility is decided by the exact
/// frustum test.
pub fn iteration_bounds(
    position: Vec3,
    forward: Vec3,
    fov_y: f32,
    aspect: f32,
    range: f32,
) -> (IVec3, IVec3) {
    let (right, up) = view_basis(forward);

    let half_height = range * (fov_y * 0.5).tan();
    let half_width = half_height * aspect;
    let far_center = position + forward * range;

    let mut bounds = Aabb::at_point(position);
    for sx in [-1.0, 1.0] {
        for sy in [-1.0, 1.0] {
            bounds.expand(far_center + right * (half_width * sx) + up * (half_height * sy));
        }
    }

    let min = IVec3::new(
        bounds.min.x.floor() as i32,
        bounds.min.y.floor() as i32,
        bounds.min.z.floor() as i32,
    );
    let max = IVec3::new(
        bounds.max.x.ceil() as i32,
        bounds.max.y.ceil() as i32,
        bounds.max.z.ceil() as i32,
    );
    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_contain_observer_and_far_plane() {
        let fov = std::f32::consts::FRAC_PI_3;
        let (min, max) = iteration_bounds(Vec3::ZERO, Vec3::Z, fov, 1.0, 10.0);

        assert!(min.x <= 0 && max.x >= 0);
        assert!(min.z <= 0);
        assert!(max.z >= 10);
    }

    #[test]
    fn test_bounds_scale_with_fov() {
        let narrow = iteration_bounds(Vec3::ZERO, Vec3::Z, 0.5, 1.0, 10.0);
        let wide = iteration_bounds(Vec3::ZERO, Vec3::Z, 1.5, 1.0, 10.0);

        assert!(wide.1.x - wide.0.x > narrow.1.x - narrow.0.x);
        assert!(wide.1.y - wide.0.y > narrow.1.y - narrow.0.y);
    }

    #[test]
    fn test_bounds_exclude_cells_past_range() {
        let fov = std::f32::consts::FRAC_PI_3;
        let (_, max) = iteration_bounds(Vec3::ZERO, Vec3::Z, fov, 1.0, 10.0);

        // A cell at z=100 is far outside the truncated frustum box
        assert!(max.z < 100);
    }

    #[test]
    fn test_bounds_follow_look_direction() {
        let fov = std::f32::consts::FRAC_PI_3;
        let (min, max) = iteration_bounds(Vec3::ZERO, -Vec3::X, fov, 1.0, 10.0);

        assert!(min.x <= -10);
        assert!(max.x >= 0);
        // Nothing reaches far behind the observer
        assert!(max.x < 2);
    }
}
