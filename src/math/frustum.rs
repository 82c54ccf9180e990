//! View-frustum construction and containment tests

use crate::core::types::{Mat4, Vec3, Vec4};
use super::aabb::Aabb;

/// A half-space boundary in Hessian normal form
#[derive(Clone, Copy, Debug)]
pub struct Plane {
    pub normal: Vec3,
    pub distance: f32,
}

impl Plane {
    pub fn new(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Signed distance from point to plane (positive = inside half-space)
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }
}

/// Six-plane view volume (left, right, bottom, top, near, far)
#[derive(Clone, Copy, Debug)]
pub struct Frustum {
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix.
    /// Uses the Gribb/Hartmann method.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let m = vp.to_cols_array_2d();
        let row = |i: usize| Vec4::new(m[0][i], m[1][i], m[2][i], m[3][i]);
        let (r0, r1, r2, r3) = (row(0), row(1), row(2), row(3));

        let raw = [
            r3 + r0, // left
            r3 - r0, // right
            r3 + r1, // bottom
            r3 - r1, // top
            r3 + r2, // near
            r3 - r2, // far
        ];

        let mut planes = [Plane::new(Vec3::Z, 0.0); 6];
        for (plane, r) in planes.iter_mut().zip(raw) {
            let normal = Vec3::new(r.x, r.y, r.z);
            let len = normal.length();
            if len > f32::EPSILON {
                *plane = Plane::new(normal / len, r.w / len);
            }
        }

        Self { planes }
    }

    /// Build the observer's view volume with the far plane forced to
    /// exactly `far` along the look direction, regardless of the host
    /// renderer's native view distance.
    pub fn from_observer(
        position: Vec3,
        forward: Vec3,
        fov_y: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> Self {
        let (_, up) = view_basis(forward);
        let view = Mat4::look_to_rh(position, forward, up);
        let proj = Mat4::perspective_rh(fov_y, aspect, near, far);
        Self::from_view_projection(&(proj * view))
    }

    /// Check if point is inside the frustum
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(point) >= 0.0)
    }

    /// Check if AABB intersects the frustum (conservative p-vertex test)
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        for plane in &self.planes {
            // Corner most aligned with the plane normal
            let p = Vec3::new(
                if plane.normal.x >= 0.0 { aabb.max.x } else { aabb.min.x },
                if plane.normal.y >= 0.0 { aabb.max.y } else { aabb.min.y },
                if plane.normal.z >= 0.0 { aabb.max.z } else { aabb.min.z },
            );

            // If the p-vertex is behind any plane, the box is fully outside
            if plane.distance_to_point(p) < 0.0 {
                return false;
            }
        }
        true
    }

    /// Visibility test for one unit grid cell centered at `center`
    pub fn intersects_cell(&self, center: Vec3) -> bool {
        self.intersects_aabb(&Aabb::from_center_half_extent(center, Vec3::splat(0.5)))
    }
}

/// Right/up basis for a look direction, anchored to world up.
///
/// Nearly vertical directions fall back to the Z axis as reference so
/// the cross products stay well conditioned.
pub fn view_basis(forward: Vec3) -> (Vec3, Vec3) {
    let reference = if forward.y.abs() > 0.99 { Vec3::Z } else { Vec3::Y };
    let right = forward.cross(reference).normalize();
    let up = right.cross(forward).normalize();
    (right, up)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn looking_down_neg_z(far: f32) -> Frustum {
        Frustum::from_observer(
            Vec3::ZERO,
            -Vec3::Z,
            std::f32::consts::FRAC_PI_3,
            1.0,
            0.1,
            far,
        )
    }

    #[test]
    fn test_plane_distance() {
        let plane = Plane::new(Vec3::Y, 0.0); // XZ plane
        assert_eq!(plane.distance_to_point(Vec3::new(0.0, 5.0, 0.0)), 5.0);
        assert_eq!(plane.distance_to_point(Vec3::new(0.0, -3.0, 0.0)), -3.0);
    }

    #[test]
    fn test_extraction_normalizes_planes() {
        let frustum = looking_down_neg_z(100.0);
        for plane in &frustum.planes {
            assert!(plane.normal.length() > 0.9, "Plane normal should be normalized");
        }
    }

    #[test]
    fn test_contains_point() {
        let frustum = looking_down_neg_z(100.0);
        assert!(frustum.contains_point(Vec3::new(0.0, 0.0, -10.0)));
        assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, 10.0)));
    }

    #[test]
    fn test_aabb_in_front() {
        let frustum = looking_down_neg_z(100.0);
        let aabb = Aabb::new(Vec3::new(-1.0, -1.0, -10.0), Vec3::new(1.0, 1.0, -5.0));
        assert!(frustum.intersects_aabb(&aabb), "Box in front of camera should be visible");
    }

    #[test]
    fn test_aabb_behind() {
        let frustum = looking_down_neg_z(100.0);
        let aabb = Aabb::new(Vec3::new(-1.0, -1.0, 5.0), Vec3::new(1.0, 1.0, 10.0));
        assert!(!frustum.intersects_aabb(&aabb), "Box behind camera should be culled");
    }

    #[test]
    fn test_aabb_far_to_the_side() {
        let frustum = looking_down_neg_z(100.0);
        let aabb = Aabb::new(Vec3::new(-1000.0, -1.0, -10.0), Vec3::new(-999.0, 1.0, -5.0));
        assert!(!frustum.intersects_aabb(&aabb), "Box far to the left should be culled");
    }

    #[test]
    fn test_far_plane_clamp() {
        // A cell inside the native view distance but past the clamp must
        // be excluded
        let clamped = looking_down_neg_z(10.0);
        assert!(!clamped.intersects_cell(Vec3::new(0.5, 0.5, -50.5)));

        let native = looking_down_neg_z(100.0);
        assert!(native.intersects_cell(Vec3::new(0.5, 0.5, -50.5)));
    }

    #[test]
    fn test_view_basis_orthonormal() {
        let forward = Vec3::new(0.3, -0.2, -0.9).normalize();
        let (right, up) = view_basis(forward);

        assert!(right.dot(forward).abs() < 1e-5);
        assert!(up.dot(forward).abs() < 1e-5);
        assert!(right.dot(up).abs() < 1e-5);
        assert!((right.length() - 1.0).abs() < 1e-5);
        assert!((up.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_view_basis_vertical_look() {
        // Looking straight down must not collapse the basis
        let (right, up) = view_basis(-Vec3::Y);
        assert!(right.length() > 0.9);
        assert!(up.length() > 0.9);
    }
}
