//! Proxy mesh synthesis for block highlights

use bytemuck::{Pod, Zeroable};

use crate::core::types::Vec3;
use crate::world::block::{BlockShape, FaceGeometry};

/// Outward offset along each vertex normal, keeps the highlight off the
/// real block surface
pub const SURFACE_NUDGE: f32 = 0.01;

/// Uniform scale of the cube fallback, slightly above the unit cell
pub const CUBE_INFLATE: f32 = 1.02;

/// Vertex layout shared with the render layer - byte-uploadable
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Where a proxy mesh's geometry came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeshSource {
    /// Concatenated visual face sub-meshes
    Visual,
    /// Collision faces (the visual set was empty)
    Collision,
    /// Inflated unit cube (synthesis yielded nothing usable)
    CubeFallback,
}

/// Origin-centered highlight geometry for one (type, orientation) key
#[derive(Clone, Debug)]
pub struct ProxyMesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
    pub source: MeshSource,
}

impl ProxyMesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn is_cube_fallback(&self) -> bool {
        matches!(self.source, MeshSource::CubeFallback)
    }
}

/// Build a proxy mesh approximating the block's rendered shape.
///
/// Visual faces are concatenated with per-face index offsetting; a shape
/// with no visual faces is built from its collision faces instead, and
/// anything still empty or malformed falls back to the inflated cube.
pub fn synthesize(shape: &BlockShape) -> ProxyMesh {
    let (faces, source) = if has_any_face(&shape.visual) {
        (&shape.visual, MeshSource::Visual)
    } else {
        (&shape.collision, MeshSource::Collision)
    };

    match concat_faces(faces, shape.half_extent, source) {
        Some(mesh) => mesh,
        None => {
            log::debug!(
                "no usable geometry for block type {}, using cube fallback",
                shape.type_id
            );
            cube_fallback()
        }
    }
}

fn has_any_face(faces: &[Option<FaceGeometry>]) -> bool {
    faces.iter().flatten().any(|face| !face.is_empty())
}

/// Concatenate the non-empty faces; `None` when nothing usable remains
/// or any face is malformed.
fn concat_faces(
    faces: &[Option<FaceGeometry>],
    half_extent: Vec3,
    source: MeshSource,
) -> Option<ProxyMesh> {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for face in faces.iter().flatten() {
        if face.is_empty() {
            continue;
        }
        if !face.is_well_formed() {
            // One malformed face poisons the whole synthesis
            return None;
        }

        let base = vertices.len() as u32;
        for (position, normal) in face.positions.iter().zip(&face.normals) {
            // Recenter on the origin, then nudge outward along the
            // normal so the overlay never coplanar-fights the block
            let n = normal.normalize_or_zero();
            let p = *position - half_extent + n * SURFACE_NUDGE;
            vertices.push(MeshVertex {
                position: p.to_array(),
                normal: n.to_array(),
            });
        }
        indices.extend(face.indices.iter().map(|i| base + i));
    }

    if vertices.is_empty() {
        None
    } else {
        Some(ProxyMesh { vertices, indices, source })
    }
}

/// Unit cube with per-face normals, inflated slightly beyond the cell
pub fn cube_fallback() -> ProxyMesh {
    const NORMALS: [[f32; 3]; 6] = [
        [1.0, 0.0, 0.0],
        [-1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
    ];

    let h = 0.5 * CUBE_INFLATE;
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for normal in NORMALS {
        let n = Vec3::from_array(normal);
        // In-plane basis chosen so u x v = n, keeping the winding
        // counter-clockwise from outside
        let t = if n.x.abs() > 0.5 { Vec3::Y } else { Vec3::X };
        let u = n.cross(t).normalize();
        let v = n.cross(u);

        let base = vertices.len() as u32;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let p = n * h + u * (h * su) + v * (h * sv);
            vertices.push(MeshVertex {
                position: p.to_array(),
                normal,
            });
        }
        indices.extend([base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    ProxyMesh {
        vertices,
        indices,
        source: MeshSource::CubeFallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad(normal: Vec3, corners: [Vec3; 4]) -> FaceGeometry {
        FaceGeometry {
            positions: corners.to_vec(),
            normals: vec![normal; 4],
            indices: vec![0, 1, 2, 0, 2, 3],
        }
    }

    fn top_quad() -> FaceGeometry {
        quad(
            Vec3::Y,
            [
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(1.0, 1.0, 1.0),
                Vec3::new(0.0, 1.0, 1.0),
            ],
        )
    }

    fn shape_with_visual() -> BlockShape {
        BlockShape {
            visual: vec![Some(top_quad()), None, Some(top_quad())],
            ..BlockShape::new(1)
        }
    }

    #[test]
    fn test_concatenates_with_index_offsets() {
        let mesh = synthesize(&shape_with_visual());
        assert_eq!(mesh.source, MeshSource::Visual);
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.index_count(), 12);
        // Second face indexes past the first face's vertices
        assert_eq!(&mesh.indices[6..], &[4, 5, 6, 4, 6, 7]);
    }

    #[test]
    fn test_recenter_and_nudge() {
        let mesh = synthesize(&shape_with_visual());
        // Top face corner (0,1,0) recentered by (0.5,0.5,0.5) and pushed
        // along +Y by the nudge
        let v = mesh.vertices[0];
        assert!((v.position[0] - (-0.5)).abs() < 1e-6);
        assert!((v.position[1] - (0.5 + SURFACE_NUDGE)).abs() < 1e-6);
        assert!((v.position[2] - (-0.5)).abs() < 1e-6);
    }

    #[test]
    fn test_collision_fallback_when_no_visual() {
        let shape = BlockShape {
            collision: vec![Some(top_quad())],
            ..BlockShape::new(2)
        };
        let mesh = synthesize(&shape);
        assert_eq!(mesh.source, MeshSource::Collision);
        assert_eq!(mesh.vertex_count(), 4);
    }

    #[test]
    fn test_cube_fallback_when_empty() {
        let mesh = synthesize(&BlockShape::new(3));
        assert!(mesh.is_cube_fallback());
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.index_count(), 36);
        // Inflated beyond the unit cell
        let max_x = mesh
            .vertices
            .iter()
            .map(|v| v.position[0])
            .fold(f32::MIN, f32::max);
        assert!(max_x > 0.5);
    }

    #[test]
    fn test_cube_fallback_on_malformed_face() {
        let mut bad = top_quad();
        bad.indices.push(99);
        let shape = BlockShape {
            visual: vec![Some(bad)],
            ..BlockShape::new(4)
        };
        assert!(synthesize(&shape).is_cube_fallback());
    }

    #[test]
    fn test_cube_winding_faces_outward() {
        let mesh = cube_fallback();
        // For every triangle, the geometric normal must agree with the
        // stored vertex normal
        for tri in mesh.indices.chunks(3) {
            let a = Vec3::from_array(mesh.vertices[tri[0] as usize].position);
            let b = Vec3::from_array(mesh.vertices[tri[1] as usize].position);
            let c = Vec3::from_array(mesh.vertices[tri[2] as usize].position);
            let n = Vec3::from_array(mesh.vertices[tri[0] as usize].normal);
            assert!((b - a).cross(c - a).dot(n) > 0.0);
        }
    }
}
