//! Block state snapshots and shape geometry

use std::sync::Arc;

use crate::core::types::{Quat, Vec3};

/// Per-face sub-mesh of a block shape.
///
/// `positions` and `normals` are parallel arrays in block-local space
/// (the unit cell, min corner at the origin).
#[derive(Clone, Debug, Default)]
pub struct FaceGeometry {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl FaceGeometry {
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Attribute arrays must be parallel and every index in range
    pub fn is_well_formed(&self) -> bool {
        self.positions.len() == self.normals.len()
            && self.indices.iter().all(|&i| (i as usize) < self.positions.len())
    }
}

/// Geometry and identity shared by every block of one type.
///
/// Face entries are `None` where the shape has no geometry on that side.
#[derive(Clone, Debug)]
pub struct BlockShape {
    /// Stable block type identifier
    pub type_id: u16,
    /// Block-local half extents (0.5 per axis for a full cube)
    pub half_extent: Vec3,
    /// Face sub-meshes of the rendered shape
    pub visual: Vec<Option<FaceGeometry>>,
    /// Face sub-meshes of the collision shape
    pub collision: Vec<Option<FaceGeometry>>,
}

impl BlockShape {
    /// Shape with no declared geometry (highlights fall back to a cube)
    pub fn new(type_id: u16) -> Self {
        Self {
            type_id,
            half_extent: Vec3::splat(0.5),
            visual: Vec::new(),
            collision: Vec::new(),
        }
    }

    /// Visual rotation for the orientation metadata: the low two bits
    /// select a quarter turn about +Y.
    pub fn rotation(&self, orientation: u8) -> Quat {
        Quat::from_rotation_y((orientation & 3) as f32 * std::f32::consts::FRAC_PI_2)
    }
}

/// Read-only snapshot of one occupied cell, as returned by the world
/// query. Empty cells are represented by the query returning `None`.
#[derive(Clone, Debug)]
pub struct BlockState {
    /// Accumulated damage
    pub damage: u32,
    /// Damage capacity; zero means the block cannot be damaged
    pub max_damage: u32,
    /// Terrain classification (soil, stone, ...) vs. built blocks
    pub is_terrain: bool,
    /// Orientation-relevant metadata
    pub orientation: u8,
    /// Shared shape descriptor for the block's type
    pub shape: Arc<BlockShape>,
}

impl BlockState {
    /// Damage fraction in [0, 1]; zero-capacity blocks report 0.0
    pub fn damage_ratio(&self) -> f32 {
        if self.max_damage == 0 {
            0.0
        } else {
            self.damage as f32 / self.max_damage as f32
        }
    }
}
