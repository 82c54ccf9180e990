//! Integer block coordinates

use crate::core::types::{IVec3, Vec3};

/// Coordinate of one unit-cube cell in the world grid
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BlockCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockCoord {
    /// Create a new block coordinate
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Cell containing a world-space position
    pub fn from_world_pos(pos: Vec3) -> Self {
        Self {
            x: pos.x.floor() as i32,
            y: pos.y.floor() as i32,
            z: pos.z.floor() as i32,
        }
    }

    /// World-space center of the cell
    pub fn center(&self) -> Vec3 {
        Vec3::new(
            self.x as f32 + 0.5,
            self.y as f32 + 0.5,
            self.z as f32 + 0.5,
        )
    }

    /// World-space minimum corner of the cell
    pub fn min_corner(&self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

impl From<IVec3> for BlockCoord {
    fn from(v: IVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<BlockCoord> for IVec3 {
    fn from(c: BlockCoord) -> Self {
        IVec3::new(c.x, c.y, c.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        let coord = BlockCoord::new(1, -2, 3);
        assert_eq!(coord.center(), Vec3::new(1.5, -1.5, 3.5));
    }

    #[test]
    fn test_from_world_pos() {
        assert_eq!(BlockCoord::from_world_pos(Vec3::new(1.2, 0.9, -0.1)), BlockCoord::new(1, 0, -1));
        assert_eq!(BlockCoord::from_world_pos(Vec3::new(-1.5, -2.0, 2.999)), BlockCoord::new(-2, -2, 2));
    }

    #[test]
    fn test_value_equality() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(BlockCoord::new(1, 2, 3));
        assert!(set.contains(&BlockCoord::new(1, 2, 3)));
        assert!(!set.contains(&BlockCoord::new(3, 2, 1)));
    }
}
