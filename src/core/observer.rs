//! Observer state consumed by the scan engine

use crate::core::types::Vec3;

/// Held-item action flags
pub mod actions {
    pub const REPAIR: u8 = 1 << 0;
    pub const UPGRADE: u8 = 1 << 1;
    pub const SALVAGE: u8 = 1 << 2;
}

/// Capability set of the observer's held item.
///
/// Flags are resolved once when item definitions are loaded, so gating
/// is a plain bit test rather than a per-tick type inspection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeldItem {
    /// Action flags (see [`actions`])
    pub actions: u8,
}

impl HeldItem {
    pub fn new(actions: u8) -> Self {
        Self { actions }
    }

    /// Check if the item can repair blocks
    pub fn can_repair(&self) -> bool {
        self.actions & actions::REPAIR != 0
    }
}

/// Read-only view of the scanning observer.
///
/// Implemented by the host's player/camera layer. The engine reads
/// position, orientation and the held item once per tick and never
/// mutates the observer.
pub trait Observer {
    /// Eye position in world space
    fn position(&self) -> Vec3;

    /// Normalized look direction
    fn forward(&self) -> Vec3;

    /// Vertical field of view in radians
    fn fov_y(&self) -> f32;

    /// Aspect ratio (width / height)
    fn aspect(&self) -> f32;

    /// Currently held item, if any
    fn held_item(&self) -> Option<HeldItem>;

    /// Floating render origin subtracted from marker positions.
    ///
    /// Hosts that re-center their render world around the player return
    /// the current origin here; everyone else keeps the default.
    fn render_origin(&self) -> Vec3 {
        Vec3::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_item_flags() {
        let bare = HeldItem::default();
        assert!(!bare.can_repair());

        let hammer = HeldItem::new(actions::REPAIR | actions::UPGRADE);
        assert!(hammer.can_repair());

        let wrench = HeldItem::new(actions::SALVAGE);
        assert!(!wrench.can_repair());
    }
}
