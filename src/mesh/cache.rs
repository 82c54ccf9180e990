//! Shared proxy-mesh cache

use std::collections::HashMap;
use std::sync::Arc;

use super::proxy::{synthesize, ProxyMesh};
use crate::world::block::BlockState;

/// Cache key: block type plus orientation-relevant metadata
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshKey {
    pub type_id: u16,
    pub orientation: u8,
}

impl MeshKey {
    pub fn for_block(state: &BlockState) -> Self {
        Self {
            type_id: state.shape.type_id,
            orientation: state.orientation,
        }
    }
}

/// Proxy meshes shared by every marker with the same key.
///
/// Entries are built once and handed out as read-only `Arc`s. Cube
/// fallbacks are cached too, so failed synthesis is not retried every
/// tick. The cache lives for the whole engine and is cleared only at
/// shutdown.
pub struct MeshCache {
    meshes: HashMap<MeshKey, Arc<ProxyMesh>>,
}

impl MeshCache {
    pub fn new() -> Self {
        Self {
            meshes: HashMap::new(),
        }
    }

    /// Get the proxy mesh for a block, synthesizing it on first use
    pub fn get_or_build(&mut self, state: &BlockState) -> Arc<ProxyMesh> {
        let key = MeshKey::for_block(state);
        self.meshes
            .entry(key)
            .or_insert_with(|| Arc::new(synthesize(&state.shape)))
            .clone()
    }

    /// Check if a key already has a cached mesh
    pub fn contains(&self, key: MeshKey) -> bool {
        self.meshes.contains_key(&key)
    }

    /// Number of cached meshes
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Release every cached mesh
    pub fn clear(&mut self) {
        self.meshes.clear();
    }
}

impl Default for MeshCache {
    fn default() -> Self {
        Self::new()
    }
}
