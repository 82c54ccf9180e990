//! Diff-and-patch reconciliation of the marker table

use std::collections::{HashMap, HashSet};

use super::marker::{MarkerDesc, MarkerFactory, MarkerId};
use crate::core::types::Vec3;
use crate::mesh::cache::MeshCache;
use crate::scan::config::ScanConfig;
use crate::world::coord::BlockCoord;
use crate::world::query::WorldQuery;

/// Create/destroy counts for one reconciliation pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    pub created: usize,
    pub destroyed: usize,
}

impl ReconcileStats {
    /// Total marker operations performed
    pub fn churn(&self) -> usize {
        self.created + self.destroyed
    }
}

/// Table of live highlight markers, keyed by cell.
///
/// The key set always equals the set of cells currently displaying a
/// marker; destruction and removal happen in the same step, so the
/// table never holds a dead id.
pub struct Overlay {
    markers: HashMap<BlockCoord, MarkerId>,
}

impl Overlay {
    pub fn new() -> Self {
        Self {
            markers: HashMap::new(),
        }
    }

    /// Number of live markers
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Check if a cell currently displays a marker
    pub fn contains(&self, coord: BlockCoord) -> bool {
        self.markers.contains_key(&coord)
    }

    /// Iterate over the cells currently displaying a marker
    pub fn coords(&self) -> impl Iterator<Item = &BlockCoord> {
        self.markers.keys()
    }

    /// Reconcile the table against this tick's damaged set.
    ///
    /// Stale markers are destroyed, missing ones created, cells present
    /// in both are left untouched. Total churn equals the symmetric
    /// difference of the old and new sets.
    pub fn reconcile(
        &mut self,
        damaged: &HashSet<BlockCoord>,
        world: &dyn WorldQuery,
        meshes: &mut MeshCache,
        factory: &mut dyn MarkerFactory,
        config: &ScanConfig,
        render_origin: Vec3,
    ) -> ReconcileStats {
        let mut stats = ReconcileStats::default();

        // Destroy markers whose cell is no longer damaged
        let stale: Vec<BlockCoord> = self
            .markers
            .keys()
            .filter(|coord| !damaged.contains(coord))
            .copied()
            .collect();
        for coord in stale {
            if let Some(id) = self.markers.remove(&coord) {
                factory.destroy_marker(id);
                stats.destroyed += 1;
            }
        }

        // Create markers for newly damaged cells
        for &coord in damaged {
            if self.markers.contains_key(&coord) {
                continue;
            }
            let Some(state) = world.block(coord) else {
                // Cell emptied between scan and reconcile
                log::debug!("no block state at {:?}, skipping marker", coord);
                continue;
            };

            let mesh = meshes.get_or_build(&state);
            // Synthesized meshes are already nudged past the surface;
            // only the cube proxy takes the configured scale
            let scale = if mesh.is_cube_fallback() {
                config.highlight_scale
            } else {
                1.0
            };
            let desc = MarkerDesc {
                mesh,
                position: coord.center() - render_origin,
                rotation: state.shape.rotation(state.orientation),
                scale,
                color: config.highlight_color,
            };

            match factory.create_marker(&desc) {
                Ok(id) => {
                    self.markers.insert(coord, id);
                    stats.created += 1;
                }
                Err(e) => log::warn!("marker creation failed at {:?}: {}", coord, e),
            }
        }

        stats
    }

    /// Destroy every marker and empty the table
    pub fn clear(&mut self, factory: &mut dyn MarkerFactory) {
        for (_, id) in self.markers.drain() {
            factory.destroy_marker(id);
        }
    }
}

impl Default for Overlay {
    fn default() -> Self {
        Self::new()
    }
}
