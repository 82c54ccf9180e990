//! Scan orchestration: enumerate, filter, reconcile

use std::collections::HashSet;

use super::bounds::iteration_bounds;
use super::config::ScanConfig;
use super::predicate::{is_damaged, scan_allowed};
use crate::core::observer::Observer;
use crate::math::frustum::Frustum;
use crate::mesh::cache::MeshCache;
use crate::overlay::marker::MarkerFactory;
use crate::overlay::reconcile::{Overlay, ReconcileStats};
use crate::world::coord::BlockCoord;
use crate::world::query::WorldQuery;

/// Near plane of the scan frustum
const SCAN_NEAR: f32 = 0.01;

/// Owns the overlay state and drives one scan per tick.
///
/// Constructed once by the host integration layer and handed to the
/// scheduler; nothing here is global, so tests and hosts can run
/// several engines side by side.
pub struct ScanEngine {
    config: ScanConfig,
    overlay: Overlay,
    meshes: MeshCache,
}

impl ScanEngine {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            config: config.sanitized(),
            overlay: Overlay::new(),
            meshes: MeshCache::new(),
        }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Replace the config snapshot wholesale
    pub fn set_config(&mut self, config: ScanConfig) {
        self.config = config.sanitized();
    }

    /// Number of currently displayed markers
    pub fn marker_count(&self) -> usize {
        self.overlay.len()
    }

    /// Run one scan tick.
    ///
    /// `None` for the observer is a transient condition (player still
    /// loading, camera detached); markers are left untouched. A gated
    /// observer clears the overlay instead.
    pub fn scan(
        &mut self,
        observer: Option<&dyn Observer>,
        world: &dyn WorldQuery,
        factory: &mut dyn MarkerFactory,
    ) -> ReconcileStats {
        let Some(observer) = observer else {
            return ReconcileStats::default();
        };

        let damaged = if scan_allowed(observer, &self.config) {
            self.collect_damaged(observer, world)
        } else {
            // Gated off reconciles against the empty set - the overlay
            // clears rather than freezing in place
            HashSet::new()
        };

        log::trace!("scan found {} damaged cells in view", damaged.len());
        self.overlay.reconcile(
            &damaged,
            world,
            &mut self.meshes,
            factory,
            &self.config,
            observer.render_origin(),
        )
    }

    /// Enumerate the damaged cells currently in view.
    ///
    /// Iterates the frustum's integer bounding box in lexicographic
    /// x, y, z order; the exact per-cell frustum test and the damage
    /// predicate decide membership.
    pub fn collect_damaged(
        &self,
        observer: &dyn Observer,
        world: &dyn WorldQuery,
    ) -> HashSet<BlockCoord> {
        let position = observer.position();
        let forward = observer.forward();
        let fov_y = observer.fov_y();
        let aspect = observer.aspect();

        let frustum =
            Frustum::from_observer(position, forward, fov_y, aspect, SCAN_NEAR, self.config.range);
        let (min, max) = iteration_bounds(position, forward, fov_y, aspect, self.config.range);

        let mut damaged = HashSet::new();
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                for z in min.z..=max.z {
                    let coord = BlockCoord::new(x, y, z);
                    if !frustum.intersects_cell(coord.center()) {
                        continue;
                    }
                    if is_damaged(world, coord, &self.config) {
                        damaged.insert(coord);
                    }
                }
            }
        }
        damaged
    }

    /// Destroy all markers and release cached meshes.
    ///
    /// Hosts call this on every shutdown path, including abnormal
    /// teardown, so no marker outlives the engine.
    pub fn shutdown(&mut self, factory: &mut dyn MarkerFactory) {
        self.overlay.clear(factory);
        self.meshes.clear();
        log::info!("scan engine shut down, overlay cleared");
    }
}
