//! Damage predicate and activation gating

use super::config::ScanConfig;
use crate::core::observer::Observer;
use crate::world::coord::BlockCoord;
use crate::world::query::WorldQuery;

/// Decide whether the cell at `coord` should be highlighted.
///
/// Fails closed: air cells, zero-capacity blocks and (when configured)
/// terrain are never highlighted. The damage fraction must strictly
/// exceed the configured threshold.
pub fn is_damaged(world: &dyn WorldQuery, coord: BlockCoord, config: &ScanConfig) -> bool {
    let Some(state) = world.block(coord) else {
        return false;
    };
    if config.ignore_terrain && state.is_terrain {
        return false;
    }
    if state.max_damage == 0 {
        return false;
    }
    state.damage_ratio() > config.damage_threshold
}

/// Whether scanning may proceed for this observer.
///
/// With gating enabled the held item must carry the repair action. The
/// caller reconciles against the empty set when this returns false, so
/// a lowered tool clears the overlay instead of freezing it.
pub fn scan_allowed(observer: &dyn Observer, config: &ScanConfig) -> bool {
    if !config.only_with_repair_tool {
        return true;
    }
    observer.held_item().is_some_and(|item| item.can_repair())
}
