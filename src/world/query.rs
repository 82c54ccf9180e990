//! World access boundary

use super::block::BlockState;
use super::coord::BlockCoord;

/// Read-only world access used during a scan.
///
/// Called for every candidate cell, thousands of times per tick;
/// implementations must be cheap and side-effect free. `None` covers
/// air, unloaded and otherwise unreadable cells, so a single bad cell
/// never aborts a scan.
pub trait WorldQuery {
    /// Block state at `coord`, or `None` for empty cells
    fn block(&self, coord: BlockCoord) -> Option<BlockState>;
}
