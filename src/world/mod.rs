//! World-facing data model and query boundary

pub mod coord;
pub mod block;
pub mod query;

pub use block::{BlockShape, BlockState, FaceGeometry};
pub use coord::BlockCoord;
pub use query::WorldQuery;
