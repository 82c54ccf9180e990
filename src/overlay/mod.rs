//! Overlay marker table and reconciliation

pub mod marker;
pub mod reconcile;

pub use marker::{MarkerDesc, MarkerFactory, MarkerId};
pub use reconcile::{Overlay, ReconcileStats};
