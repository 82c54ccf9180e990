//! Marker handles and the visual-object factory boundary

use std::sync::Arc;

use crate::core::types::{Quat, Result, Vec3};
use crate::mesh::proxy::ProxyMesh;

/// Opaque handle to one created highlight object
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MarkerId(pub u64);

/// Everything the render layer needs to instantiate one highlight
#[derive(Clone, Debug)]
pub struct MarkerDesc {
    /// Shared proxy geometry for the block's shape
    pub mesh: Arc<ProxyMesh>,
    /// Position in render space (world minus the floating origin)
    pub position: Vec3,
    /// Visual rotation for the block's orientation
    pub rotation: Quat,
    /// Uniform scale
    pub scale: f32,
    /// RGBA highlight color
    pub color: [f32; 4],
}

/// Creates and destroys highlight objects on the render/world-object
/// layer.
///
/// Owned by the host; the engine only holds the returned ids.
pub trait MarkerFactory {
    /// Create a marker. Failure aborts that cell's highlight only; the
    /// engine retries on a later tick.
    fn create_marker(&mut self, desc: &MarkerDesc) -> Result<MarkerId>;

    /// Destroy a previously created marker
    fn destroy_marker(&mut self, id: MarkerId);
}
