//! Proxy mesh synthesis and caching

pub mod proxy;
pub mod cache;

pub use cache::{MeshCache, MeshKey};
pub use proxy::{MeshSource, MeshVertex, ProxyMesh};
