mod mesh;
mod mesh_behavior;
mod mesh_handle;

pub use mesh::Mesh;
pub use mesh_behavior::{MeshBehavior, NoopBehavior};
pub use mesh_handle::MeshHandle;
