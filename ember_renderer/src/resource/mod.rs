//! Asset ingestion: vertices, OBJ meshes, shaders, and textures.
//!
//! Loaders return host-side data or ready GPU objects; every failure
//! surfaces as an [`Error`](crate::Error) and no partial result is
//! produced.

mod obj_loader;
mod shader_loader;
mod texture_loader;
mod vertex;

pub use obj_loader::{obj_from_file, obj_from_reader, obj_from_str};
pub use shader_loader::{shader_from_file, shader_from_source};
pub use texture_loader::{texture2d_from_bytes, texture2d_from_file};
pub use vertex::Vertex;
