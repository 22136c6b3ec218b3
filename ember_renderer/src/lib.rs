/*!
# Ember Renderer

Camera math, mesh loading, and a single-mesh forward renderer built on
the [`ember_gl`] veneer.

## Architecture

- **Camera**: position + quaternion orientation, view-matrix derivation
- **PerspectiveCamera / OrthoCamera**: projection-matrix derivation
- **resource**: OBJ ingestion with indexed-mesh deduplication, shader
  and texture loaders
- **Renderer**: one camera, one program, one vertex array, one indexed
  draw call per frame

The renderer performs no batching, culling, or scene management; data
is prepared once at startup and drawn every frame.
*/

mod error;
mod renderer;
pub mod log;
pub mod camera;
pub mod resource;

pub use error::{Error, Result};
pub use camera::{Camera, OrthoCamera, PerspectiveCamera};
pub use renderer::{PointLight, Renderer};

// Re-export math library at crate root
pub use glam;
