/*!
# Ember GL

Thin move-only veneer over the OpenGL 4.6 direct-state-access API.

Every wrapper type owns exactly one driver handle: construction
allocates the driver-side object, `Drop` releases it, and copying is
impossible. Methods forward their arguments straight to the
corresponding GL entry points with enum-to-constant translation and
nothing else — no validation, batching, or caching beyond what the
driver itself performs.

## Types

- **Buffer**: data store (`glCreateBuffers` family)
- **Texture**: image store (`glCreateTextures` family)
- **Renderbuffer** / **Framebuffer**: render-target plumbing
- **VertexArray**: attribute layout and buffer bindings
- **Shader** / **ShaderProgram**: compilation and linking, failing with
  the driver's info log

The caller is responsible for having a current 4.6 core context and
for loading the function pointers ([`context::load_with`]) before
constructing any wrapper.
*/

mod error;
mod types;
mod buffer;
mod texture;
mod renderbuffer;
mod framebuffer;
mod vertex_array;
mod shader;
mod shader_program;
pub mod context;

pub use error::{Error, Result};
pub use types::{
    ComparisonFunction, DataFormat, DataType, MagFilter, MinFilter, TextureCompareMode, WrapMode,
};
pub use buffer::{Buffer, BufferTarget, BufferUsage, StorageFlags};
pub use texture::{Texture, TextureParameter, TextureTarget};
pub use renderbuffer::Renderbuffer;
pub use framebuffer::{Framebuffer, FramebufferAttachment, FramebufferStatus, FramebufferTarget};
pub use vertex_array::{Attribute, VertexArray, VertexLayout};
pub use shader::{Shader, ShaderStage};
pub use shader_program::ShaderProgram;
