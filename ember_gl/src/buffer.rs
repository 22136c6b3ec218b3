//! Buffer object wrapper (`glCreateBuffers` / `glNamedBufferData`).

use std::ffi::c_void;

use gl::types::{GLbitfield, GLenum, GLsizeiptr, GLuint};

/// Buffer binding targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferTarget {
    Array,
    AtomicCounter,
    CopyRead,
    CopyWrite,
    DispatchIndirect,
    DrawIndirect,
    ElementArray,
    PixelPack,
    PixelUnpack,
    Query,
    ShaderStorage,
    Texture,
    TransformFeedback,
    Uniform,
}

impl BufferTarget {
    /// Native GL constant
    pub fn to_gl(self) -> GLenum {
        match self {
            BufferTarget::Array => gl::ARRAY_BUFFER,
            BufferTarget::AtomicCounter => gl::ATOMIC_COUNTER_BUFFER,
            BufferTarget::CopyRead => gl::COPY_READ_BUFFER,
            BufferTarget::CopyWrite => gl::COPY_WRITE_BUFFER,
            BufferTarget::DispatchIndirect => gl::DISPATCH_INDIRECT_BUFFER,
            BufferTarget::DrawIndirect => gl::DRAW_INDIRECT_BUFFER,
            BufferTarget::ElementArray => gl::ELEMENT_ARRAY_BUFFER,
            BufferTarget::PixelPack => gl::PIXEL_PACK_BUFFER,
            BufferTarget::PixelUnpack => gl::PIXEL_UNPACK_BUFFER,
            BufferTarget::Query => gl::QUERY_BUFFER,
            BufferTarget::ShaderStorage => gl::SHADER_STORAGE_BUFFER,
            BufferTarget::Texture => gl::TEXTURE_BUFFER,
            BufferTarget::TransformFeedback => gl::TRANSFORM_FEEDBACK_BUFFER,
            BufferTarget::Uniform => gl::UNIFORM_BUFFER,
        }
    }
}

/// Usage hints for mutable data stores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferUsage {
    StreamDraw,
    StreamRead,
    StreamCopy,
    StaticDraw,
    StaticRead,
    StaticCopy,
    DynamicDraw,
    DynamicRead,
    DynamicCopy,
}

impl BufferUsage {
    /// Native GL constant
    pub fn to_gl(self) -> GLenum {
        match self {
            BufferUsage::StreamDraw => gl::STREAM_DRAW,
            BufferUsage::StreamRead => gl::STREAM_READ,
            BufferUsage::StreamCopy => gl::STREAM_COPY,
            BufferUsage::StaticDraw => gl::STATIC_DRAW,
            BufferUsage::StaticRead => gl::STATIC_READ,
            BufferUsage::StaticCopy => gl::STATIC_COPY,
            BufferUsage::DynamicDraw => gl::DYNAMIC_DRAW,
            BufferUsage::DynamicRead => gl::DYNAMIC_READ,
            BufferUsage::DynamicCopy => gl::DYNAMIC_COPY,
        }
    }
}

bitflags::bitflags! {
    /// Flags for immutable data stores (`glNamedBufferStorage`)
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StorageFlags: GLbitfield {
        const MAP_READ = gl::MAP_READ_BIT;
        const MAP_WRITE = gl::MAP_WRITE_BIT;
        const MAP_PERSISTENT = gl::MAP_PERSISTENT_BIT;
        const MAP_COHERENT = gl::MAP_COHERENT_BIT;
        const DYNAMIC_STORAGE = gl::DYNAMIC_STORAGE_BIT;
        const CLIENT_STORAGE = gl::CLIENT_STORAGE_BIT;
    }
}

/// Move-only buffer object.
///
/// Construction allocates the driver handle; `Drop` releases it.
pub struct Buffer {
    id: GLuint,
}

impl Buffer {
    /// Create a new buffer object with no data store
    pub fn new() -> Self {
        let mut id = 0;
        unsafe {
            gl::CreateBuffers(1, &mut id);
        }
        Self { id }
    }

    /// Allocate a mutable data store and upload `data`
    pub fn buffer_data<T: bytemuck::Pod>(&self, data: &[T], usage: BufferUsage) {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        unsafe {
            gl::NamedBufferData(
                self.id,
                bytes.len() as GLsizeiptr,
                bytes.as_ptr() as *const c_void,
                usage.to_gl(),
            );
        }
    }

    /// Allocate an immutable data store and upload `data`
    pub fn buffer_storage<T: bytemuck::Pod>(&self, data: &[T], flags: StorageFlags) {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        unsafe {
            gl::NamedBufferStorage(
                self.id,
                bytes.len() as GLsizeiptr,
                bytes.as_ptr() as *const c_void,
                flags.bits(),
            );
        }
    }

    /// Allocate an immutable zero-initialized data store of `size` bytes
    pub fn buffer_storage_empty(&self, size: usize, flags: StorageFlags) {
        unsafe {
            gl::NamedBufferStorage(
                self.id,
                size as GLsizeiptr,
                std::ptr::null(),
                flags.bits(),
            );
        }
    }

    /// Bind to `target`
    pub fn bind(&self, target: BufferTarget) {
        unsafe {
            gl::BindBuffer(target.to_gl(), self.id);
        }
    }

    /// Unbind `target`
    pub fn unbind(&self, target: BufferTarget) {
        unsafe {
            gl::BindBuffer(target.to_gl(), 0);
        }
    }

    /// Driver handle
    pub fn id(&self) -> GLuint {
        self.id
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.id);
        }
    }
}
