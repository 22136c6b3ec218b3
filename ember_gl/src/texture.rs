//! Texture object wrapper (`glCreateTextures` / `glTextureStorage*`).

use std::ffi::c_void;

use gl::types::{GLenum, GLint, GLintptr, GLsizei, GLsizeiptr, GLuint};

use crate::buffer::Buffer;
use crate::types::{DataFormat, DataType};

/// Texture targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureTarget {
    Texture1D,
    Texture2D,
    Texture3D,
    Texture1DArray,
    Texture2DArray,
    TextureRectangle,
    TextureCubeMap,
    TextureCubeMapArray,
    TextureBuffer,
    Texture2DMultisample,
    Texture2DMultisampleArray,
}

impl TextureTarget {
    /// Native GL constant
    pub fn to_gl(self) -> GLenum {
        match self {
            TextureTarget::Texture1D => gl::TEXTURE_1D,
            TextureTarget::Texture2D => gl::TEXTURE_2D,
            TextureTarget::Texture3D => gl::TEXTURE_3D,
            TextureTarget::Texture1DArray => gl::TEXTURE_1D_ARRAY,
            TextureTarget::Texture2DArray => gl::TEXTURE_2D_ARRAY,
            TextureTarget::TextureRectangle => gl::TEXTURE_RECTANGLE,
            TextureTarget::TextureCubeMap => gl::TEXTURE_CUBE_MAP,
            TextureTarget::TextureCubeMapArray => gl::TEXTURE_CUBE_MAP_ARRAY,
            TextureTarget::TextureBuffer => gl::TEXTURE_BUFFER,
            TextureTarget::Texture2DMultisample => gl::TEXTURE_2D_MULTISAMPLE,
            TextureTarget::Texture2DMultisampleArray => gl::TEXTURE_2D_MULTISAMPLE_ARRAY,
        }
    }
}

/// Texture parameter names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureParameter {
    DepthStencilTextureMode,
    BaseLevel,
    BorderColor,
    CompareFunc,
    CompareMode,
    LodBias,
    MinFilter,
    MagFilter,
    MinLod,
    MaxLod,
    MaxLevel,
    SwizzleR,
    SwizzleG,
    SwizzleB,
    SwizzleA,
    WrapS,
    WrapT,
    WrapR,
}

impl TextureParameter {
    /// Native GL constant
    pub fn to_gl(self) -> GLenum {
        match self {
            TextureParameter::DepthStencilTextureMode => gl::DEPTH_STENCIL_TEXTURE_MODE,
            TextureParameter::BaseLevel => gl::TEXTURE_BASE_LEVEL,
            TextureParameter::BorderColor => gl::TEXTURE_BORDER_COLOR,
            TextureParameter::CompareFunc => gl::TEXTURE_COMPARE_FUNC,
            TextureParameter::CompareMode => gl::TEXTURE_COMPARE_MODE,
            TextureParameter::LodBias => gl::TEXTURE_LOD_BIAS,
            TextureParameter::MinFilter => gl::TEXTURE_MIN_FILTER,
            TextureParameter::MagFilter => gl::TEXTURE_MAG_FILTER,
            TextureParameter::MinLod => gl::TEXTURE_MIN_LOD,
            TextureParameter::MaxLod => gl::TEXTURE_MAX_LOD,
            TextureParameter::MaxLevel => gl::TEXTURE_MAX_LEVEL,
            TextureParameter::SwizzleR => gl::TEXTURE_SWIZZLE_R,
            TextureParameter::SwizzleG => gl::TEXTURE_SWIZZLE_G,
            TextureParameter::SwizzleB => gl::TEXTURE_SWIZZLE_B,
            TextureParameter::SwizzleA => gl::TEXTURE_SWIZZLE_A,
            TextureParameter::WrapS => gl::TEXTURE_WRAP_S,
            TextureParameter::WrapT => gl::TEXTURE_WRAP_T,
            TextureParameter::WrapR => gl::TEXTURE_WRAP_R,
        }
    }
}

/// Move-only texture object.
pub struct Texture {
    id: GLuint,
}

impl Texture {
    /// Create a new texture of the given target
    pub fn new(target: TextureTarget) -> Self {
        let mut id = 0;
        unsafe {
            gl::CreateTextures(target.to_gl(), 1, &mut id);
        }
        Self { id }
    }

    // ===== BINDING =====

    /// Bind to `target`
    pub fn bind(&self, target: TextureTarget) {
        unsafe {
            gl::BindTexture(target.to_gl(), self.id);
        }
    }

    /// Unbind `target`
    pub fn unbind(&self, target: TextureTarget) {
        unsafe {
            gl::BindTexture(target.to_gl(), 0);
        }
    }

    /// Bind to a texture unit
    pub fn bind_unit(&self, unit: u32) {
        unsafe {
            gl::BindTextureUnit(unit, self.id);
        }
    }

    /// Unbind a texture unit
    pub fn unbind_unit(&self, unit: u32) {
        unsafe {
            gl::BindTextureUnit(unit, 0);
        }
    }

    // ===== PARAMETERS =====

    /// Set a float parameter
    pub fn parameter_f(&self, pname: TextureParameter, param: f32) {
        unsafe {
            gl::TextureParameterf(self.id, pname.to_gl(), param);
        }
    }

    /// Set an integer parameter
    pub fn parameter_i(&self, pname: TextureParameter, param: i32) {
        unsafe {
            gl::TextureParameteri(self.id, pname.to_gl(), param as GLint);
        }
    }

    /// Set a float-vector parameter (e.g. border color)
    pub fn parameter_fv(&self, pname: TextureParameter, params: &[f32]) {
        unsafe {
            gl::TextureParameterfv(self.id, pname.to_gl(), params.as_ptr());
        }
    }

    // ===== STORAGE =====

    /// Attach a buffer as the texture's data store (buffer textures)
    pub fn buffer(&self, internal_format: DataFormat, buffer: &Buffer) {
        unsafe {
            gl::TextureBuffer(self.id, internal_format.to_gl(), buffer.id());
        }
    }

    /// Attach a buffer range as the texture's data store
    pub fn buffer_range(
        &self,
        internal_format: DataFormat,
        buffer: &Buffer,
        offset: isize,
        size: usize,
    ) {
        unsafe {
            gl::TextureBufferRange(
                self.id,
                internal_format.to_gl(),
                buffer.id(),
                offset as GLintptr,
                size as GLsizeiptr,
            );
        }
    }

    /// Allocate immutable 1D storage
    pub fn storage_1d(&self, levels: i32, internal_format: DataFormat, width: i32) {
        unsafe {
            gl::TextureStorage1D(self.id, levels as GLsizei, internal_format.to_gl(), width);
        }
    }

    /// Allocate immutable 2D storage
    pub fn storage_2d(&self, levels: i32, internal_format: DataFormat, width: i32, height: i32) {
        unsafe {
            gl::TextureStorage2D(
                self.id,
                levels as GLsizei,
                internal_format.to_gl(),
                width,
                height,
            );
        }
    }

    /// Allocate immutable 3D storage
    pub fn storage_3d(
        &self,
        levels: i32,
        internal_format: DataFormat,
        width: i32,
        height: i32,
        depth: i32,
    ) {
        unsafe {
            gl::TextureStorage3D(
                self.id,
                levels as GLsizei,
                internal_format.to_gl(),
                width,
                height,
                depth,
            );
        }
    }

    // ===== UPLOAD =====

    /// Upload pixels into a 1D storage region
    pub fn sub_image_1d<T: bytemuck::Pod>(
        &self,
        level: i32,
        xoffset: i32,
        width: i32,
        format: DataFormat,
        data_type: DataType,
        pixels: &[T],
    ) {
        unsafe {
            gl::TextureSubImage1D(
                self.id,
                level,
                xoffset,
                width,
                format.to_gl(),
                data_type.to_gl(),
                pixels.as_ptr() as *const c_void,
            );
        }
    }

    /// Upload pixels into a 2D storage region
    pub fn sub_image_2d<T: bytemuck::Pod>(
        &self,
        level: i32,
        xoffset: i32,
        yoffset: i32,
        width: i32,
        height: i32,
        format: DataFormat,
        data_type: DataType,
        pixels: &[T],
    ) {
        unsafe {
            gl::TextureSubImage2D(
                self.id,
                level,
                xoffset,
                yoffset,
                width,
                height,
                format.to_gl(),
                data_type.to_gl(),
                pixels.as_ptr() as *const c_void,
            );
        }
    }

    /// Upload pixels into a 3D storage region
    #[allow(clippy::too_many_arguments)]
    pub fn sub_image_3d<T: bytemuck::Pod>(
        &self,
        level: i32,
        xoffset: i32,
        yoffset: i32,
        zoffset: i32,
        width: i32,
        height: i32,
        depth: i32,
        format: DataFormat,
        data_type: DataType,
        pixels: &[T],
    ) {
        unsafe {
            gl::TextureSubImage3D(
                self.id,
                level,
                xoffset,
                yoffset,
                zoffset,
                width,
                height,
                depth,
                format.to_gl(),
                data_type.to_gl(),
                pixels.as_ptr() as *const c_void,
            );
        }
    }

    // ===== MIPMAP =====

    /// Generate the mipmap chain from level 0
    pub fn generate_mipmap(&self) {
        unsafe {
            gl::GenerateTextureMipmap(self.id);
        }
    }

    /// Driver handle
    pub fn id(&self) -> GLuint {
        self.id
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteTextures(1, &self.id);
        }
    }
}
