//! Closed enums for GL constants shared across resource types.
//!
//! Each enum covers one concern and maps onto the native constant set
//! through `to_gl()`. Keeping the variants closed means an invalid
//! constant can never reach the driver.

use gl::types::GLenum;

/// Component data types accepted by vertex and pixel transfer paths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Float,
    HalfFloat,
    Double,
    UnsignedByte,
    Byte,
    UnsignedShort,
    Short,
    UnsignedInt,
    Int,
}

impl DataType {
    /// Native GL constant
    pub fn to_gl(self) -> GLenum {
        match self {
            DataType::Float => gl::FLOAT,
            DataType::HalfFloat => gl::HALF_FLOAT,
            DataType::Double => gl::DOUBLE,
            DataType::UnsignedByte => gl::UNSIGNED_BYTE,
            DataType::Byte => gl::BYTE,
            DataType::UnsignedShort => gl::UNSIGNED_SHORT,
            DataType::Short => gl::SHORT,
            DataType::UnsignedInt => gl::UNSIGNED_INT,
            DataType::Int => gl::INT,
        }
    }
}

/// Pixel and storage formats.
///
/// Base formats describe transfer data, sized formats describe
/// immutable storage allocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    // Base formats
    R,
    Rg,
    Rgb,
    Rgba,

    // Sized normalized formats
    R8,
    R8Snorm,
    R16,
    R16Snorm,
    Rg8,
    Rg8Snorm,
    Rg16,
    Rg16Snorm,
    Rgb8,
    Rgb8Snorm,
    Rgb16Snorm,
    Rgba8,
    Rgba8Snorm,
    Rgb10A2,
    Rgba12,
    Rgba16,
    Srgb8,
    Srgb8Alpha8,

    // Floating-point formats
    R16F,
    Rg16F,
    Rgb16F,
    Rgba16F,
    R32F,
    Rg32F,
    Rgb32F,
    Rgba32F,
    R11FG11FB10F,
    Rgb9E5,

    // Integer formats
    R8I,
    R8UI,
    R16I,
    R16UI,
    R32I,
    R32UI,
    Rg32I,
    Rg32UI,
    Rgba32I,
    Rgba32UI,

    // Depth / stencil formats
    DepthComponent16,
    DepthComponent24,
    DepthComponent32F,
    Depth24Stencil8,
    Depth32FStencil8,
    StencilIndex8,
}

impl DataFormat {
    /// Native GL constant
    pub fn to_gl(self) -> GLenum {
        match self {
            DataFormat::R => gl::RED,
            DataFormat::Rg => gl::RG,
            DataFormat::Rgb => gl::RGB,
            DataFormat::Rgba => gl::RGBA,

            DataFormat::R8 => gl::R8,
            DataFormat::R8Snorm => gl::R8_SNORM,
            DataFormat::R16 => gl::R16,
            DataFormat::R16Snorm => gl::R16_SNORM,
            DataFormat::Rg8 => gl::RG8,
            DataFormat::Rg8Snorm => gl::RG8_SNORM,
            DataFormat::Rg16 => gl::RG16,
            DataFormat::Rg16Snorm => gl::RG16_SNORM,
            DataFormat::Rgb8 => gl::RGB8,
            DataFormat::Rgb8Snorm => gl::RGB8_SNORM,
            DataFormat::Rgb16Snorm => gl::RGB16_SNORM,
            DataFormat::Rgba8 => gl::RGBA8,
            DataFormat::Rgba8Snorm => gl::RGBA8_SNORM,
            DataFormat::Rgb10A2 => gl::RGB10_A2,
            DataFormat::Rgba12 => gl::RGBA12,
            DataFormat::Rgba16 => gl::RGBA16,
            DataFormat::Srgb8 => gl::SRGB8,
            DataFormat::Srgb8Alpha8 => gl::SRGB8_ALPHA8,

            DataFormat::R16F => gl::R16F,
            DataFormat::Rg16F => gl::RG16F,
            DataFormat::Rgb16F => gl::RGB16F,
            DataFormat::Rgba16F => gl::RGBA16F,
            DataFormat::R32F => gl::R32F,
            DataFormat::Rg32F => gl::RG32F,
            DataFormat::Rgb32F => gl::RGB32F,
            DataFormat::Rgba32F => gl::RGBA32F,
            DataFormat::R11FG11FB10F => gl::R11F_G11F_B10F,
            DataFormat::Rgb9E5 => gl::RGB9_E5,

            DataFormat::R8I => gl::R8I,
            DataFormat::R8UI => gl::R8UI,
            DataFormat::R16I => gl::R16I,
            DataFormat::R16UI => gl::R16UI,
            DataFormat::R32I => gl::R32I,
            DataFormat::R32UI => gl::R32UI,
            DataFormat::Rg32I => gl::RG32I,
            DataFormat::Rg32UI => gl::RG32UI,
            DataFormat::Rgba32I => gl::RGBA32I,
            DataFormat::Rgba32UI => gl::RGBA32UI,

            DataFormat::DepthComponent16 => gl::DEPTH_COMPONENT16,
            DataFormat::DepthComponent24 => gl::DEPTH_COMPONENT24,
            DataFormat::DepthComponent32F => gl::DEPTH_COMPONENT32F,
            DataFormat::Depth24Stencil8 => gl::DEPTH24_STENCIL8,
            DataFormat::Depth32FStencil8 => gl::DEPTH32F_STENCIL8,
            DataFormat::StencilIndex8 => gl::STENCIL_INDEX8,
        }
    }
}

/// Depth / texture comparison functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonFunction {
    LessEqual,
    GreaterEqual,
    Less,
    Greater,
    Equal,
    NotEqual,
    Always,
    Never,
}

impl ComparisonFunction {
    /// Native GL constant
    pub fn to_gl(self) -> GLenum {
        match self {
            ComparisonFunction::LessEqual => gl::LEQUAL,
            ComparisonFunction::GreaterEqual => gl::GEQUAL,
            ComparisonFunction::Less => gl::LESS,
            ComparisonFunction::Greater => gl::GREATER,
            ComparisonFunction::Equal => gl::EQUAL,
            ComparisonFunction::NotEqual => gl::NOTEQUAL,
            ComparisonFunction::Always => gl::ALWAYS,
            ComparisonFunction::Never => gl::NEVER,
        }
    }
}

/// Texture compare mode (for shadow samplers)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureCompareMode {
    CompareRefToTexture,
    None,
}

impl TextureCompareMode {
    /// Native GL constant
    pub fn to_gl(self) -> GLenum {
        match self {
            TextureCompareMode::CompareRefToTexture => gl::COMPARE_REF_TO_TEXTURE,
            TextureCompareMode::None => gl::NONE,
        }
    }
}

/// Minification filters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinFilter {
    Nearest,
    Linear,
    NearestMipmapNearest,
    LinearMipmapNearest,
    NearestMipmapLinear,
    LinearMipmapLinear,
}

impl MinFilter {
    /// Native GL constant
    pub fn to_gl(self) -> GLenum {
        match self {
            MinFilter::Nearest => gl::NEAREST,
            MinFilter::Linear => gl::LINEAR,
            MinFilter::NearestMipmapNearest => gl::NEAREST_MIPMAP_NEAREST,
            MinFilter::LinearMipmapNearest => gl::LINEAR_MIPMAP_NEAREST,
            MinFilter::NearestMipmapLinear => gl::NEAREST_MIPMAP_LINEAR,
            MinFilter::LinearMipmapLinear => gl::LINEAR_MIPMAP_LINEAR,
        }
    }
}

/// Magnification filters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MagFilter {
    Nearest,
    Linear,
}

impl MagFilter {
    /// Native GL constant
    pub fn to_gl(self) -> GLenum {
        match self {
            MagFilter::Nearest => gl::NEAREST,
            MagFilter::Linear => gl::LINEAR,
        }
    }
}

/// Texture coordinate wrap modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    ClampToEdge,
    ClampToBorder,
    MirroredRepeat,
    Repeat,
    MirrorClampToEdge,
}

impl WrapMode {
    /// Native GL constant
    pub fn to_gl(self) -> GLenum {
        match self {
            WrapMode::ClampToEdge => gl::CLAMP_TO_EDGE,
            WrapMode::ClampToBorder => gl::CLAMP_TO_BORDER,
            WrapMode::MirroredRepeat => gl::MIRRORED_REPEAT,
            WrapMode::Repeat => gl::REPEAT,
            WrapMode::MirrorClampToEdge => gl::MIRROR_CLAMP_TO_EDGE,
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
