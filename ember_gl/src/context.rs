//! Global context state and draw commands.
//!
//! These are the handful of non-object GL calls a renderer needs:
//! capability toggles, clear state, viewport, and the draw call itself.

use gl::types::{GLenum, GLsizei};

use crate::types::{ComparisonFunction, DataType};

/// Context capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Blend,
    CullFace,
    DepthTest,
    ScissorTest,
    StencilTest,
    Multisample,
    FramebufferSrgb,
}

impl Capability {
    /// Native GL constant
    pub fn to_gl(self) -> GLenum {
        match self {
            Capability::Blend => gl::BLEND,
            Capability::CullFace => gl::CULL_FACE,
            Capability::DepthTest => gl::DEPTH_TEST,
            Capability::ScissorTest => gl::SCISSOR_TEST,
            Capability::StencilTest => gl::STENCIL_TEST,
            Capability::Multisample => gl::MULTISAMPLE,
            Capability::FramebufferSrgb => gl::FRAMEBUFFER_SRGB,
        }
    }
}

/// Blend factors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendFactor {
    Zero,
    One,
    SrcColor,
    OneMinusSrcColor,
    DstColor,
    OneMinusDstColor,
    SrcAlpha,
    OneMinusSrcAlpha,
    DstAlpha,
    OneMinusDstAlpha,
}

impl BlendFactor {
    /// Native GL constant
    pub fn to_gl(self) -> GLenum {
        match self {
            BlendFactor::Zero => gl::ZERO,
            BlendFactor::One => gl::ONE,
            BlendFactor::SrcColor => gl::SRC_COLOR,
            BlendFactor::OneMinusSrcColor => gl::ONE_MINUS_SRC_COLOR,
            BlendFactor::DstColor => gl::DST_COLOR,
            BlendFactor::OneMinusDstColor => gl::ONE_MINUS_DST_COLOR,
            BlendFactor::SrcAlpha => gl::SRC_ALPHA,
            BlendFactor::OneMinusSrcAlpha => gl::ONE_MINUS_SRC_ALPHA,
            BlendFactor::DstAlpha => gl::DST_ALPHA,
            BlendFactor::OneMinusDstAlpha => gl::ONE_MINUS_DST_ALPHA,
        }
    }
}

/// Primitive assembly modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    Points,
    Lines,
    LineStrip,
    LineLoop,
    Triangles,
    TriangleStrip,
    TriangleFan,
}

impl DrawMode {
    /// Native GL constant
    pub fn to_gl(self) -> GLenum {
        match self {
            DrawMode::Points => gl::POINTS,
            DrawMode::Lines => gl::LINES,
            DrawMode::LineStrip => gl::LINE_STRIP,
            DrawMode::LineLoop => gl::LINE_LOOP,
            DrawMode::Triangles => gl::TRIANGLES,
            DrawMode::TriangleStrip => gl::TRIANGLE_STRIP,
            DrawMode::TriangleFan => gl::TRIANGLE_FAN,
        }
    }
}

bitflags::bitflags! {
    /// Buffers selectable by [`clear`]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClearMask: u32 {
        const COLOR = gl::COLOR_BUFFER_BIT;
        const DEPTH = gl::DEPTH_BUFFER_BIT;
        const STENCIL = gl::STENCIL_BUFFER_BIT;
    }
}

/// Load GL function pointers through a platform loader
///
/// Must run once after the context is made current, before any other
/// call in this crate.
pub fn load_with<F: FnMut(&'static str) -> *const std::ffi::c_void>(loader: F) {
    gl::load_with(loader);
}

/// Set the viewport rectangle
pub fn viewport(x: i32, y: i32, width: i32, height: i32) {
    unsafe {
        gl::Viewport(x, y, width as GLsizei, height as GLsizei);
    }
}

/// Enable a capability
pub fn enable(capability: Capability) {
    unsafe {
        gl::Enable(capability.to_gl());
    }
}

/// Disable a capability
pub fn disable(capability: Capability) {
    unsafe {
        gl::Disable(capability.to_gl());
    }
}

/// Set the depth comparison function
pub fn depth_func(func: ComparisonFunction) {
    unsafe {
        gl::DepthFunc(func.to_gl());
    }
}

/// Set the blend factors
pub fn blend_func(src: BlendFactor, dst: BlendFactor) {
    unsafe {
        gl::BlendFunc(src.to_gl(), dst.to_gl());
    }
}

/// Set the clear color
pub fn clear_color(r: f32, g: f32, b: f32, a: f32) {
    unsafe {
        gl::ClearColor(r, g, b, a);
    }
}

/// Clear the selected buffers
pub fn clear(mask: ClearMask) {
    unsafe {
        gl::Clear(mask.bits());
    }
}

/// Issue an indexed draw over the bound vertex array
pub fn draw_elements(mode: DrawMode, count: i32, index_type: DataType) {
    unsafe {
        gl::DrawElements(
            mode.to_gl(),
            count as GLsizei,
            index_type.to_gl(),
            std::ptr::null(),
        );
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
