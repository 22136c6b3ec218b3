//! Framebuffer wrapper (`glCreateFramebuffers`).

use gl::types::{GLenum, GLuint};

use crate::renderbuffer::Renderbuffer;
use crate::texture::Texture;

/// Framebuffer binding targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramebufferTarget {
    Framebuffer,
    DrawFramebuffer,
    ReadFramebuffer,
}

impl FramebufferTarget {
    /// Native GL constant
    pub fn to_gl(self) -> GLenum {
        match self {
            FramebufferTarget::Framebuffer => gl::FRAMEBUFFER,
            FramebufferTarget::DrawFramebuffer => gl::DRAW_FRAMEBUFFER,
            FramebufferTarget::ReadFramebuffer => gl::READ_FRAMEBUFFER,
        }
    }
}

/// Framebuffer attachment points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramebufferAttachment {
    Color0,
    Color1,
    Color2,
    Color3,
    Color4,
    Color5,
    Color6,
    Color7,
    Depth,
    Stencil,
    DepthStencil,
}

impl FramebufferAttachment {
    /// Native GL constant
    pub fn to_gl(self) -> GLenum {
        match self {
            FramebufferAttachment::Color0 => gl::COLOR_ATTACHMENT0,
            FramebufferAttachment::Color1 => gl::COLOR_ATTACHMENT1,
            FramebufferAttachment::Color2 => gl::COLOR_ATTACHMENT2,
            FramebufferAttachment::Color3 => gl::COLOR_ATTACHMENT3,
            FramebufferAttachment::Color4 => gl::COLOR_ATTACHMENT4,
            FramebufferAttachment::Color5 => gl::COLOR_ATTACHMENT5,
            FramebufferAttachment::Color6 => gl::COLOR_ATTACHMENT6,
            FramebufferAttachment::Color7 => gl::COLOR_ATTACHMENT7,
            FramebufferAttachment::Depth => gl::DEPTH_ATTACHMENT,
            FramebufferAttachment::Stencil => gl::STENCIL_ATTACHMENT,
            FramebufferAttachment::DepthStencil => gl::DEPTH_STENCIL_ATTACHMENT,
        }
    }
}

/// Framebuffer completeness status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramebufferStatus {
    Complete,
    Undefined,
    IncompleteAttachment,
    IncompleteMissingAttachment,
    IncompleteDrawBuffer,
    IncompleteReadBuffer,
    Unsupported,
    IncompleteMultisample,
    IncompleteLayerTargets,
    Unknown,
}

impl FramebufferStatus {
    /// Translate the native status constant
    pub fn from_gl(status: GLenum) -> Self {
        match status {
            gl::FRAMEBUFFER_COMPLETE => FramebufferStatus::Complete,
            gl::FRAMEBUFFER_UNDEFINED => FramebufferStatus::Undefined,
            gl::FRAMEBUFFER_INCOMPLETE_ATTACHMENT => FramebufferStatus::IncompleteAttachment,
            gl::FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT => {
                FramebufferStatus::IncompleteMissingAttachment
            }
            gl::FRAMEBUFFER_INCOMPLETE_DRAW_BUFFER => FramebufferStatus::IncompleteDrawBuffer,
            gl::FRAMEBUFFER_INCOMPLETE_READ_BUFFER => FramebufferStatus::IncompleteReadBuffer,
            gl::FRAMEBUFFER_UNSUPPORTED => FramebufferStatus::Unsupported,
            gl::FRAMEBUFFER_INCOMPLETE_MULTISAMPLE => FramebufferStatus::IncompleteMultisample,
            gl::FRAMEBUFFER_INCOMPLETE_LAYER_TARGETS => FramebufferStatus::IncompleteLayerTargets,
            _ => FramebufferStatus::Unknown,
        }
    }
}

/// Move-only framebuffer object.
pub struct Framebuffer {
    id: GLuint,
}

impl Framebuffer {
    /// Create a new framebuffer
    pub fn new() -> Self {
        let mut id = 0;
        unsafe {
            gl::CreateFramebuffers(1, &mut id);
        }
        Self { id }
    }

    // ===== BINDING =====

    /// Bind to `target`
    pub fn bind(&self, target: FramebufferTarget) {
        unsafe {
            gl::BindFramebuffer(target.to_gl(), self.id);
        }
    }

    /// Rebind the default framebuffer on `target`
    pub fn unbind(&self, target: FramebufferTarget) {
        unsafe {
            gl::BindFramebuffer(target.to_gl(), 0);
        }
    }

    // ===== ATTACHMENT =====

    /// Attach a renderbuffer
    pub fn attach_renderbuffer(
        &self,
        buffer: &Renderbuffer,
        attachment: FramebufferAttachment,
    ) {
        unsafe {
            gl::NamedFramebufferRenderbuffer(
                self.id,
                attachment.to_gl(),
                gl::RENDERBUFFER,
                buffer.id(),
            );
        }
    }

    /// Attach a texture mip level
    pub fn attach_texture(
        &self,
        texture: &Texture,
        attachment: FramebufferAttachment,
        level: i32,
    ) {
        unsafe {
            gl::NamedFramebufferTexture(self.id, attachment.to_gl(), texture.id(), level);
        }
    }

    // ===== GETTERS =====

    /// Completeness status for `target`
    pub fn status(&self, target: FramebufferTarget) -> FramebufferStatus {
        let status = unsafe { gl::CheckNamedFramebufferStatus(self.id, target.to_gl()) };
        FramebufferStatus::from_gl(status)
    }

    /// Driver handle
    pub fn id(&self) -> GLuint {
        self.id
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Framebuffer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteFramebuffers(1, &self.id);
        }
    }
}

#[cfg(test)]
#[path = "framebuffer_tests.rs"]
mod tests;
