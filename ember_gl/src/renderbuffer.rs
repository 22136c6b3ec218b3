//! Renderbuffer wrapper (`glCreateRenderbuffers`).

use gl::types::GLuint;

use crate::types::DataFormat;

/// Move-only renderbuffer object.
pub struct Renderbuffer {
    id: GLuint,
}

impl Renderbuffer {
    /// Create a new renderbuffer
    pub fn new() -> Self {
        let mut id = 0;
        unsafe {
            gl::CreateRenderbuffers(1, &mut id);
        }
        Self { id }
    }

    /// Bind to the renderbuffer target
    pub fn bind(&self) {
        unsafe {
            gl::BindRenderbuffer(gl::RENDERBUFFER, self.id);
        }
    }

    /// Unbind the renderbuffer target
    pub fn unbind(&self) {
        unsafe {
            gl::BindRenderbuffer(gl::RENDERBUFFER, 0);
        }
    }

    /// Allocate storage
    pub fn storage(&self, internal_format: DataFormat, width: i32, height: i32) {
        unsafe {
            gl::NamedRenderbufferStorage(self.id, internal_format.to_gl(), width, height);
        }
    }

    /// Driver handle
    pub fn id(&self) -> GLuint {
        self.id
    }
}

impl Default for Renderbuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Renderbuffer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteRenderbuffers(1, &self.id);
        }
    }
}
