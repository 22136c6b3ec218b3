//! Shader object wrapper with compile-time diagnostics.

use std::ffi::c_char;

use gl::types::{GLenum, GLint, GLuint};

use crate::error::{Error, Result};

/// Shader stages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Geometry,
    TessellationControl,
    TessellationEvaluation,
    Compute,
}

impl ShaderStage {
    /// Native GL constant
    pub fn to_gl(self) -> GLenum {
        match self {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
            ShaderStage::Geometry => gl::GEOMETRY_SHADER,
            ShaderStage::TessellationControl => gl::TESS_CONTROL_SHADER,
            ShaderStage::TessellationEvaluation => gl::TESS_EVALUATION_SHADER,
            ShaderStage::Compute => gl::COMPUTE_SHADER,
        }
    }
}

/// Move-only shader object.
///
/// Compilation happens in `new`; a failed compile surfaces the driver
/// info log as [`Error::ShaderCompile`] and the partially created
/// object is released by `Drop` on the error path.
pub struct Shader {
    id: GLuint,
    stage: ShaderStage,
}

impl Shader {
    /// Create and compile a shader from GLSL source
    pub fn new(stage: ShaderStage, source: &str) -> Result<Self> {
        let id = unsafe { gl::CreateShader(stage.to_gl()) };
        let shader = Self { id, stage };
        shader.load_source(source)?;
        Ok(shader)
    }

    fn load_source(&self, source: &str) -> Result<()> {
        let ptr = source.as_ptr() as *const c_char;
        let len = source.len() as GLint;
        unsafe {
            gl::ShaderSource(self.id, 1, &ptr, &len);
            gl::CompileShader(self.id);
        }

        let mut status = 0;
        let mut log_len = 0;
        unsafe {
            gl::GetShaderiv(self.id, gl::COMPILE_STATUS, &mut status);
            gl::GetShaderiv(self.id, gl::INFO_LOG_LENGTH, &mut log_len);
        }
        if status == gl::TRUE as GLint {
            return Ok(());
        }

        if log_len > 0 {
            let mut log = vec![0u8; log_len as usize];
            unsafe {
                gl::GetShaderInfoLog(
                    self.id,
                    log_len,
                    std::ptr::null_mut(),
                    log.as_mut_ptr() as *mut c_char,
                );
            }
            // Trim the trailing NUL the driver writes.
            let log = String::from_utf8_lossy(&log)
                .trim_end_matches('\0')
                .to_string();
            Err(Error::ShaderCompile(log))
        } else {
            Err(Error::ShaderCompile(
                "unknown shader compilation error".to_string(),
            ))
        }
    }

    /// Stage this shader was created for
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    /// Driver handle
    pub fn id(&self) -> GLuint {
        self.id
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteShader(self.id);
        }
    }
}
