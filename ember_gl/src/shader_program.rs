//! Shader program wrapper: attach, link, uniforms, introspection.

use std::ffi::{c_char, CString};

use gl::types::{GLenum, GLint, GLsizei, GLuint};

use crate::error::{Error, Result};
use crate::shader::Shader;

/// Move-only shader program object.
pub struct ShaderProgram {
    id: GLuint,
}

impl ShaderProgram {
    /// Create an empty program
    pub fn new() -> Self {
        let id = unsafe { gl::CreateProgram() };
        Self { id }
    }

    /// Create a program from compiled shaders and link it.
    ///
    /// The shaders are detached again after a successful link, matching
    /// the usual attach / link / detach sequence.
    pub fn from_shaders(shaders: &[&Shader]) -> Result<Self> {
        let program = Self::new();
        for shader in shaders {
            program.attach_shader(shader);
        }
        program.link()?;
        for shader in shaders {
            program.detach_shader(shader);
        }
        Ok(program)
    }

    /// Attach a compiled shader
    pub fn attach_shader(&self, shader: &Shader) {
        unsafe {
            gl::AttachShader(self.id, shader.id());
        }
    }

    /// Detach a shader
    pub fn detach_shader(&self, shader: &Shader) {
        unsafe {
            gl::DetachShader(self.id, shader.id());
        }
    }

    /// Link the program, surfacing the driver log on failure
    pub fn link(&self) -> Result<()> {
        unsafe {
            gl::LinkProgram(self.id);
        }

        let mut status = 0;
        let mut log_len = 0;
        unsafe {
            gl::GetProgramiv(self.id, gl::LINK_STATUS, &mut status);
            gl::GetProgramiv(self.id, gl::INFO_LOG_LENGTH, &mut log_len);
        }
        if status == gl::TRUE as GLint {
            return Ok(());
        }

        if log_len > 0 {
            let mut log = vec![0u8; log_len as usize];
            unsafe {
                gl::GetProgramInfoLog(
                    self.id,
                    log_len,
                    std::ptr::null_mut(),
                    log.as_mut_ptr() as *mut c_char,
                );
            }
            let log = String::from_utf8_lossy(&log)
                .trim_end_matches('\0')
                .to_string();
            Err(Error::ProgramLink(log))
        } else {
            Err(Error::ProgramLink(
                "unknown shader program link error".to_string(),
            ))
        }
    }

    /// Location of a named uniform, erroring if it does not exist
    pub fn uniform_location(&self, name: &str) -> Result<i32> {
        let c_name =
            CString::new(name).map_err(|_| Error::UniformNotFound(name.to_string()))?;
        let location = unsafe { gl::GetUniformLocation(self.id, c_name.as_ptr()) };
        if location < 0 {
            return Err(Error::UniformNotFound(name.to_string()));
        }
        Ok(location)
    }

    // ===== UNIFORM UPLOAD =====

    /// Set a float uniform
    pub fn set_uniform_f32(&self, location: i32, value: f32) {
        unsafe {
            gl::ProgramUniform1f(self.id, location, value);
        }
    }

    /// Set a vec3 uniform
    pub fn set_uniform_vec3(&self, location: i32, value: [f32; 3]) {
        unsafe {
            gl::ProgramUniform3f(self.id, location, value[0], value[1], value[2]);
        }
    }

    /// Set a mat4 uniform (column-major)
    pub fn set_uniform_mat4(&self, location: i32, value: &[f32; 16]) {
        unsafe {
            gl::ProgramUniformMatrix4fv(self.id, location, 1, gl::FALSE, value.as_ptr());
        }
    }

    /// Make this program current
    pub fn bind(&self) {
        unsafe {
            gl::UseProgram(self.id);
        }
    }

    /// Clear the current program
    pub fn unbind(&self) {
        unsafe {
            gl::UseProgram(0);
        }
    }

    // ===== INTROSPECTION =====

    /// Names of all active uniforms
    pub fn uniform_names(&self) -> Vec<String> {
        self.active_names(gl::ACTIVE_UNIFORMS, gl::ACTIVE_UNIFORM_MAX_LENGTH, |i, buf, len| {
            let mut size = 0;
            let mut ty: GLenum = 0;
            let mut actual = 0;
            unsafe {
                gl::GetActiveUniform(
                    self.id,
                    i,
                    buf.len() as GLsizei,
                    &mut actual,
                    &mut size,
                    &mut ty,
                    buf.as_mut_ptr() as *mut c_char,
                );
            }
            (actual, len)
        })
    }

    /// Names of all active vertex attributes
    pub fn attribute_names(&self) -> Vec<String> {
        self.active_names(
            gl::ACTIVE_ATTRIBUTES,
            gl::ACTIVE_ATTRIBUTE_MAX_LENGTH,
            |i, buf, len| {
                let mut size = 0;
                let mut ty: GLenum = 0;
                let mut actual = 0;
                unsafe {
                    gl::GetActiveAttrib(
                        self.id,
                        i,
                        buf.len() as GLsizei,
                        &mut actual,
                        &mut size,
                        &mut ty,
                        buf.as_mut_ptr() as *mut c_char,
                    );
                }
                (actual, len)
            },
        )
    }

    fn active_names<F>(&self, count_pname: GLenum, len_pname: GLenum, query: F) -> Vec<String>
    where
        F: Fn(GLuint, &mut [u8], GLsizei) -> (GLsizei, GLsizei),
    {
        let mut count = 0;
        let mut max_len = 0;
        unsafe {
            gl::GetProgramiv(self.id, count_pname, &mut count);
            gl::GetProgramiv(self.id, len_pname, &mut max_len);
        }

        let mut names = Vec::with_capacity(count.max(0) as usize);
        let mut buf = vec![0u8; max_len.max(1) as usize];
        for i in 0..count.max(0) as GLuint {
            let (actual, _) = query(i, &mut buf, max_len);
            let actual = actual.max(0) as usize;
            names.push(String::from_utf8_lossy(&buf[..actual]).to_string());
        }
        names
    }

    /// Driver handle
    pub fn id(&self) -> GLuint {
        self.id
    }
}

impl Default for ShaderProgram {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.id);
        }
    }
}
