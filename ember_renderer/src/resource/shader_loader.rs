use std::fs;
use std::path::Path;

use ember_gl::{Shader, ShaderStage};

use crate::error::{Error, Result};
use crate::gfx_debug;

/// Compile a shader from in-memory GLSL source
pub fn shader_from_source(stage: ShaderStage, source: &str) -> Result<Shader> {
    Ok(Shader::new(stage, source)?)
}

/// Compile a shader from a GLSL source file
pub fn shader_from_file<P: AsRef<Path>>(stage: ShaderStage, path: P) -> Result<Shader> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)
        .map_err(|err| Error::Io(format!("unable to open file '{}': {}", path.display(), err)))?;

    gfx_debug!(
        "ember::ShaderLoader",
        "compiling {:?} shader from '{}'",
        stage,
        path.display()
    );
    shader_from_source(stage, &source)
}
