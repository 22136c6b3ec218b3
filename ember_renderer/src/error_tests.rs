use super::*;

#[test]
fn test_io_display() {
    let err = Error::Io("unable to open file 'shaders/simple.vert'".to_string());
    assert_eq!(
        err.to_string(),
        "I/O error: unable to open file 'shaders/simple.vert'"
    );
}

#[test]
fn test_mesh_parse_display() {
    let err = Error::MeshParse("unable to parse object file".to_string());
    assert_eq!(err.to_string(), "Mesh parse error: unable to parse object file");
}

#[test]
fn test_gl_error_conversion() {
    let gl_err = ember_gl::Error::ShaderCompile("bad token".to_string());
    let err: Error = gl_err.into();
    assert!(matches!(err, Error::Gl(_)));
    assert_eq!(err.to_string(), "Shader compilation failed: bad token");
}

#[test]
fn test_question_mark_propagation() {
    fn fails() -> Result<()> {
        Err(ember_gl::Error::ProgramLink("boom".to_string()))?;
        Ok(())
    }
    assert!(matches!(fails(), Err(Error::Gl(_))));
}
