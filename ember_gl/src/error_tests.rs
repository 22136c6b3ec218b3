use super::*;

#[test]
fn test_shader_compile_display() {
    let err = Error::ShaderCompile("0:12: syntax error".to_string());
    assert_eq!(
        err.to_string(),
        "Shader compilation failed: 0:12: syntax error"
    );
}

#[test]
fn test_program_link_display() {
    let err = Error::ProgramLink("unresolved varying".to_string());
    assert_eq!(err.to_string(), "Program link failed: unresolved varying");
}

#[test]
fn test_uniform_not_found_display() {
    let err = Error::UniformNotFound("MVP".to_string());
    assert_eq!(err.to_string(), "Unable to find uniform with name 'MVP'");
}

#[test]
fn test_error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&Error::ShaderCompile(String::new()));
}
