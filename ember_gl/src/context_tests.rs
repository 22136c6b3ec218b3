use super::*;

#[test]
fn test_capability_to_gl() {
    assert_eq!(Capability::Blend.to_gl(), gl::BLEND);
    assert_eq!(Capability::DepthTest.to_gl(), gl::DEPTH_TEST);
    assert_eq!(Capability::CullFace.to_gl(), gl::CULL_FACE);
}

#[test]
fn test_blend_factor_to_gl() {
    assert_eq!(BlendFactor::SrcAlpha.to_gl(), gl::SRC_ALPHA);
    assert_eq!(
        BlendFactor::OneMinusSrcAlpha.to_gl(),
        gl::ONE_MINUS_SRC_ALPHA
    );
    assert_eq!(BlendFactor::Zero.to_gl(), gl::ZERO);
    assert_eq!(BlendFactor::One.to_gl(), gl::ONE);
}

#[test]
fn test_draw_mode_to_gl() {
    assert_eq!(DrawMode::Triangles.to_gl(), gl::TRIANGLES);
    assert_eq!(DrawMode::TriangleStrip.to_gl(), gl::TRIANGLE_STRIP);
    assert_eq!(DrawMode::Points.to_gl(), gl::POINTS);
    assert_eq!(DrawMode::Lines.to_gl(), gl::LINES);
}

#[test]
fn test_clear_mask_bits() {
    assert_eq!(ClearMask::COLOR.bits(), gl::COLOR_BUFFER_BIT);
    assert_eq!(ClearMask::DEPTH.bits(), gl::DEPTH_BUFFER_BIT);
    assert_eq!(
        (ClearMask::COLOR | ClearMask::DEPTH).bits(),
        gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT
    );
}
