use super::*;

// ============
// PerspectiveCamera
// ============

#[test]
fn test_perspective_defaults() {
    let camera = PerspectiveCamera::default();
    assert_eq!(camera.fov(), 9.0);
    assert_eq!(camera.aspect(), 16.0 / 9.0);
    assert_eq!(camera.near(), 1.0);
    assert_eq!(camera.far(), 100.0);
}

#[test]
fn test_perspective_matrix_matches_reference() {
    let mut camera = PerspectiveCamera::default();
    camera.set_fov(60.0_f32.to_radians());
    camera.set_aspect(1920.0 / 1080.0);
    camera.set_near(0.1);
    camera.set_far(100.0);

    let expected =
        Mat4::perspective_rh_gl(60.0_f32.to_radians(), 1920.0 / 1080.0, 0.1, 100.0);
    assert!(camera.projection_matrix().abs_diff_eq(expected, 1e-6));
}

#[test]
fn test_set_aspect_from_size() {
    let mut a = PerspectiveCamera::default();
    a.set_aspect_from_size(1920.0, 1080.0);

    let mut b = PerspectiveCamera::default();
    b.set_aspect(1920.0 / 1080.0);

    assert_eq!(a.aspect(), b.aspect());
    assert_eq!(a.projection_matrix(), b.projection_matrix());
}

#[test]
fn test_perspective_derefs_to_camera() {
    let mut camera = PerspectiveCamera::default();
    camera.set_position(Vec3::new(0.0, 0.0, -5.0));
    camera.look_at(Vec3::ZERO);

    assert_eq!(camera.position(), Vec3::new(0.0, 0.0, -5.0));
    assert!((camera.forward() - Vec3::Z).length() < 1e-5);
}

// ============
// OrthoCamera
// ============

#[test]
fn test_ortho_defaults_cover_full_hd() {
    let camera = OrthoCamera::default();
    assert_eq!(camera.xmin(), 0.0);
    assert_eq!(camera.xmax(), 1920.0);
    assert_eq!(camera.ymin(), 0.0);
    assert_eq!(camera.ymax(), 1080.0);
}

#[test]
fn test_ortho_matrix_matches_reference() {
    let mut camera = OrthoCamera::default();
    camera.set_xmin(-2.0);
    camera.set_xmax(2.0);
    camera.set_ymin(-1.5);
    camera.set_ymax(1.5);

    let expected = Mat4::orthographic_rh_gl(-2.0, 2.0, -1.5, 1.5, -1.0, 1.0);
    assert!(camera.projection_matrix().abs_diff_eq(expected, 1e-6));
}

#[test]
fn test_ortho_maps_extents_to_clip_corners() {
    let camera = OrthoCamera::default();
    let projection = camera.projection_matrix();

    let lower = projection * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
    let upper = projection * glam::Vec4::new(1920.0, 1080.0, 0.0, 1.0);
    assert!((lower.x - (-1.0)).abs() < 1e-6);
    assert!((lower.y - (-1.0)).abs() < 1e-6);
    assert!((upper.x - 1.0).abs() < 1e-6);
    assert!((upper.y - 1.0).abs() < 1e-6);
}
