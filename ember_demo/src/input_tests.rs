use super::*;

// ============
// movement_vector
// ============

#[test]
fn test_no_keys_no_movement() {
    let keys = MovementKeys::default();
    assert_eq!(movement_vector(keys, Vec3::NEG_Z, Vec3::X, Vec3::Y), Vec3::ZERO);
}

#[test]
fn test_single_key_follows_camera_basis() {
    let keys = MovementKeys {
        forward: true,
        ..Default::default()
    };
    let forward = Vec3::new(0.0, 0.0, -1.0);
    assert_eq!(movement_vector(keys, forward, Vec3::X, Vec3::Y), forward);

    let keys = MovementKeys {
        left: true,
        ..Default::default()
    };
    assert_eq!(movement_vector(keys, forward, Vec3::X, Vec3::Y), Vec3::NEG_X);
}

#[test]
fn test_opposing_keys_cancel() {
    let keys = MovementKeys {
        forward: true,
        back: true,
        ..Default::default()
    };
    assert_eq!(movement_vector(keys, Vec3::NEG_Z, Vec3::X, Vec3::Y), Vec3::ZERO);
}

#[test]
fn test_diagonal_movement_is_normalized() {
    let keys = MovementKeys {
        forward: true,
        right: true,
        ..Default::default()
    };
    let direction = movement_vector(keys, Vec3::NEG_Z, Vec3::X, Vec3::Y);
    assert!((direction.length() - 1.0).abs() < 1e-6);
    assert!(direction.x > 0.0 && direction.z < 0.0);
}

#[test]
fn test_rotated_basis_is_respected() {
    // Camera yawed 90 degrees: forward is -X, right is -Z
    let keys = MovementKeys {
        forward: true,
        ..Default::default()
    };
    let direction = movement_vector(keys, Vec3::NEG_X, Vec3::NEG_Z, Vec3::Y);
    assert_eq!(direction, Vec3::NEG_X);
}

// ============
// InputState
// ============

#[test]
fn test_key_press_and_release() {
    let mut input = InputState::default();
    input.handle_key(KeyCode::KeyW, ElementState::Pressed);
    assert!(input.keys().forward);
    assert!(input.keys().any());

    input.handle_key(KeyCode::KeyW, ElementState::Released);
    assert!(!input.keys().forward);
    assert!(!input.keys().any());
}

#[test]
fn test_shift_boost() {
    let mut input = InputState::default();
    assert_eq!(input.speed_multiplier(), 1.0);
    input.handle_key(KeyCode::ShiftLeft, ElementState::Pressed);
    assert_eq!(input.speed_multiplier(), 10.0);
    input.handle_key(KeyCode::ShiftLeft, ElementState::Released);
    assert_eq!(input.speed_multiplier(), 1.0);
}

#[test]
fn test_drag_requires_middle_button() {
    let mut input = InputState::default();
    assert_eq!(input.handle_cursor_moved(10.0, 10.0), None);

    input.handle_mouse_button(MouseButton::Middle, ElementState::Pressed);
    // The cursor was tracked while the button was up, so the first
    // drag sample measures from (10, 10)
    assert_eq!(input.handle_cursor_moved(12.0, 9.0), Some((2.0, -1.0)));
    assert_eq!(input.handle_cursor_moved(15.0, 9.0), Some((3.0, 0.0)));

    input.handle_mouse_button(MouseButton::Middle, ElementState::Released);
    assert_eq!(input.handle_cursor_moved(20.0, 20.0), None);
}

#[test]
fn test_drag_delta_resets_between_drags() {
    let mut input = InputState::default();
    input.handle_mouse_button(MouseButton::Middle, ElementState::Pressed);
    input.handle_cursor_moved(5.0, 5.0);
    input.handle_mouse_button(MouseButton::Middle, ElementState::Released);

    // Cursor jumped while the button was up; the next drag must not
    // see that jump as a delta
    input.handle_mouse_button(MouseButton::Middle, ElementState::Pressed);
    assert_eq!(input.handle_cursor_moved(100.0, 100.0), Some((0.0, 0.0)));
}

#[test]
fn test_clear_keys() {
    let mut input = InputState::default();
    input.handle_key(KeyCode::KeyA, ElementState::Pressed);
    input.handle_key(KeyCode::ShiftLeft, ElementState::Pressed);
    input.clear_keys();
    assert!(!input.keys().any());
    assert_eq!(input.speed_multiplier(), 1.0);
}
