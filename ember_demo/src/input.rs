//! Keyboard and mouse state for the fly camera.

use glam::Vec3;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

/// Movement keys currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl MovementKeys {
    pub fn any(&self) -> bool {
        self.forward || self.back || self.left || self.right || self.up || self.down
    }
}

/// Unit movement direction from held keys and the camera basis
///
/// Opposing keys cancel; the sum is normalized so diagonal movement is
/// not faster than movement along one axis. Returns zero when nothing
/// is held or everything cancels.
pub fn movement_vector(keys: MovementKeys, forward: Vec3, right: Vec3, up: Vec3) -> Vec3 {
    let mut direction = Vec3::ZERO;
    if keys.forward {
        direction += forward;
    }
    if keys.back {
        direction -= forward;
    }
    if keys.right {
        direction += right;
    }
    if keys.left {
        direction -= right;
    }
    if keys.up {
        direction += up;
    }
    if keys.down {
        direction -= up;
    }

    if direction.length() > 0.0 {
        direction.normalize()
    } else {
        Vec3::ZERO
    }
}

/// Tracked input state between frames
#[derive(Debug, Default)]
pub struct InputState {
    keys: MovementKeys,
    boost: bool,
    middle_drag: bool,
    last_cursor: Option<(f32, f32)>,
}

impl InputState {
    pub fn keys(&self) -> MovementKeys {
        self.keys
    }

    /// Speed multiplier: 10x while left shift is held
    pub fn speed_multiplier(&self) -> f32 {
        if self.boost {
            10.0
        } else {
            1.0
        }
    }

    pub fn handle_key(&mut self, key: KeyCode, state: ElementState) {
        let pressed = state.is_pressed();
        match key {
            KeyCode::KeyW => self.keys.forward = pressed,
            KeyCode::KeyS => self.keys.back = pressed,
            KeyCode::KeyA => self.keys.left = pressed,
            KeyCode::KeyD => self.keys.right = pressed,
            KeyCode::KeyE => self.keys.up = pressed,
            KeyCode::KeyQ => self.keys.down = pressed,
            KeyCode::ShiftLeft => self.boost = pressed,
            _ => {}
        }
    }

    pub fn handle_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Middle {
            self.middle_drag = state.is_pressed();
            if !self.middle_drag {
                self.last_cursor = None;
            }
        }
    }

    /// Track the cursor; while the middle button is held, returns the
    /// drag delta since the previous position
    pub fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<(f32, f32)> {
        if !self.middle_drag {
            self.last_cursor = Some((x, y));
            return None;
        }

        let delta = match self.last_cursor {
            Some((last_x, last_y)) => (x - last_x, y - last_y),
            // First sample of the drag produces no rotation
            None => (0.0, 0.0),
        };
        self.last_cursor = Some((x, y));
        Some(delta)
    }

    /// Drop held keys, e.g. when the GUI takes keyboard focus
    pub fn clear_keys(&mut self) {
        self.keys = MovementKeys::default();
        self.boost = false;
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
