use glam::{EulerRot, Mat3, Mat4, Quat, Vec3};

/// Free-flying camera with a position and a quaternion orientation
///
/// Euler angles follow the pitch/yaw/roll convention on x/y/z and
/// compose as roll, then yaw, then pitch. The yaw/pitch/roll rotation
/// operations apply WORLD-axis rotations on top of the current
/// orientation; the orientation is renormalized after every
/// composition so repeated incremental rotation does not drift away
/// from unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vec3,
    orientation: Quat,
}

impl Camera {
    /// Create a camera from a position and an orientation quaternion
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self { position, orientation }
    }

    /// Create a camera from a position and euler angles
    /// (x = pitch, y = yaw, z = roll, radians)
    pub fn from_euler(position: Vec3, euler_angles: Vec3) -> Self {
        Self {
            position,
            orientation: quat_from_euler(euler_angles),
        }
    }

    // ===== POSITION =====

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Translate the camera by a world-space offset
    pub fn offset_position(&mut self, offset: Vec3) {
        self.position += offset;
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    // ===== ORIENTATION =====

    /// Set the orientation from yaw/pitch/roll angles (radians)
    pub fn set_orientation_angles(&mut self, yaw: f32, pitch: f32, roll: f32) {
        self.set_orientation_euler(Vec3::new(pitch, yaw, roll));
    }

    /// Set the orientation from euler angles
    /// (x = pitch, y = yaw, z = roll, radians)
    pub fn set_orientation_euler(&mut self, euler_angles: Vec3) {
        self.orientation = quat_from_euler(euler_angles);
    }

    pub fn set_orientation(&mut self, orientation: Quat) {
        self.orientation = orientation;
    }

    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Orientation as a rotation matrix
    pub fn orientation_matrix(&self) -> Mat4 {
        Mat4::from_quat(self.orientation)
    }

    /// Orientation as euler angles (x = pitch, y = yaw, z = roll)
    pub fn orientation_angles(&self) -> Vec3 {
        let (roll, yaw, pitch) = self.orientation.to_euler(EulerRot::ZYX);
        Vec3::new(pitch, yaw, roll)
    }

    pub fn pitch(&self) -> f32 {
        self.orientation_angles().x
    }

    pub fn yaw(&self) -> f32 {
        self.orientation_angles().y
    }

    pub fn roll(&self) -> f32 {
        self.orientation_angles().z
    }

    /// Rotate by euler angles in world space
    pub fn offset_orientation(&mut self, euler_angles: Vec3) {
        let rotation = quat_from_euler(euler_angles);
        self.orientation = (rotation * self.orientation).normalize();
    }

    /// Rotate around the world Y axis
    pub fn rotate_yaw(&mut self, yaw: f32) {
        let rotation = Quat::from_axis_angle(Vec3::Y, yaw);
        self.orientation = (rotation * self.orientation).normalize();
    }

    /// Rotate around the world X axis
    pub fn rotate_pitch(&mut self, pitch: f32) {
        let rotation = Quat::from_axis_angle(Vec3::X, pitch);
        self.orientation = (rotation * self.orientation).normalize();
    }

    /// Rotate around the world Z axis
    pub fn rotate_roll(&mut self, roll: f32) {
        let rotation = Quat::from_axis_angle(Vec3::Z, roll);
        self.orientation = (rotation * self.orientation).normalize();
    }

    // ===== BASIS VECTORS =====

    /// View direction (-Z rotated by the orientation)
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Local up (+Y rotated by the orientation)
    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// Local right (+X rotated by the orientation)
    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    // ===== VIEW =====

    /// Point the camera at a world-space target
    ///
    /// Does nothing when the target coincides with the camera position
    /// (direction shorter than 1e-4). The reference up is world Y; when
    /// the view direction is near parallel to it the current forward
    /// vector substitutes so the result stays well defined.
    pub fn look_at(&mut self, target: Vec3) {
        let direction = target - self.position;
        let length = direction.length();
        if !(length > 1e-4) {
            return;
        }
        let direction = direction / length;

        if direction.dot(Vec3::Y).abs() > 0.9999 {
            self.orientation = quat_look_at(direction, self.forward());
        } else {
            self.orientation = quat_look_at(direction, Vec3::Y);
        }
    }

    /// World-to-view matrix: orientation matrix times translation by
    /// the negated position
    pub fn view_matrix(&self) -> Mat4 {
        self.orientation_matrix() * Mat4::from_translation(-self.position)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Quat::IDENTITY)
    }
}

/// Quaternion from euler angles (x = pitch, y = yaw, z = roll),
/// composed roll first, pitch last
fn quat_from_euler(euler_angles: Vec3) -> Quat {
    Quat::from_euler(EulerRot::ZYX, euler_angles.z, euler_angles.y, euler_angles.x)
}

/// Right-handed look-at rotation: -Z maps to `direction`
///
/// `direction` must be unit length and not parallel to `up`.
fn quat_look_at(direction: Vec3, up: Vec3) -> Quat {
    let back = -direction;
    let right = up.cross(back).normalize();
    let up = back.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, up, back))
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
