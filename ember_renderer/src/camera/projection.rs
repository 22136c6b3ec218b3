use std::ops::{Deref, DerefMut};

use glam::{Mat4, Quat, Vec3};

use crate::camera::Camera;

/// Camera with a perspective projection
///
/// Derefs to [`Camera`] for position/orientation/view access. Depth
/// range follows the GL convention (-1 to 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    camera: Camera,
    fov: f32,
    aspect: f32,
    near: f32,
    far: f32,
}

impl PerspectiveCamera {
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            camera: Camera::new(position, orientation),
            ..Self::default()
        }
    }

    /// Vertical field of view in radians
    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov;
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Aspect ratio from a viewport size in pixels
    pub fn set_aspect_from_size(&mut self, width: f32, height: f32) {
        self.set_aspect(width / height);
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn set_near(&mut self, near: f32) {
        self.near = near;
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn set_far(&mut self, far: f32) {
        self.far = far;
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov, self.aspect, self.near, self.far)
    }
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self {
            camera: Camera::default(),
            fov: 9.0,
            aspect: 16.0 / 9.0,
            near: 1.0,
            far: 100.0,
        }
    }
}

impl Deref for PerspectiveCamera {
    type Target = Camera;

    fn deref(&self) -> &Camera {
        &self.camera
    }
}

impl DerefMut for PerspectiveCamera {
    fn deref_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }
}

/// Camera with an ortholinear projection
///
/// Derefs to [`Camera`]. Near/far planes are fixed at -1/1 like the
/// two-dimensional GL ortho convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthoCamera {
    camera: Camera,
    xmin: f32,
    xmax: f32,
    ymin: f32,
    ymax: f32,
}

impl OrthoCamera {
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            camera: Camera::new(position, orientation),
            ..Self::default()
        }
    }

    pub fn set_xmin(&mut self, xmin: f32) {
        self.xmin = xmin;
    }

    pub fn xmin(&self) -> f32 {
        self.xmin
    }

    pub fn set_xmax(&mut self, xmax: f32) {
        self.xmax = xmax;
    }

    pub fn xmax(&self) -> f32 {
        self.xmax
    }

    pub fn set_ymin(&mut self, ymin: f32) {
        self.ymin = ymin;
    }

    pub fn ymin(&self) -> f32 {
        self.ymin
    }

    pub fn set_ymax(&mut self, ymax: f32) {
        self.ymax = ymax;
    }

    pub fn ymax(&self) -> f32 {
        self.ymax
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::orthographic_rh_gl(self.xmin, self.xmax, self.ymin, self.ymax, -1.0, 1.0)
    }
}

impl Default for OrthoCamera {
    fn default() -> Self {
        Self {
            camera: Camera::default(),
            xmin: 0.0,
            xmax: 1920.0,
            ymin: 0.0,
            ymax: 1080.0,
        }
    }
}

impl Deref for OrthoCamera {
    type Target = Camera;

    fn deref(&self) -> &Camera {
        &self.camera
    }
}

impl DerefMut for OrthoCamera {
    fn deref_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
