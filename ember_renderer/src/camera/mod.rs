//! Camera math.
//!
//! [`Camera`] carries a position and a quaternion orientation and
//! derives the view matrix; [`PerspectiveCamera`] and [`OrthoCamera`]
//! add the projection matrix on top.

mod camera;
mod projection;

pub use camera::Camera;
pub use projection::{OrthoCamera, PerspectiveCamera};
