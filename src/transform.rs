//! Rigid-body homogeneous transforms used to chain leg segment frames.
//!
//! A transform `frame_ab` is the pose of frame `b` expressed in frame `a`: its
//! translation column is the origin of `b` in `a` coordinates. Angles in this
//! module's API are in degrees.

use glam::{DMat4, DVec3, DVec4};

/// 4×4 homogeneous transform (column-major, f64).
pub type Transform = DMat4;

/// Rotates about the Y axis by `theta` degrees, then places the frame at `x` along X.
///
/// Chains the end frame of one leg segment onto the previous segment's frame.
pub fn y_rotate_x_translate(theta: f64, x: f64) -> Transform {
    DMat4::from_translation(DVec3::new(x, 0.0, 0.0)) * DMat4::from_rotation_y(theta.to_radians())
}

/// Rotates about the Z axis by `theta` degrees, then places the frame at `(x, y)`.
///
/// Places a whole leg chain onto the body at its mount vertex.
pub fn z_rotate_xy_translate(theta: f64, x: f64, y: f64) -> Transform {
    DMat4::from_translation(DVec3::new(x, y, 0.0)) * DMat4::from_rotation_z(theta.to_radians())
}

/// Returns `true` if `frame` is a proper rigid transform within `eps`.
///
/// Checks the bottom row is `[0, 0, 0, 1]` and that the rotation block is
/// orthonormal with determinant 1.
pub fn is_rigid(frame: &Transform, eps: f64) -> bool {
    if !frame.row(3).abs_diff_eq(DVec4::W, eps) {
        return false;
    }

    let x = frame.x_axis.truncate();
    let y = frame.y_axis.truncate();
    let z = frame.z_axis.truncate();

    let unit = [x, y, z].iter().all(|v| (v.length_squared() - 1.0).abs() <= eps);
    let orthogonal = x.dot(y).abs() <= eps && y.dot(z).abs() <= eps && z.dot(x).abs() <= eps;

    unit && orthogonal && (x.cross(y).dot(z) - 1.0).abs() <= eps
}
