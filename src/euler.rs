//! Intrinsic XYZ Euler angles.
//!
//! A triple `[rx, ry, rz]` describes the rotation `R = Rx(rx) * Ry(ry) * Rz(rz)`,
//! i.e. a rotation about the body X axis, then about the new Y axis, then
//! about the newest Z axis.
//!
//! Note that nalgebra's own `euler_angles` uses the extrinsic roll, pitch, yaw
//! convention `Rz * Ry * Rx`, which is not the same decomposition.

use crate::rng::Real;
use nalgebra::{Rotation3, UnitQuaternion, Vector3};

/// Composes the rotation described by `angles`.
pub fn to_rotation<S: Real>(angles: &Vector3<S>) -> Rotation3<S> {
    Rotation3::from_axis_angle(&Vector3::x_axis(), angles.x)
        * Rotation3::from_axis_angle(&Vector3::y_axis(), angles.y)
        * Rotation3::from_axis_angle(&Vector3::z_axis(), angles.z)
}

/// Decomposes `rot` into intrinsic XYZ Euler angles.
///
/// `rx` and `rz` are on the range `[-PI, PI]` and `ry` is on the range
/// `[-PI / 2, PI / 2]`.
///
/// Near `ry = +/- PI / 2` the split between `rx` and `rz` is not unique. The
/// returned triple still composes back into `rot`, but which split is
/// returned depends on rounding in the input matrix.
pub fn from_rotation<S: Real>(rot: &Rotation3<S>) -> Vector3<S> {
    let m = rot.matrix();

    // Row 1 and 2 of the last column are (-sin(rx), cos(rx)) * cos(ry).
    let rx = (-m[(1, 2)]).atan2(m[(2, 2)]);
    let (sx, cx) = rx.sin_cos();

    // Undo rx. What remains is Ry(ry) * Rz(rz).
    let ry = m[(0, 2)].atan2(cx * m[(2, 2)] - sx * m[(1, 2)]);
    let rz = (cx * m[(1, 0)] + sx * m[(2, 0)]).atan2(cx * m[(1, 1)] + sx * m[(2, 1)]);

    Vector3::new(rx, ry, rz)
}

/// Decomposes `quat` into intrinsic XYZ Euler angles.
///
/// See [`from_rotation`].
pub fn from_quaternion<S: Real>(quat: &UnitQuaternion<S>) -> Vector3<S> {
    from_rotation(&quat.to_rotation_matrix())
}
