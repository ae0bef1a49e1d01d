use crate::{euler, rng::Real};
use nalgebra::{Isometry3, Rotation3, Translation3, UnitQuaternion, Vector3, Vector6};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rigid-body pose stored as a translation and intrinsic XYZ Euler angles.
///
/// Converts to and from the flat `[x, y, z, rx, ry, rz]` representation with
/// [`Vector6`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pose<S: Real> {
    translation: Vector3<S>,

    /// Angles about X, then Y, then Z in the body frame.
    angles: Vector3<S>,
}

impl<S: Real> Pose<S> {
    /// Creates a new `Pose` from a `translation` and intrinsic XYZ `angles`.
    pub fn new(translation: Vector3<S>, angles: Vector3<S>) -> Self {
        Self {
            translation,
            angles,
        }
    }

    /// Creates a `Pose` at `translation` with orientation `quat`.
    pub fn from_quaternion(translation: Vector3<S>, quat: &UnitQuaternion<S>) -> Self {
        Self::new(translation, euler::from_quaternion(quat))
    }

    /// Returns the position `[x, y, z]`.
    pub fn translation(&self) -> &Vector3<S> {
        &self.translation
    }

    /// Returns the Euler angles `[rx, ry, rz]` in radians.
    pub fn angles(&self) -> &Vector3<S> {
        &self.angles
    }

    pub fn rotation(&self) -> Rotation3<S> {
        euler::to_rotation(&self.angles)
    }

    pub fn isometry(&self) -> Isometry3<S> {
        Isometry3::from_parts(
            Translation3::from(self.translation),
            UnitQuaternion::from_rotation_matrix(&self.rotation()),
        )
    }

    /// Returns the flat `[x, y, z, rx, ry, rz]` representation.
    pub fn to_vector(&self) -> Vector6<S> {
        Vector6::new(
            self.translation.x,
            self.translation.y,
            self.translation.z,
            self.angles.x,
            self.angles.y,
            self.angles.z,
        )
    }
}

impl<S: Real> From<Pose<S>> for Vector6<S> {
    fn from(pose: Pose<S>) -> Self {
        pose.to_vector()
    }
}

impl<S: Real> From<Vector6<S>> for Pose<S> {
    fn from(v: Vector6<S>) -> Self {
        Self::new(Vector3::new(v[0], v[1], v[2]), Vector3::new(v[3], v[4], v[5]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point3;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn flat_layout() {
        let pose = Pose::new(Vector3::new(1.0, 2.0, 3.0), Vector3::new(0.1, 0.2, 0.3));
        let flat: Vector6<f64> = pose.into();
        assert_eq!(flat, Vector6::new(1.0, 2.0, 3.0, 0.1, 0.2, 0.3));
        assert_eq!(Pose::from(flat), pose);
    }

    #[test]
    fn isometry_rotates_then_translates() {
        let pose = Pose::new(Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 0.0, FRAC_PI_2));
        let moved = pose.isometry() * Point3::new(1.0, 0.0, 0.0);
        assert_relative_eq!(moved, Point3::new(1.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn quaternion_roundtrip() {
        let quat = UnitQuaternion::from_euler_angles(0.4, -0.2, 1.3);
        let pose = Pose::from_quaternion(Vector3::zeros(), &quat);
        assert_relative_eq!(pose.rotation(), quat.to_rotation_matrix(), epsilon = 1e-12);
        assert_relative_eq!(
            pose.isometry().rotation.to_rotation_matrix(),
            quat.to_rotation_matrix(),
            epsilon = 1e-12
        );
    }
}
