use crate::{error::Error, rng::Real};
use nalgebra::Vector3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis aligned box that limits the translation of sampled poses.
///
/// The box is described by its `lower` and `upper` corners. Nothing stops a
/// caller from building a box with `lower[i] > upper[i]` through
/// [`Bounds::new`]; use [`Bounds::try_new`] or [`Bounds::validate`] to reject
/// inverted and non-finite boxes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds<S: Real> {
    lower: Vector3<S>,
    upper: Vector3<S>,
}

impl<S: Real> Bounds<S> {
    /// Creates a new `Bounds` from `lower` and `upper` without checking them.
    pub fn new(lower: Vector3<S>, upper: Vector3<S>) -> Self {
        Self { lower, upper }
    }

    /// Creates a new `Bounds` from `lower` and `upper`.
    ///
    /// Returns an error if any corner component is not finite or if `lower`
    /// exceeds `upper` on any axis.
    pub fn try_new(lower: Vector3<S>, upper: Vector3<S>) -> Result<Self, Error> {
        let bounds = Self::new(lower, upper);
        bounds.validate()?;
        Ok(bounds)
    }

    /// Creates a box collapsed onto `point`.
    pub fn point(point: Vector3<S>) -> Self {
        Self::new(point, point)
    }

    /// Returns the corner with the smallest coordinates.
    pub fn lower(&self) -> &Vector3<S> {
        &self.lower
    }

    /// Returns the corner with the largest coordinates.
    pub fn upper(&self) -> &Vector3<S> {
        &self.upper
    }

    /// Returns the edge lengths of the box.
    pub fn extent(&self) -> Vector3<S> {
        self.upper - self.lower
    }

    /// Returns `true` if `point` lies inside the box, edges included.
    pub fn contains(&self, point: &Vector3<S>) -> bool {
        (0..3).all(|axis| self.lower[axis] <= point[axis] && point[axis] <= self.upper[axis])
    }

    /// Checks every axis, reporting the first one that is not finite or
    /// inverted.
    pub fn validate(&self) -> Result<(), Error> {
        for axis in 0..3 {
            let lower = self.lower[axis].to_f64();
            let upper = self.upper[axis].to_f64();

            if !lower.is_finite() || !upper.is_finite() {
                return Err(Error::NonFinite { axis, lower, upper });
            }

            if lower > upper {
                return Err(Error::InvalidBounds { axis, lower, upper });
            }
        }

        Ok(())
    }

    /// Returns `true` if [`Bounds::validate`] passes.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl<S: Real> Default for Bounds<S> {
    fn default() -> Self {
        Self::point(Vector3::zeros())
    }
}

impl<S: Real> From<(Vector3<S>, Vector3<S>)> for Bounds<S> {
    fn from(corners: (Vector3<S>, Vector3<S>)) -> Self {
        let (lower, upper) = corners;
        Self::new(lower, upper)
    }
}

impl<S: Real> From<Bounds<S>> for (Vector3<S>, Vector3<S>) {
    fn from(bounds: Bounds<S>) -> Self {
        (bounds.lower, bounds.upper)
    }
}
