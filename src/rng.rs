use nalgebra::RealField;
use rand::Rng;

/// Floating point scalar usable by the samplers.
///
/// Implemented for `f32` and `f64`.
pub trait Real: RealField + Copy {
    /// Draws a value uniformly from `[0, 1)`.
    fn unit<R: Rng + ?Sized>(rng: &mut R) -> Self;

    /// Widens to `f64`, used to report bounds in [`crate::error::Error`].
    fn to_f64(self) -> f64;
}

impl Real for f32 {
    fn unit<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.random::<f32>()
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Real for f64 {
    fn unit<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.random::<f64>()
    }

    fn to_f64(self) -> f64 {
        self
    }
}

/// The random draws a sampler needs.
///
/// Every `rand::Rng` is a `RandomSource`, so seeded engines, thread local
/// engines and lock guards around a shared engine can all be passed to a
/// sampler directly.
pub trait RandomSource<S: Real> {
    /// Returns a value uniformly distributed in `[low, high]`.
    fn uniform_real(&mut self, low: S, high: S) -> S;

    /// Returns a unit quaternion `[w, x, y, z]` uniformly distributed over
    /// the 3-sphere.
    fn quaternion(&mut self) -> [S; 4];
}

impl<S: Real, R: Rng + ?Sized> RandomSource<S> for R {
    /// Never panics.
    ///
    /// An inverted range yields values in `[high, low]`. NaN and infinite
    /// bounds propagate into the result.
    fn uniform_real(&mut self, low: S, high: S) -> S {
        let u = S::unit(self);
        if low == high {
            return low;
        }

        // Interpolate from both ends, `high - low` overflows for ranges wider
        // than `S::max_value()`.
        let value = low * (S::one() - u) + high * u;

        // Rounding can push `value` just outside the range.
        match low <= high {
            true if value < low => low,
            true if value > high => high,
            _ => value,
        }
    }

    /// Shoemake's subgroup algorithm.
    ///
    /// Splits the 3-sphere into two circles of radius `sqrt(1 - u1)` and
    /// `sqrt(u1)` and picks a uniform angle on each.
    fn quaternion(&mut self) -> [S; 4] {
        let u1 = S::unit(self);
        let u2 = S::unit(self);
        let u3 = S::unit(self);

        let r1 = (S::one() - u1).sqrt();
        let r2 = u1.sqrt();
        let (s1, c1) = (S::two_pi() * u2).sin_cos();
        let (s2, c2) = (S::two_pi() * u3).sin_cos();

        [r2 * c2, r1 * s1, r1 * c1, r2 * s2]
    }
}
