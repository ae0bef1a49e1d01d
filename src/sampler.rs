use crate::{
    bounds::Bounds,
    error::Error,
    euler,
    pose::Pose,
    rng::{RandomSource, Real},
};
use nalgebra::{Quaternion, UnitQuaternion, Vector3, Vector6};
use rand::{Rng, SeedableRng, distr::Distribution, rngs::StdRng};
use rayon::prelude::*;
use tracing::{debug, warn};

/// Poses per rng in [`PoseSampler::par_sample`].
const CHUNK_LEN: usize = 1024;

/// Something that produces random values from a [`RandomSource`].
///
/// The source is borrowed for the duration of one call, samplers never own
/// it. Sharing one source between threads is up to the caller, eg. by
/// locking a `Mutex` and passing the guard.
pub trait Sampler<S: Real> {
    type Output;
    fn sample<R: RandomSource<S> + ?Sized>(&self, rng: &mut R) -> Self::Output;
}

/// Samples poses with a bounded translation and a uniformly random
/// orientation.
///
/// The orientation is reported as intrinsic XYZ Euler angles. It is drawn as
/// a uniform unit quaternion and converted afterwards, because three
/// independent uniform Euler angles do not give a uniform rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoseSampler<S: Real> {
    bounds: Bounds<S>,
}

pub type PoseSamplerf = PoseSampler<f32>;
pub type PoseSamplerd = PoseSampler<f64>;

impl<S: Real> PoseSampler<S> {
    /// Creates a sampler with zero bounds.
    ///
    /// Every pose sampled before [`PoseSampler::set_bound`] is called has a
    /// zero translation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sampler with translation bounded by `lower` and `upper`.
    ///
    /// The bounds are not checked, see [`PoseSampler::set_bound`].
    pub fn with_bounds(lower: Vector3<S>, upper: Vector3<S>) -> Self {
        let mut sampler = Self::new();
        sampler.set_bound(lower, upper);
        sampler
    }

    /// Creates a sampler with translation bounded by `lower` and `upper`.
    ///
    /// Returns an error if the bounds are inverted or not finite.
    pub fn try_with_bounds(lower: Vector3<S>, upper: Vector3<S>) -> Result<Self, Error> {
        let mut sampler = Self::new();
        sampler.try_set_bound(lower, upper)?;
        Ok(sampler)
    }

    /// Replaces both corners of the translation bounds.
    ///
    /// Inverted or non-finite bounds are accepted and logged. Sampling an
    /// inverted axis yields values between `upper` and `lower`, NaN and
    /// infinite bounds propagate into the samples.
    pub fn set_bound(&mut self, lower: Vector3<S>, upper: Vector3<S>) {
        let bounds = Bounds::new(lower, upper);
        if let Err(err) = bounds.validate() {
            warn!(%err, "accepting unchecked pose sampler bounds");
        }

        debug!(?lower, ?upper, "pose sampler bounds replaced");
        self.bounds = bounds;
    }

    /// Replaces both corners of the translation bounds.
    ///
    /// Returns an error and keeps the current bounds if the new bounds are
    /// inverted or not finite.
    pub fn try_set_bound(&mut self, lower: Vector3<S>, upper: Vector3<S>) -> Result<(), Error> {
        self.bounds = Bounds::try_new(lower, upper)?;
        debug!(?lower, ?upper, "pose sampler bounds replaced");
        Ok(())
    }

    /// Returns copies of the lower and upper corners.
    pub fn bound(&self) -> (Vector3<S>, Vector3<S>) {
        self.bounds.into()
    }

    pub fn bounds(&self) -> &Bounds<S> {
        &self.bounds
    }

    /// Samples a pose as `[x, y, z, rx, ry, rz]`.
    ///
    /// Draws the x, y and z translation in that order, then one unit
    /// quaternion.
    pub fn sample<R: RandomSource<S> + ?Sized>(&self, rng: &mut R) -> Vector6<S> {
        self.sample_pose(rng).to_vector()
    }

    /// Samples a [`Pose`].
    pub fn sample_pose<R: RandomSource<S> + ?Sized>(&self, rng: &mut R) -> Pose<S> {
        let (lower, upper) = (self.bounds.lower(), self.bounds.upper());
        let translation = Vector3::new(
            rng.uniform_real(lower.x, upper.x),
            rng.uniform_real(lower.y, upper.y),
            rng.uniform_real(lower.z, upper.z),
        );

        let [w, x, y, z] = rng.quaternion();
        let quat = UnitQuaternion::new_normalize(Quaternion::new(w, x, y, z));

        Pose::new(translation, euler::from_quaternion(&quat))
    }

    /// Returns an endless iterator of poses drawn from `rng`.
    pub fn sample_iter<'a, R: RandomSource<S> + ?Sized>(
        &'a self,
        rng: &'a mut R,
    ) -> impl Iterator<Item = Pose<S>> + 'a {
        std::iter::repeat_with(move || self.sample_pose(rng))
    }

    /// Samples `count` poses in parallel.
    ///
    /// Each chunk of poses is drawn from its own `StdRng`. The chunk seeds
    /// are drawn in order from a `StdRng` seeded with `seed`, so the output
    /// only depends on `count` and `seed` and batches of different seeds do
    /// not share streams.
    pub fn par_sample(&self, count: usize, seed: u64) -> Vec<Pose<S>> {
        let mut seeder = StdRng::seed_from_u64(seed);
        let chunk_seeds: Vec<u64> = (0..count.div_ceil(CHUNK_LEN))
            .map(|_| seeder.random())
            .collect();

        chunk_seeds
            .into_par_iter()
            .enumerate()
            .flat_map_iter(|(chunk, chunk_seed)| {
                let mut rng = StdRng::seed_from_u64(chunk_seed);
                let len = CHUNK_LEN.min(count - chunk * CHUNK_LEN);
                (0..len)
                    .map(|_| self.sample_pose(&mut rng))
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

impl<S: Real> Default for PoseSampler<S> {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
        }
    }
}

impl<S: Real> Sampler<S> for PoseSampler<S> {
    type Output = Vector6<S>;

    fn sample<R: RandomSource<S> + ?Sized>(&self, rng: &mut R) -> Self::Output {
        PoseSampler::sample(self, rng)
    }
}

impl<S: Real> Distribution<Pose<S>> for PoseSampler<S> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Pose<S> {
        self.sample_pose(rng)
    }
}
