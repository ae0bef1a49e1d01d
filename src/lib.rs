//! Random rigid-body pose sampling.
//!
//! [`PoseSampler`](sampler::PoseSampler) draws poses `[x, y, z, rx, ry, rz]`
//! whose translation is uniform inside an axis aligned box and whose
//! orientation is uniform over all rotations. The orientation is reported as
//! intrinsic XYZ Euler angles (see [`euler`]).
//!
//! ```
//! use nalgebra::Vector3;
//! use rand::{SeedableRng, rngs::StdRng};
//! use se3_sampler::prelude::*;
//!
//! let sampler = PoseSampler::with_bounds(Vector3::zeros(), Vector3::new(1.0, 1.0, 1.0));
//! let mut rng = StdRng::seed_from_u64(0);
//!
//! let q = sampler.sample(&mut rng);
//! assert!((0.0..=1.0).contains(&q[0]));
//! ```

#[allow(missing_docs)]
pub mod error;

pub mod bounds;
pub mod euler;
pub mod pose;
pub mod rng;
pub mod sampler;

pub mod prelude {
    pub use crate::{
        bounds::Bounds,
        error::Error,
        pose::Pose,
        rng::{RandomSource, Real},
        sampler::{PoseSampler, PoseSamplerd, PoseSamplerf, Sampler},
    };
}
