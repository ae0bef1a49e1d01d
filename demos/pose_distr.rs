use nalgebra::Vector3;
use rand::{SeedableRng, rngs::StdRng};
use se3_sampler::prelude::*;
use std::io::{BufWriter, Write};

/// Prints sampled poses as `x y z rx ry rz` rows for plotting.
fn main() -> std::io::Result<()> {
    const COUNT: usize = 10_000;
    let sampler =
        PoseSampler::with_bounds(Vector3::new(-1.0, -1.0, 0.0), Vector3::new(1.0, 1.0, 2.0));
    let mut rng = StdRng::seed_from_u64(0);

    let mut writer = BufWriter::new(std::io::stdout().lock());
    for q in (0..COUNT).map(|_| sampler.sample(&mut rng)) {
        writeln!(writer, "{} {} {} {} {} {}", q[0], q[1], q[2], q[3], q[4], q[5])?;
    }

    writer.flush()
}
