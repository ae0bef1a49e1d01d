use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("expected lower bound <= upper bound on axis {axis} but got: [{lower}, {upper}]")]
    InvalidBounds { axis: usize, lower: f64, upper: f64 },
    #[error("expected finite bounds on axis {axis} but got: [{lower}, {upper}]")]
    NonFinite { axis: usize, lower: f64, upper: f64 },
}
