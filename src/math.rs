//! Least-squares fitting over 2-D coordinates.

pub use self::coefficient::regression_coefficient;
pub use self::coordinate::Coordinate;
pub use self::error::{FitError, FitResult};
pub use self::goodness_of_fit::coefficient_of_determination;
pub use self::regression::{fit_line, linear_regression};

mod coefficient;
mod coordinate;
mod error;
mod goodness_of_fit;
mod regression;
mod vector;
