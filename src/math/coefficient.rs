//! Slope recomputed from the normal equations.
//!
//! Applied to the points of a fitted line, this yields the slope of that line.
//! It is not the Pearson correlation coefficient.

use itertools::Itertools;

use crate::math::{Coordinate, FitError, FitResult};

#[derive(Default, Copy, Clone)]
struct Sums {
    x: f64,
    y: f64,
    xy: f64,
    xx: f64,
}

impl Sums {
    fn push(mut self, point: &Coordinate) -> Self {
        self.x += point.x;
        self.y += point.y;
        self.xy += point.x * point.y;
        self.xx += point.x * point.x;
        self
    }
}

pub fn regression_coefficient(points: &[Coordinate]) -> FitResult<f64> {
    if points.is_empty() {
        return Err(FitError::EmptyInput);
    }
    if points.iter().map(|point| point.x).all_equal() {
        return Err(FitError::DegenerateInput);
    }

    let n = points.len() as f64;
    let sums = points.iter().fold(Sums::default(), Sums::push);

    let numerator = n * sums.xy - sums.x * sums.y;
    let denominator = n * sums.xx - sums.x * sums.x;
    if denominator == 0.0 {
        return Err(FitError::DegenerateInput);
    }
    Ok(numerator / denominator)
}
