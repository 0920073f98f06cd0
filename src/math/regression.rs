//! Ordinary least squares fit of `y = a + bx`.

use itertools::Itertools;

use crate::math::vector::{deviations, dot, mean};
use crate::math::{Coordinate, FitError, FitResult};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Line {
    pub intercept: f64,
    pub slope: f64,
}

impl Line {
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Replaces every `y` with the fitted value, keeping `x` and the order.
    #[must_use]
    pub fn fitted(&self, points: &[Coordinate]) -> Vec<Coordinate> {
        points
            .iter()
            .map(|point| Coordinate::new(point.x, self.predict(point.x)))
            .collect()
    }
}

pub fn fit_line(points: &[Coordinate]) -> FitResult<Line> {
    if points.is_empty() {
        return Err(FitError::EmptyInput);
    }
    if points.iter().map(|point| point.x).all_equal() {
        return Err(FitError::DegenerateInput);
    }

    let (xs, ys): (Vec<f64>, Vec<f64>) = points.iter().map(|point| (point.x, point.y)).unzip();
    let dev_xs = deviations(&xs);
    let dev_ys = deviations(&ys);

    let x_squared = dot(&dev_xs, &dev_xs);
    if x_squared == 0.0 {
        return Err(FitError::DegenerateInput);
    }

    let slope = dot(&dev_xs, &dev_ys) / x_squared;
    let intercept = mean(&ys) - slope * mean(&xs);
    Ok(Line { intercept, slope })
}

/// Fits the line and returns the fitted points, one per input point.
pub fn linear_regression(points: &[Coordinate]) -> FitResult<Vec<Coordinate>> {
    Ok(fit_line(points)?.fitted(points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quartet::Quartet;

    #[test]
    fn collinear_ok() -> FitResult<()> {
        let points = [
            Coordinate::new(1.0, 1.0),
            Coordinate::new(2.0, 2.0),
            Coordinate::new(3.0, 3.0),
        ];
        let line = fit_line(&points)?;
        assert!((line.slope - 1.0).abs() < 1e-12);
        assert!(line.intercept.abs() < 1e-12);
        assert_eq!(linear_regression(&points)?, points);
        Ok(())
    }

    #[test]
    fn anscombe_ok() -> FitResult<()> {
        for quartet in Quartet::ALL {
            let line = fit_line(quartet.points())?;
            assert!((line.slope - 0.5).abs() < 1e-2, "{:?}: {:?}", quartet, line);
            assert!((line.intercept - 3.0).abs() < 1e-2, "{:?}: {:?}", quartet, line);
        }
        Ok(())
    }

    #[test]
    fn fitted_points_preserve_x_ok() -> FitResult<()> {
        let points = Quartet::C3.points();
        let line = fit_line(points)?;
        let fitted = linear_regression(points)?;
        assert_eq!(fitted.len(), points.len());
        for (point, fitted) in points.iter().zip(&fitted) {
            assert_eq!(point.x, fitted.x);
            let expected = line.intercept + line.slope * point.x;
            assert!((fitted.y - expected).abs() <= 1e-9 * expected.abs().max(1.0));
        }
        Ok(())
    }

    #[test]
    fn empty_input_error() {
        assert_eq!(fit_line(&[]), Err(FitError::EmptyInput));
        assert_eq!(linear_regression(&[]), Err(FitError::EmptyInput));
    }

    #[test]
    fn identical_x_error() {
        let points = [
            Coordinate::new(5.0, 1.0),
            Coordinate::new(5.0, 2.0),
            Coordinate::new(5.0, 3.0),
        ];
        assert_eq!(fit_line(&points), Err(FitError::DegenerateInput));
        assert_eq!(linear_regression(&points), Err(FitError::DegenerateInput));
    }

    #[test]
    fn single_point_error() {
        let points = [Coordinate::new(1.0, 2.0)];
        assert_eq!(fit_line(&points), Err(FitError::DegenerateInput));
    }
}
