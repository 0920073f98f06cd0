use itertools::Itertools;

use crate::math::vector::mean;
use crate::math::{Coordinate, FitError, FitResult};

/// Calculates `R² = 1 - SS_res / SS_tot` of the fitted points against the observed ones.
pub fn coefficient_of_determination(
    observed: &[Coordinate],
    fitted: &[Coordinate],
) -> FitResult<f64> {
    if observed.is_empty() {
        return Err(FitError::EmptyInput);
    }
    if observed.len() != fitted.len() {
        return Err(FitError::LengthMismatch {
            expected: observed.len(),
            got: fitted.len(),
        });
    }

    let ys = observed.iter().map(|point| point.y).collect_vec();
    let mean_y = mean(&ys);

    let total_sum_of_squares: f64 = ys.iter().map(|y| (y - mean_y).powi(2)).sum();
    if total_sum_of_squares == 0.0 {
        return Err(FitError::DegenerateInput);
    }
    let residual_sum_of_squares: f64 = ys
        .iter()
        .zip(fitted)
        .map(|(y, fitted)| (y - fitted.y).powi(2))
        .sum();

    Ok(1.0 - residual_sum_of_squares / total_sum_of_squares)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::linear_regression;
    use crate::quartet::Quartet;

    #[test]
    fn perfect_fit_ok() -> FitResult<()> {
        let points = [
            Coordinate::new(1.0, 3.0),
            Coordinate::new(2.0, 5.0),
            Coordinate::new(3.0, 7.0),
        ];
        let r_squared = coefficient_of_determination(&points, &linear_regression(&points)?)?;
        assert!((r_squared - 1.0).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn anscombe_ok() -> FitResult<()> {
        for quartet in Quartet::ALL {
            let points = quartet.points();
            let r_squared = coefficient_of_determination(points, &linear_regression(points)?)?;
            assert!((r_squared - 0.666).abs() < 1e-2, "{:?}: {}", quartet, r_squared);
        }
        Ok(())
    }

    #[test]
    fn empty_input_error() {
        assert_eq!(coefficient_of_determination(&[], &[]), Err(FitError::EmptyInput));
    }

    #[test]
    fn length_mismatch_error() {
        let observed = [Coordinate::new(1.0, 1.0), Coordinate::new(2.0, 3.0)];
        assert_eq!(
            coefficient_of_determination(&observed, &observed[..1]),
            Err(FitError::LengthMismatch { expected: 2, got: 1 }),
        );
    }

    #[test]
    fn constant_y_error() {
        let observed = [Coordinate::new(1.0, 2.0), Coordinate::new(2.0, 2.0)];
        assert_eq!(
            coefficient_of_determination(&observed, &observed),
            Err(FitError::DegenerateInput),
        );
    }
}
