use std::fmt::{Display, Formatter};

pub type FitResult<T> = Result<T, FitError>;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FitError {
    /// No points were supplied.
    EmptyInput,

    /// The denominator of the estimator is zero, for example when all x are identical.
    DegenerateInput,

    /// Paired sequences differ in length.
    LengthMismatch { expected: usize, got: usize },
}

impl Display for FitError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => formatter.write_str("empty input"),
            Self::DegenerateInput => formatter.write_str("degenerate input: zero denominator"),
            Self::LengthMismatch { expected, got } => {
                write!(formatter, "length mismatch: expected {} points, got {}", expected, got)
            }
        }
    }
}

impl std::error::Error for FitError {}
