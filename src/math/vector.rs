pub type Vector = Vec<f64>;

#[must_use]
pub fn mean(x: &[f64]) -> f64 {
    x.iter().sum::<f64>() / x.len() as f64
}

#[must_use]
#[inline]
pub fn dot(x: &[f64], y: &[f64]) -> f64 {
    x.iter().zip(y).fold(0.0, |dot, (xi, yi)| dot + xi * yi)
}

/// Subtracts the mean from every element.
#[must_use]
pub fn deviations(x: &[f64]) -> Vector {
    let mean = mean(x);
    x.iter().map(|xi| xi - mean).collect()
}
