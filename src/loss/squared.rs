/// Half squared error, `0.5 · (predicted − expected)²`, summed over outputs.
pub struct SquaredError;

impl SquaredError {
    /// Error contributed by a single output.
    pub fn term(predicted: f64, expected: f64) -> f64 {
        0.5 * (predicted - expected).powi(2)
    }

    /// Sum of `term` over outputs paired by position. Outputs with no
    /// matching expected value are scored against 0.0; surplus expected
    /// values are ignored.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        predicted.iter().enumerate()
            .map(|(i, p)| Self::term(*p, expected.get(i).copied().unwrap_or(0.0)))
            .sum()
    }

    /// Error signal of an output neuron: predicted - expected
    pub fn derivative(predicted: f64, expected: f64) -> f64 {
        predicted - expected
    }
}
