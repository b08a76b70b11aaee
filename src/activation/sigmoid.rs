use std::f64::consts::E;

/// Logistic sigmoid: 1 / (1 + e^-x).
///
/// Saturates instead of failing: very negative inputs give 0.0 and very
/// positive inputs give 1.0, since `e^-x` overflows to infinity (or
/// underflows to zero) under IEEE-754.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sigmoid_of_zero_is_one_half() {
        assert_eq!(sigmoid(0.0), 0.5);
    }

    #[test]
    fn test_sigmoid_of_one_half() {
        assert!((sigmoid(0.5) - 0.622459331202).abs() < 1e-9);
    }

    #[test]
    fn test_sigmoid_saturates() {
        assert_eq!(sigmoid(-1.0e4), 0.0);
        assert_eq!(sigmoid(1.0e4), 1.0);
        assert!(sigmoid(f64::NEG_INFINITY).is_finite());
    }
}
