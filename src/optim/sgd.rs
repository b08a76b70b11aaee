/// Plain stochastic gradient descent with a fixed learning rate.
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one update: `weight -= learning_rate * gradient`. No clipping.
    pub fn step(&self, weight: &mut f64, gradient: f64) {
        *weight -= gradient * self.learning_rate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_moves_against_gradient() {
        let sgd = Sgd::new(0.3);
        let mut weight = 0.4;
        sgd.step(&mut weight, 1.0);
        assert!((weight - 0.1).abs() < 1e-12);
        sgd.step(&mut weight, -2.0);
        assert!((weight - 0.7).abs() < 1e-12);
    }
}
