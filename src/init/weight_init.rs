use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Serialize, Deserialize};

use crate::error::{NetworkError, Result};

/// How the weights of freshly wired connections are chosen.
///
/// - `Constant` : every connection starts at the network's default weight.
/// - `Uniform`  : weights drawn from `[low, high)` by an RNG seeded with
///                `seed`, so two networks built from the same topology are
///                identical.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightInit {
    #[default]
    Constant,
    Uniform { low: f64, high: f64, seed: u64 },
}

impl WeightInit {
    /// Builds the stateful source of initial weights for one network.
    pub fn sampler(&self, default_weight: f64) -> Result<WeightSampler> {
        match *self {
            WeightInit::Constant => Ok(WeightSampler::Constant(default_weight)),
            WeightInit::Uniform { low, high, seed } => {
                if !(low.is_finite() && high.is_finite() && low < high) {
                    return Err(NetworkError::InvalidWeightRange { low, high });
                }
                Ok(WeightSampler::Uniform {
                    low,
                    high,
                    rng: StdRng::seed_from_u64(seed),
                })
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum WeightSampler {
    Constant(f64),
    Uniform { low: f64, high: f64, rng: StdRng },
}

impl WeightSampler {
    pub fn next_weight(&mut self) -> f64 {
        match self {
            WeightSampler::Constant(weight) => *weight,
            WeightSampler::Uniform { low, high, rng } => rng.gen_range(*low..*high),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_always_yields_default() {
        let mut sampler = WeightInit::Constant.sampler(0.4).unwrap();
        assert_eq!(sampler.next_weight(), 0.4);
        assert_eq!(sampler.next_weight(), 0.4);
    }

    #[test]
    fn test_uniform_is_seeded_and_bounded() {
        let init = WeightInit::Uniform { low: -0.5, high: 0.5, seed: 7 };
        let mut a = init.sampler(0.4).unwrap();
        let mut b = init.sampler(0.4).unwrap();
        for _ in 0..100 {
            let w = a.next_weight();
            assert_eq!(w, b.next_weight());
            assert!((-0.5..0.5).contains(&w));
        }
    }

    #[test]
    fn test_uniform_rejects_empty_range() {
        let init = WeightInit::Uniform { low: 1.0, high: 1.0, seed: 0 };
        assert!(matches!(
            init.sampler(0.4),
            Err(NetworkError::InvalidWeightRange { .. })
        ));
    }
}
