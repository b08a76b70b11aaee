use serde::{Serialize, Deserialize};

/// One labeled example: input layer values and the expected output layer values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub inputs: Vec<f64>,
    pub targets: Vec<f64>,
}

impl Sample {
    pub fn new(inputs: Vec<f64>, targets: Vec<f64>) -> Sample {
        Sample { inputs, targets }
    }
}

/// The OR truth table, in the fixed order training expects.
pub fn or_gate() -> Vec<Sample> {
    vec![
        Sample::new(vec![0.0, 0.0], vec![0.0]),
        Sample::new(vec![1.0, 0.0], vec![1.0]),
        Sample::new(vec![1.0, 1.0], vec![1.0]),
        Sample::new(vec![0.0, 1.0], vec![1.0]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_gate_labels() {
        for sample in or_gate() {
            let expected = if sample.inputs.iter().any(|&x| x != 0.0) { 1.0 } else { 0.0 };
            assert_eq!(sample.targets, vec![expected]);
        }
    }
}
