use std::fmt;

use serde::{Serialize, Deserialize};

use crate::graph::connection::ConnectionId;

/// Learning rate given to a new neuron when nothing else is asked for.
pub const DEFAULT_LEARNING_RATE: f64 = 0.3;

/// Fixed output of every bias neuron.
pub const BIAS_OUTPUT: f64 = 1.0;

/// Stable index of a neuron inside its `Graph`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NeuronId(pub(crate) usize);

impl NeuronId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NeuronId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// A graph node: scalar input/output state, the ids of its incoming and
/// outgoing connections, and the backprop error signal.
///
/// `input`, `output` and `delta` stay `None` until the first activate/train
/// cycle reaches the neuron.
#[derive(Debug, Clone)]
pub struct Neuron {
    pub(crate) input: Option<f64>,
    pub(crate) output: Option<f64>,
    pub(crate) incoming: Vec<ConnectionId>,
    pub(crate) outgoing: Vec<ConnectionId>,
    pub(crate) is_bias: bool,
    pub(crate) delta: Option<f64>,
    pub learning_rate: f64,
    // Set while this neuron's inputs are being summed; re-entry means a cycle.
    pub(crate) resolving: bool,
}

impl Neuron {
    pub fn new(learning_rate: f64) -> Neuron {
        Neuron {
            input: None,
            output: None,
            incoming: Vec::new(),
            outgoing: Vec::new(),
            is_bias: false,
            delta: None,
            learning_rate,
            resolving: false,
        }
    }

    /// A bias neuron: no inputs, output pinned at `BIAS_OUTPUT`.
    pub fn bias(learning_rate: f64) -> Neuron {
        Neuron {
            output: Some(BIAS_OUTPUT),
            is_bias: true,
            ..Neuron::new(learning_rate)
        }
    }

    pub fn input(&self) -> Option<f64> {
        self.input
    }

    pub fn output(&self) -> Option<f64> {
        self.output
    }

    pub fn delta(&self) -> Option<f64> {
        self.delta
    }

    pub fn is_bias(&self) -> bool {
        self.is_bias
    }

    /// Output neurons are exactly the ones that feed nothing.
    pub fn is_output(&self) -> bool {
        self.outgoing.is_empty()
    }

    pub fn incoming(&self) -> &[ConnectionId] {
        &self.incoming
    }

    pub fn outgoing(&self) -> &[ConnectionId] {
        &self.outgoing
    }
}

impl Default for Neuron {
    fn default() -> Self {
        Neuron::new(DEFAULT_LEARNING_RATE)
    }
}
