use std::fmt;

use serde::{Serialize, Deserialize};

use crate::graph::neuron::NeuronId;

/// Weight given to a new connection when nothing else is asked for.
pub const DEFAULT_WEIGHT: f64 = 0.4;

/// Stable index of a connection inside its `Graph`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectionId(pub(crate) usize);

impl ConnectionId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// A directed, weighted edge `parent -> child`.
///
/// The record lives once in the graph arena; the parent lists its id as
/// outgoing and the child lists the same id as incoming, so a weight update
/// is seen from both ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub parent: NeuronId,
    pub child: NeuronId,
    pub weight: f64,
}

impl Connection {
    pub fn new(parent: NeuronId, child: NeuronId, weight: f64) -> Connection {
        Connection { parent, child, weight }
    }
}
