pub mod connection;
pub mod neuron;
pub mod graph;

pub use connection::{Connection, ConnectionId};
pub use neuron::{Neuron, NeuronId};
pub use graph::Graph;
