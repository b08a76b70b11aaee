pub mod activation;
pub mod error;
pub mod graph;
pub mod init;
pub mod layers;
pub mod loss;
pub mod network;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use activation::sigmoid::sigmoid;
pub use error::{NetworkError, Result};
pub use graph::{Connection, ConnectionId, Graph, Neuron, NeuronId};
pub use init::weight_init::WeightInit;
pub use layers::dense::Layer;
pub use network::{Network, Topology};
pub use loss::squared::SquaredError;
pub use optim::sgd::Sgd;
pub use train::{or_gate, EpochStats, Sample, TrainConfig, Trainer};
