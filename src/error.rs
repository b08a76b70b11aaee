use thiserror::Error;

use crate::graph::connection::ConnectionId;
use crate::graph::neuron::NeuronId;

/// Everything that can go wrong while building or driving a network.
///
/// Shape mismatches between value slices and layers are not errors: values
/// are paired by position and unmatched neurons fall back to their defaults.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("a network needs at least one layer")]
    EmptyTopology,
    #[error("cannot train on an empty dataset")]
    EmptyDataset,
    #[error("layer {index} has no neurons")]
    EmptyLayer { index: usize },
    #[error("cyclic dependency while resolving the output of neuron {neuron}")]
    CyclicDependency { neuron: NeuronId },
    #[error("neuron {neuron} has not been activated yet")]
    NotActivated { neuron: NeuronId },
    #[error("neuron {neuron} has no delta; train its children first")]
    MissingDelta { neuron: NeuronId },
    #[error("neuron {neuron} does not belong to this graph")]
    UnknownNeuron { neuron: NeuronId },
    #[error("connection {connection} does not belong to this graph")]
    UnknownConnection { connection: ConnectionId },
    #[error("bias neuron {neuron} cannot take incoming connections")]
    BiasHasNoInputs { neuron: NeuronId },
    #[error("invalid uniform weight range [{low}, {high})")]
    InvalidWeightRange { low: f64, high: f64 },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NetworkError>;
