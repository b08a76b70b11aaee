use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::graph::connection::DEFAULT_WEIGHT;
use crate::graph::neuron::DEFAULT_LEARNING_RATE;
use crate::init::weight_init::WeightInit;

/// A serializable description of a network's shape and per-network defaults.
///
/// `Topology` describes how to build a network, not what it has learned:
/// trained weights are never part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topology {
    /// Neurons per layer, input layer first. Bias neurons are not counted.
    pub sizes: Vec<usize>,
    /// Initial weight of every connection under `WeightInit::Constant`.
    #[serde(default = "default_weight")]
    pub default_weight: f64,
    /// Learning rate given to every neuron.
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    #[serde(default)]
    pub weight_init: WeightInit,
}

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

fn default_learning_rate() -> f64 {
    DEFAULT_LEARNING_RATE
}

impl Topology {
    /// Layer sizes with the default weight (0.4) and learning rate (0.3).
    pub fn new(sizes: Vec<usize>) -> Topology {
        Topology {
            sizes,
            default_weight: DEFAULT_WEIGHT,
            learning_rate: DEFAULT_LEARNING_RATE,
            weight_init: WeightInit::Constant,
        }
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Topology {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_default_weight(mut self, default_weight: f64) -> Topology {
        self.default_weight = default_weight;
        self
    }

    pub fn with_weight_init(mut self, weight_init: WeightInit) -> Topology {
        self.weight_init = weight_init;
        self
    }

    /// Serializes the topology to a pretty-printed JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a topology from a JSON file previously written by `save_json`.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Topology> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
