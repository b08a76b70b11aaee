use log::debug;

use crate::error::{NetworkError, Result};
use crate::graph::{Graph, Neuron, NeuronId};
use crate::layers::dense::Layer;
use crate::loss::squared::SquaredError;
use crate::network::topology::Topology;

/// Layers of neurons, each fully connected to the next, over one owned graph.
#[derive(Debug, Clone)]
pub struct Network {
    graph: Graph,
    layers: Vec<Layer>,
}

impl Network {
    /// Builds a network from layer sizes with the default weight (0.4) and
    /// learning rate (0.3).
    pub fn new(sizes: &[usize]) -> Result<Network> {
        Network::from_topology(&Topology::new(sizes.to_vec()))
    }

    /// Builds one layer per size and wires each layer to the next in forward
    /// order, so every layer but the last ends with a bias neuron.
    pub fn from_topology(topology: &Topology) -> Result<Network> {
        if topology.sizes.is_empty() {
            return Err(NetworkError::EmptyTopology);
        }
        if let Some(index) = topology.sizes.iter().position(|&size| size == 0) {
            return Err(NetworkError::EmptyLayer { index });
        }

        let weights = topology.weight_init.sampler(topology.default_weight)?;
        let mut graph = Graph::with_defaults(topology.learning_rate, weights);
        let mut layers: Vec<Layer> = topology.sizes.iter()
            .map(|&size| Layer::new(&mut graph, size))
            .collect();

        for i in 0..layers.len() - 1 {
            let (head, tail) = layers.split_at_mut(i + 1);
            head[i].connect_with_layer(&mut graph, &tail[0])?;
        }

        debug!(
            "built network {:?}: {} neurons, {} connections",
            topology.sizes,
            graph.neurons().len(),
            graph.connections().len()
        );
        Ok(Network { graph, layers })
    }

    /// Forward pass: drives the input layer with `inputs`, then lets every
    /// later layer, in order, sum its incoming connections.
    pub fn activate(&mut self, inputs: &[f64]) -> Result<()> {
        let (input_layer, rest) = self.layers.split_first()
            .ok_or(NetworkError::EmptyTopology)?;
        input_layer.activate(&mut self.graph, inputs)?;
        for layer in rest {
            layer.activate(&mut self.graph, &[])?;
        }
        Ok(())
    }

    /// Backward pass: the output layer trains toward `targets`, then every
    /// earlier layer, last to first, trains from its children's deltas.
    pub fn train(&mut self, targets: &[f64]) -> Result<()> {
        let (output_layer, rest) = self.layers.split_last()
            .ok_or(NetworkError::EmptyTopology)?;
        output_layer.train(&mut self.graph, targets)?;
        for layer in rest.iter().rev() {
            layer.train(&mut self.graph, &[])?;
        }
        Ok(())
    }

    /// Σ 0.5·(output − target)² over the output layer, paired by position.
    pub fn calculate_error(&self, targets: &[f64]) -> Result<f64> {
        Ok(SquaredError::loss(&self.outputs()?, targets))
    }

    /// Current outputs of the output layer.
    pub fn outputs(&self) -> Result<Vec<f64>> {
        self.output_layer().outputs(&self.graph)
    }

    /// Runs a forward pass and returns the output layer's values.
    pub fn predict(&mut self, inputs: &[f64]) -> Result<Vec<f64>> {
        self.activate(inputs)?;
        self.outputs()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn output_layer(&self) -> &Layer {
        // Construction guarantees at least one layer.
        &self.layers[self.layers.len() - 1]
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn neuron(&self, id: NeuronId) -> Result<&Neuron> {
        self.graph.neuron(id)
    }
}
