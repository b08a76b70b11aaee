use crate::error::Result;
use crate::graph::{Graph, NeuronId};

/// An ordered group of neurons in a `Graph`.
///
/// `size` counts the real neurons only. Once the layer is wired forward with
/// `connect_with_layer` a bias neuron is appended after them, so the bias
/// (when present) is always the last element of `neurons`.
#[derive(Debug, Clone)]
pub struct Layer {
    size: usize,
    neurons: Vec<NeuronId>,
}

impl Layer {
    pub fn new(graph: &mut Graph, size: usize) -> Layer {
        let neurons = (0..size).map(|_| graph.add_neuron()).collect();
        Layer { size, neurons }
    }

    /// Number of real (non-bias) neurons.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Every neuron of the layer, bias included.
    pub fn neurons(&self) -> &[NeuronId] {
        &self.neurons
    }

    /// The first `size` neurons, i.e. everything except bias neurons.
    pub fn real_neurons(&self) -> &[NeuronId] {
        &self.neurons[..self.size]
    }

    /// The most recently appended bias neuron, if the layer has been wired.
    pub fn bias(&self) -> Option<NeuronId> {
        if self.neurons.len() > self.size {
            self.neurons.last().copied()
        } else {
            None
        }
    }

    /// Activates each neuron in order, paired by position with `values`.
    /// Neurons past the end of `values` sum their own inputs.
    pub fn activate(&self, graph: &mut Graph, values: &[f64]) -> Result<()> {
        for (i, &neuron) in self.neurons.iter().enumerate() {
            graph.activate(neuron, values.get(i).copied())?;
        }
        Ok(())
    }

    /// Trains each neuron in order, paired by position with `targets`.
    /// Neurons past the end of `targets` train toward 0.0.
    pub fn train(&self, graph: &mut Graph, targets: &[f64]) -> Result<()> {
        for (i, &neuron) in self.neurons.iter().enumerate() {
            graph.train(neuron, targets.get(i).copied().unwrap_or(0.0))?;
        }
        Ok(())
    }

    /// Appends a bias neuron, then connects every neuron of this layer (bias
    /// included) to every neuron of `next`.
    ///
    /// Meant to be called once per layer pair; a second call adds a second
    /// bias and a second full set of edges.
    pub fn connect_with_layer(&mut self, graph: &mut Graph, next: &Layer) -> Result<()> {
        self.neurons.push(graph.add_bias());
        for &child in &next.neurons {
            for &parent in &self.neurons {
                graph.connect_default(parent, child)?;
            }
        }
        Ok(())
    }

    /// Current outputs of every neuron, in order.
    pub fn outputs(&self, graph: &Graph) -> Result<Vec<f64>> {
        self.neurons.iter().map(|&neuron| graph.output_of(neuron)).collect()
    }
}
