use crate::activation::sigmoid;
use crate::error::{NetworkError, Result};
use crate::graph::connection::{Connection, ConnectionId, DEFAULT_WEIGHT};
use crate::graph::neuron::{Neuron, NeuronId, DEFAULT_LEARNING_RATE};
use crate::init::weight_init::WeightSampler;
use crate::loss::squared::SquaredError;
use crate::optim::sgd::Sgd;

/// Arena holding every neuron and connection of one network.
///
/// Neurons and connections are addressed by stable ids and are never removed,
/// so an id handed out once stays valid for the life of the graph. Each
/// neuron keeps only the ids of its incoming and outgoing connections; the
/// connection records themselves live here.
#[derive(Debug, Clone)]
pub struct Graph {
    neurons: Vec<Neuron>,
    connections: Vec<Connection>,
    learning_rate: f64,
    weights: WeightSampler,
}

impl Graph {
    pub fn new() -> Graph {
        Graph::with_defaults(DEFAULT_LEARNING_RATE, WeightSampler::Constant(DEFAULT_WEIGHT))
    }

    /// A graph whose new neurons get `learning_rate` and whose
    /// `connect_default` draws weights from `weights`.
    pub fn with_defaults(learning_rate: f64, weights: WeightSampler) -> Graph {
        Graph {
            neurons: Vec::new(),
            connections: Vec::new(),
            learning_rate,
            weights,
        }
    }

    pub fn add_neuron(&mut self) -> NeuronId {
        self.push(Neuron::new(self.learning_rate))
    }

    pub fn add_bias(&mut self) -> NeuronId {
        self.push(Neuron::bias(self.learning_rate))
    }

    fn push(&mut self, neuron: Neuron) -> NeuronId {
        self.neurons.push(neuron);
        NeuronId(self.neurons.len() - 1)
    }

    pub fn neuron(&self, id: NeuronId) -> Result<&Neuron> {
        self.neurons.get(id.0).ok_or(NetworkError::UnknownNeuron { neuron: id })
    }

    pub fn neuron_mut(&mut self, id: NeuronId) -> Result<&mut Neuron> {
        self.neurons.get_mut(id.0).ok_or(NetworkError::UnknownNeuron { neuron: id })
    }

    pub fn connection(&self, id: ConnectionId) -> Result<&Connection> {
        self.connections.get(id.0).ok_or(NetworkError::UnknownConnection { connection: id })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Output of `id`, failing if it has never been activated.
    pub fn output_of(&self, id: NeuronId) -> Result<f64> {
        self.neuron(id)?.output.ok_or(NetworkError::NotActivated { neuron: id })
    }

    /// Wires `parent -> child` with the given weight.
    ///
    /// Not idempotent: connecting the same pair twice creates two parallel
    /// connections, both of which take part in activation and training.
    /// A bias neuron can only be a parent.
    pub fn connect(&mut self, parent: NeuronId, child: NeuronId, weight: f64) -> Result<ConnectionId> {
        self.neuron(parent)?;
        if self.neuron(child)?.is_bias {
            return Err(NetworkError::BiasHasNoInputs { neuron: child });
        }
        let id = ConnectionId(self.connections.len());
        self.connections.push(Connection::new(parent, child, weight));
        self.neurons[parent.0].outgoing.push(id);
        self.neurons[child.0].incoming.push(id);
        Ok(id)
    }

    /// Wires `parent -> child` with the next weight from the graph's sampler.
    pub fn connect_default(&mut self, parent: NeuronId, child: NeuronId) -> Result<ConnectionId> {
        let weight = self.weights.next_weight();
        self.connect(parent, child, weight)
    }

    /// Computes and stores the output of `id`.
    ///
    /// Bias neurons ignore `value` and return their fixed output. Any other
    /// neuron takes `value` as its input when given one (zero included) and
    /// otherwise sums its weighted inputs, activating unresolved parents on
    /// the way.
    pub fn activate(&mut self, id: NeuronId, value: Option<f64>) -> Result<f64> {
        let neuron = self.neuron(id)?;
        if neuron.is_bias {
            return self.output_of(id);
        }

        let input = match value {
            Some(value) => value,
            None => self.sum_inputs(id)?,
        };
        let output = sigmoid(input);

        let neuron = &mut self.neurons[id.0];
        neuron.input = Some(input);
        neuron.output = Some(output);
        Ok(output)
    }

    /// Σ parent.output × weight over the incoming connections of `id`.
    ///
    /// A parent with no output yet is activated first. Reaching `id` again
    /// while its own sum is in progress fails with `CyclicDependency`.
    pub fn sum_inputs(&mut self, id: NeuronId) -> Result<f64> {
        let neuron = self.neuron_mut(id)?;
        if neuron.resolving {
            return Err(NetworkError::CyclicDependency { neuron: id });
        }
        neuron.resolving = true;
        let sum = self.accumulate_inputs(id);
        self.neurons[id.0].resolving = false;
        sum
    }

    fn accumulate_inputs(&mut self, id: NeuronId) -> Result<f64> {
        let mut sum = 0.0;
        for i in 0..self.neurons[id.0].incoming.len() {
            let connection = self.connections[self.neurons[id.0].incoming[i].0];
            let parent_output = match self.neurons[connection.parent.0].output {
                Some(output) => output,
                None => self.activate(connection.parent, None)?,
            };
            sum += parent_output * connection.weight;
        }
        Ok(sum)
    }

    /// Backprop step for one neuron, then SGD on its outgoing weights.
    ///
    /// Output neurons take `delta = output - target`; hidden neurons pull
    /// `delta = Σ weight × child.delta` from the (pre-update) outgoing
    /// weights, so every child must already be trained in this pass. Bias
    /// neurons keep no delta but still update their outgoing weights.
    pub fn train(&mut self, id: NeuronId, target: f64) -> Result<()> {
        let output = self.output_of(id)?;
        let neuron = &self.neurons[id.0];

        if !neuron.is_bias {
            let delta = if neuron.is_output() {
                SquaredError::derivative(output, target)
            } else {
                neuron.outgoing.iter()
                    .map(|c| -> Result<f64> {
                        let connection = &self.connections[c.0];
                        Ok(connection.weight * self.delta_of(connection.child)?)
                    })
                    .sum::<Result<f64>>()?
            };
            self.neurons[id.0].delta = Some(delta);
        }

        let sgd = Sgd::new(self.neurons[id.0].learning_rate);
        for i in 0..self.neurons[id.0].outgoing.len() {
            let connection_id = self.neurons[id.0].outgoing[i];
            let child_delta = self.delta_of(self.connections[connection_id.0].child)?;
            sgd.step(&mut self.connections[connection_id.0].weight, output * child_delta);
        }
        Ok(())
    }

    fn delta_of(&self, id: NeuronId) -> Result<f64> {
        self.neuron(id)?.delta.ok_or(NetworkError::MissingDelta { neuron: id })
    }
}

impl Default for Graph {
    fn default() -> Self {
        Graph::new()
    }
}
