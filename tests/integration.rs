//! End-to-end training tests for neuron-graph

use neuron_graph::{or_gate, Graph, Layer, Network, Sample, TrainConfig, Trainer};

#[test]
fn test_or_gate_converges() {
    let mut network = Network::new(&[2, 1]).unwrap();
    let samples = or_gate();

    let error = Trainer::new(&mut network, &samples).train(10_000, 1_000).unwrap();
    assert!(error < 0.01, "mean error {error} did not converge");

    assert!(network.predict(&[1.0, 1.0]).unwrap()[0] > 0.9);
    assert!(network.predict(&[1.0, 0.0]).unwrap()[0] > 0.9);
    assert!(network.predict(&[0.0, 1.0]).unwrap()[0] > 0.9);
    assert!(network.predict(&[0.0, 0.0]).unwrap()[0] < 0.1);
}

#[test]
fn test_or_gate_converges_within_five_thousand_epochs() {
    let mut network = Network::new(&[2, 1]).unwrap();
    let samples = or_gate();

    let history = Trainer::new(&mut network, &samples)
        .train_with(&TrainConfig::new(5_000, 0))
        .unwrap();
    let last = history.last().unwrap();
    assert!(last.mean_error < 0.01);
    assert!(last.mean_error < history[0].mean_error);
    assert!(network.predict(&[0.0, 0.0]).unwrap()[0] < 0.1);
}

#[test]
fn test_hidden_layer_or_gate() {
    let mut network = Network::new(&[2, 3, 1]).unwrap();
    let samples = or_gate();

    let error = Trainer::new(&mut network, &samples).train(5_000, 0).unwrap();
    assert!(error < 0.001);
    assert!(network.predict(&[0.0, 0.0]).unwrap()[0] < 0.05);
}

#[test]
fn test_first_epoch_error_matches_hand_computation() {
    // One epoch with a single sample: error is scored after the update.
    let mut network = Network::new(&[1, 1]).unwrap();
    let samples = vec![Sample::new(vec![0.0], vec![1.0])];
    let error = Trainer::new(&mut network, &samples).train(1, 1).unwrap();

    let sig = |x: f64| 1.0 / (1.0 + (-x).exp());
    let out = sig(0.4 * 0.5 + 0.4);
    let delta = out - 1.0;
    // Output weights are updated, but the stored output is from before the update.
    let expected = 0.5 * delta * delta;
    assert!((error - expected).abs() < 1e-12);

    let weights: Vec<f64> = network.graph().connections().iter().map(|c| c.weight).collect();
    assert!((weights[0] - (0.4 - 0.3 * 0.5 * delta)).abs() < 1e-12);
    assert!((weights[1] - (0.4 - 0.3 * 1.0 * delta)).abs() < 1e-12);
}

#[test]
fn test_layer_wiring_counts() {
    let mut graph = Graph::new();
    let mut first = Layer::new(&mut graph, 4);
    let second = Layer::new(&mut graph, 3);
    first.connect_with_layer(&mut graph, &second).unwrap();

    let outgoing: usize = first.neurons().iter()
        .map(|&n| graph.neuron(n).unwrap().outgoing().len())
        .sum();
    assert_eq!(outgoing, (4 + 1) * 3);

    let bias = first.bias().unwrap();
    assert_eq!(graph.neuron(bias).unwrap().outgoing().len(), 3);
}
