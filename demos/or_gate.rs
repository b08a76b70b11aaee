use neuron_graph::{or_gate, Network, Trainer};

fn main() -> neuron_graph::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut network = Network::new(&[2, 1])?;
    let samples = or_gate();

    let error = Trainer::new(&mut network, &samples).train(10_001, 1_000)?;
    println!("Final mean error: {error:.6}");

    for sample in &samples {
        let output = network.predict(&sample.inputs)?[0];
        println!("Input: {:?} -> Output: {:.4}", sample.inputs, output);
    }
    Ok(())
}
