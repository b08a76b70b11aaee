use std::time::Instant;

use log::{info, warn};

use crate::error::{NetworkError, Result};
use crate::network::network::Network;
use crate::train::dataset::Sample;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

/// Drives online gradient descent over a fixed dataset.
///
/// Every epoch visits the samples in dataset order (no shuffling): activate,
/// train, then score the example with `calculate_error`.
pub struct Trainer<'a> {
    network: &'a mut Network,
    samples: &'a [Sample],
}

impl<'a> Trainer<'a> {
    pub fn new(network: &'a mut Network, samples: &'a [Sample]) -> Trainer<'a> {
        Trainer { network, samples }
    }

    /// Trains for `epochs` epochs and returns the mean error of the last one
    /// (0.0 when `epochs` is 0).
    pub fn train(&mut self, epochs: usize, log_frequency: usize) -> Result<f64> {
        let history = self.train_with(&TrainConfig::new(epochs, log_frequency))?;
        Ok(history.last().map_or(0.0, |stats| stats.mean_error))
    }

    /// Trains per `config` and returns the statistics of every epoch.
    ///
    /// Runs to completion: there is no early stopping, and a diverging run
    /// is only reported through a warning and the returned errors.
    pub fn train_with(&mut self, config: &TrainConfig) -> Result<Vec<EpochStats>> {
        if self.samples.is_empty() {
            return Err(NetworkError::EmptyDataset);
        }

        let mut history = Vec::with_capacity(config.epochs);
        for epoch in 0..config.epochs {
            let t_start = Instant::now();
            let mean_error = self.run_one_epoch()?;

            let stats = EpochStats {
                epoch,
                total_epochs: config.epochs,
                mean_error,
                elapsed_ms: t_start.elapsed().as_millis() as u64,
            };

            if config.should_log(epoch) {
                info!("epoch {} error = {}", epoch, mean_error);
            }
            if !mean_error.is_finite() {
                warn!("epoch {} error is {}; training has diverged", epoch, mean_error);
            }
            if let Some(ref tx) = config.progress_tx {
                // A receiver that went away just stops listening.
                let _ = tx.send(stats.clone());
            }
            history.push(stats);
        }
        Ok(history)
    }

    /// One pass over the dataset; returns the mean per-sample error.
    fn run_one_epoch(&mut self) -> Result<f64> {
        let mut accumulated_error = 0.0;
        for sample in self.samples {
            self.network.activate(&sample.inputs)?;
            self.network.train(&sample.targets)?;
            accumulated_error += self.network.calculate_error(&sample.targets)?;
        }
        Ok(accumulated_error / self.samples.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use crate::train::dataset::or_gate;

    #[test]
    fn test_empty_dataset_is_rejected() {
        let mut network = Network::new(&[2, 1]).unwrap();
        let mut trainer = Trainer::new(&mut network, &[]);
        assert!(matches!(trainer.train(10, 1), Err(NetworkError::EmptyDataset)));
    }

    #[test]
    fn test_zero_epochs_leaves_network_untouched() {
        let mut network = Network::new(&[2, 1]).unwrap();
        let samples = or_gate();
        let error = Trainer::new(&mut network, &samples).train(0, 1).unwrap();
        assert_eq!(error, 0.0);
        assert!(network.graph().connections().iter().all(|c| c.weight == 0.4));
    }

    #[test]
    fn test_history_and_progress_channel_agree() {
        let mut network = Network::new(&[2, 1]).unwrap();
        let samples = or_gate();
        let (tx, rx) = mpsc::channel();
        let config = TrainConfig::new(20, 5).with_progress(tx);

        let history = Trainer::new(&mut network, &samples).train_with(&config).unwrap();
        drop(config);
        let received: Vec<EpochStats> = rx.iter().collect();

        assert_eq!(history.len(), 20);
        assert_eq!(received, history);
        assert_eq!(history[0].epoch, 0);
        assert_eq!(history[19].total_epochs, 20);
        assert!(history[19].mean_error < history[0].mean_error);
    }

    #[test]
    fn test_dropped_receiver_does_not_stop_training() {
        let mut network = Network::new(&[2, 1]).unwrap();
        let samples = or_gate();
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let config = TrainConfig::new(3, 1).with_progress(tx);
        let history = Trainer::new(&mut network, &samples).train_with(&config).unwrap();
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_training_is_deterministic() {
        let samples = or_gate();
        let mut a = Network::new(&[2, 2, 1]).unwrap();
        let mut b = Network::new(&[2, 2, 1]).unwrap();
        let error_a = Trainer::new(&mut a, &samples).train(200, 0).unwrap();
        let error_b = Trainer::new(&mut b, &samples).train(200, 0).unwrap();
        assert_eq!(error_a, error_b);
    }
}
