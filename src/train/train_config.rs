use std::sync::mpsc;

use crate::train::epoch_stats::EpochStats;

/// Configuration for a `Trainer` run.
///
/// # Fields
/// - `epochs`        : total number of full passes over the dataset
/// - `log_frequency` : an `info` line is logged for epoch 0, every
///                     `log_frequency`-th epoch and the last epoch; `0`
///                     keeps only the first and last
/// - `progress_tx`   : optional channel sender; one `EpochStats` is sent per
///                     completed epoch. A dropped receiver does not stop
///                     training.
pub struct TrainConfig {
    pub epochs: usize,
    pub log_frequency: usize,
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
}

impl TrainConfig {
    /// Creates a minimal `TrainConfig` with no progress channel.
    pub fn new(epochs: usize, log_frequency: usize) -> Self {
        TrainConfig {
            epochs,
            log_frequency,
            progress_tx: None,
        }
    }

    pub fn with_progress(mut self, progress_tx: mpsc::Sender<EpochStats>) -> Self {
        self.progress_tx = Some(progress_tx);
        self
    }

    /// Whether `epoch` gets a log line.
    pub fn should_log(&self, epoch: usize) -> bool {
        epoch == 0
            || epoch + 1 == self.epochs
            || (self.log_frequency > 0 && epoch % self.log_frequency == 0)
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(10_001, 1_000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_log_first_periodic_and_last() {
        let config = TrainConfig::new(25, 10);
        let logged: Vec<usize> = (0..25).filter(|&e| config.should_log(e)).collect();
        assert_eq!(logged, vec![0, 10, 20, 24]);
    }

    #[test]
    fn test_zero_frequency_logs_ends_only() {
        let config = TrainConfig::new(5, 0);
        let logged: Vec<usize> = (0..5).filter(|&e| config.should_log(e)).collect();
        assert_eq!(logged, vec![0, 4]);
    }
}
