use serde::{Serialize, Deserialize};

/// Per-epoch training statistics emitted by `Trainer`.
///
/// When a `progress_tx` channel is configured in `TrainConfig`, the trainer
/// sends one `EpochStats` value at the end of every completed epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 0-based epoch index.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Accumulated error of the epoch divided by the number of samples.
    pub mean_error: f64,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}
