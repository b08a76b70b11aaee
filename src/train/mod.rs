pub mod dataset;
pub mod epoch_stats;
pub mod train_config;
pub mod trainer;

pub use dataset::{or_gate, Sample};
pub use epoch_stats::EpochStats;
pub use train_config::TrainConfig;
pub use trainer::Trainer;
