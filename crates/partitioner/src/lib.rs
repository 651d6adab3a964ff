pub mod config;
pub mod error;
pub mod layout;
pub mod pipeline;
pub mod samples;
pub mod shards;

pub use config::PartitionConfig;
pub use error::{PartitionError, Result};
pub use layout::{ensure_output_layout, shard_file_name, OutputLayout};
pub use pipeline::{run, PartitionReport, WorkerFiles};
pub use samples::{load_lines, Line, SampleSet};
pub use shards::{write_test_file, write_training_shards, PartitionPlan, ShardSummary, TrainingShards};
