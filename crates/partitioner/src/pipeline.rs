use serde::Serialize;
use std::path::PathBuf;

use crate::config::PartitionConfig;
use crate::error::Result;
use crate::layout::{ensure_output_layout, OutputLayout};
use crate::samples::load_lines;
use crate::shards::{write_test_file, write_training_shards, PartitionPlan, ShardSummary};

/// Files a trainer worker reads and writes, by 0-based rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkerFiles {
    pub rank: usize,
    pub train_shard: PathBuf,
    pub test_file: PathBuf,
    pub model_file: PathBuf,
}

impl WorkerFiles {
    fn for_rank(layout: &OutputLayout, rank: usize) -> Self {
        Self {
            rank,
            train_shard: layout.train_shard(rank),
            test_file: layout.test_file(),
            model_file: layout.model_file(rank),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PartitionReport {
    pub data_dir: PathBuf,
    pub plan: PartitionPlan,
    pub train_shards: Vec<ShardSummary>,
    pub dropped_train_lines: usize,
    pub test: ShardSummary,
    pub workers: Vec<WorkerFiles>,
    pub seed: Option<u64>,
}

/// Builds the full train/test/models layout for `config`.
///
/// Steps run in order and the first failure aborts the run. Anything
/// written before it stays on disk.
pub fn run(config: &PartitionConfig) -> Result<PartitionReport> {
    config.validate()?;
    let layout = ensure_output_layout(&config.data_dir)?;
    let mut rng = config.rng();

    log::info!("generating train data...");
    let samples = load_lines(config.train_source(), true, &mut rng)?;
    let written = write_training_shards(&samples, layout.train_dir(), config.num_parts)?;
    drop(samples);
    let plan = written.plan;
    log::debug!(
        "{} shards of {} lines, {} lines dropped",
        plan.num_parts,
        plan.part_size,
        plan.dropped()
    );

    log::info!("generating test data...");
    let samples = load_lines(config.test_source(), false, &mut rng)?;
    let test = write_test_file(&samples, layout.test_dir())?;

    let workers = (0..plan.num_parts)
        .map(|rank| WorkerFiles::for_rank(&layout, rank))
        .collect();

    log::info!("done.");
    Ok(PartitionReport {
        data_dir: config.data_dir.clone(),
        plan,
        train_shards: written.shards,
        dropped_train_lines: plan.dropped(),
        test,
        workers,
        seed: config.seed,
    })
}
