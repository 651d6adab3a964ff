use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{PartitionError, Result};
use crate::layout::shard_file_name;
use crate::samples::Line;

/// Index of the first training line written to a shard. Line 0 of the
/// shuffled set is never written.
// NOTE: this matches the existing data generator. Whether skipping line 0 was
// meant to drop a header (libsvm files have none) is unresolved.
pub const TRAIN_CURSOR_START: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PartitionPlan {
    pub num_samples: usize,
    pub num_parts: usize,
    pub part_size: usize,
}

impl PartitionPlan {
    pub fn new(num_samples: usize, num_parts: usize) -> Result<Self> {
        if num_parts == 0 {
            return Err(PartitionError::InvalidPartCount(num_parts));
        }
        let plan = Self {
            num_samples,
            num_parts,
            part_size: num_samples / num_parts,
        };
        // With the cursor at 1, an exact multiple of `num_parts` leaves the
        // last shard one line short.
        if plan.end() > num_samples {
            return Err(PartitionError::ShardOverrun {
                needed: plan.end(),
                available: num_samples,
            });
        }
        Ok(plan)
    }

    pub fn total_written(&self) -> usize {
        self.num_parts * self.part_size
    }

    /// Lines never written: the skipped first line plus the remainder.
    pub fn dropped(&self) -> usize {
        self.num_samples - self.total_written()
    }

    /// Sample range of the 0-based shard `index`. Empty shards get `0..0`
    /// so the range stays in bounds even for an empty sample set.
    pub fn shard_range(&self, index: usize) -> std::ops::Range<usize> {
        if self.part_size == 0 {
            return 0..0;
        }
        let start = TRAIN_CURSOR_START + index * self.part_size;
        start..start + self.part_size
    }

    fn end(&self) -> usize {
        if self.part_size == 0 {
            0
        } else {
            TRAIN_CURSOR_START + self.total_written()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShardSummary {
    pub path: PathBuf,
    pub lines: usize,
}

/// Shards written by [`write_training_shards`] and the plan that sized them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrainingShards {
    pub plan: PartitionPlan,
    pub shards: Vec<ShardSummary>,
}

fn write_shard(path: &Path, lines: &[Line]) -> Result<ShardSummary> {
    let file = File::create(path).map_err(|e| PartitionError::write(path, e))?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writer
            .write_all(line)
            .map_err(|e| PartitionError::write(path, e))?;
    }
    writer.flush().map_err(|e| PartitionError::write(path, e))?;

    log::debug!("wrote {} lines to {}", lines.len(), path.display());
    Ok(ShardSummary {
        path: path.to_path_buf(),
        lines: lines.len(),
    })
}

/// Splits `samples` into `num_parts` contiguous shards under `out_dir`.
///
/// Shard `k` is `part-00<k>` and holds `floor(len / num_parts)` lines taken
/// from a cursor starting at [`TRAIN_CURSOR_START`]. Lines past the last
/// shard are dropped. Shards written before a failure are left on disk.
pub fn write_training_shards<P: AsRef<Path>>(
    samples: &[Line],
    out_dir: P,
    num_parts: usize,
) -> Result<TrainingShards> {
    let plan = PartitionPlan::new(samples.len(), num_parts)?;
    let out_dir = out_dir.as_ref();

    let mut summaries = Vec::with_capacity(plan.num_parts);
    for index in 0..plan.num_parts {
        let path = out_dir.join(shard_file_name(index + 1));
        summaries.push(write_shard(&path, &samples[plan.shard_range(index)])?);
    }
    Ok(TrainingShards {
        plan,
        shards: summaries,
    })
}

/// Writes every sample, in order, to `out_dir/part-001`.
pub fn write_test_file<P: AsRef<Path>>(samples: &[Line], out_dir: P) -> Result<ShardSummary> {
    let path = out_dir.as_ref().join(shard_file_name(1));
    write_shard(&path, samples)
}
