use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{PartitionError, Result};

pub const TRAIN_DIR: &str = "train";
pub const TEST_DIR: &str = "test";
pub const MODELS_DIR: &str = "models";

/// File name of the 1-based shard `k`.
///
/// The prefix is the literal `part-00`, not a zero-padded width: shard 10 is
/// `part-0010`. Trainer workers build the same name from their rank.
pub fn shard_file_name(k: usize) -> String {
    format!("part-00{}", k)
}

/// Directory layout shared with the trainer: `train/`, `test/` and `models/`
/// under one base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    base: PathBuf,
}

impl OutputLayout {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn train_dir(&self) -> PathBuf {
        self.base.join(TRAIN_DIR)
    }

    pub fn test_dir(&self) -> PathBuf {
        self.base.join(TEST_DIR)
    }

    pub fn models_dir(&self) -> PathBuf {
        self.base.join(MODELS_DIR)
    }

    /// Training shard read by the worker with 0-based `rank`.
    pub fn train_shard(&self, rank: usize) -> PathBuf {
        self.train_dir().join(shard_file_name(rank + 1))
    }

    pub fn test_file(&self) -> PathBuf {
        self.test_dir().join(shard_file_name(1))
    }

    /// Where the worker with 0-based `rank` saves its model.
    pub fn model_file(&self, rank: usize) -> PathBuf {
        self.models_dir().join(shard_file_name(rank + 1))
    }
}

/// Creates `train/`, `test/` and `models/` under `base_dir` when missing.
///
/// Safe to call repeatedly. The base directory itself is never created.
pub fn ensure_output_layout<P: AsRef<Path>>(base_dir: P) -> Result<OutputLayout> {
    let base = base_dir.as_ref();
    if !base.is_dir() {
        let source = if base.exists() {
            io::Error::new(io::ErrorKind::Other, "base path is not a directory")
        } else {
            io::Error::new(io::ErrorKind::NotFound, "base directory does not exist")
        };
        return Err(PartitionError::filesystem(base, source));
    }

    let layout = OutputLayout::new(base);
    for dir in [layout.train_dir(), layout.test_dir(), layout.models_dir()] {
        if dir.is_dir() {
            log::debug!("{} already exists", dir.display());
            continue;
        }
        fs::create_dir(&dir).map_err(|e| PartitionError::filesystem(&dir, e))?;
        log::debug!("created {}", dir.display());
    }

    Ok(layout)
}
