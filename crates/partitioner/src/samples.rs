use rand::seq::SliceRandom;
use rand::Rng;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{PartitionError, Result};

/// One record as raw bytes, terminator included. Never decoded.
pub type Line = Vec<u8>;

/// Ordered lines of one source file, written back byte for byte.
pub type SampleSet = Vec<Line>;

/// Reads the whole file at `path`, optionally shuffling it in place with `rng`.
pub fn load_lines<P, R>(path: P, shuffle: bool, rng: &mut R) -> Result<SampleSet>
where
    P: AsRef<Path>,
    R: Rng + ?Sized,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| PartitionError::read(path, e))?;
    let mut reader = BufReader::new(file);

    let mut samples = Vec::new();
    loop {
        let mut line = Vec::new();
        let n = reader
            .read_until(b'\n', &mut line)
            .map_err(|e| PartitionError::read(path, e))?;
        if n == 0 {
            break;
        }
        samples.push(line);
    }

    if shuffle {
        samples.shuffle(rng);
    }
    log::debug!(
        "loaded {} lines from {} (shuffled: {})",
        samples.len(),
        path.display(),
        shuffle
    );
    Ok(samples)
}
