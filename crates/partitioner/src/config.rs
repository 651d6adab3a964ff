use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PartitionError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionConfig {
    /// Directory holding the source files; the output layout is created here.
    pub data_dir: PathBuf,
    /// Training file name, relative to `data_dir`.
    pub train_file: String,
    /// Test file name, relative to `data_dir`.
    pub test_file: String,
    /// Number of training shards (one per trainer worker).
    pub num_parts: usize,
    /// Shuffle seed. `None` shuffles from OS entropy.
    pub seed: Option<u64>,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./a9a-data"),
            train_file: "a9a".to_string(),
            test_file: "a9a.t".to_string(),
            num_parts: 4,
            seed: None,
        }
    }
}

impl PartitionConfig {
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| PartitionError::read(path, e))?;
        Self::from_yaml_str(&content).map_err(|message| PartitionError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    fn from_yaml_str(content: &str) -> std::result::Result<Self, String> {
        // An empty document deserializes to unit, not to a defaulted struct.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_parts == 0 {
            return Err(PartitionError::InvalidPartCount(self.num_parts));
        }
        for (field, value) in [("train_file", &self.train_file), ("test_file", &self.test_file)] {
            if value.is_empty() {
                return Err(PartitionError::InvalidSetting {
                    field,
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn train_source(&self) -> PathBuf {
        self.data_dir.join(&self.train_file)
    }

    pub fn test_source(&self) -> PathBuf {
        self.data_dir.join(&self.test_file)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_a9a_layout() {
        let config = PartitionConfig::default();
        assert_eq!(config.num_parts, 4);
        assert_eq!(config.train_source(), PathBuf::from("./a9a-data/a9a"));
        assert_eq!(config.test_source(), PathBuf::from("./a9a-data/a9a.t"));
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "num_parts: 8").unwrap();
        writeln!(file, "seed: 42").unwrap();

        let config = PartitionConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.num_parts, 8);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.train_file, "a9a");
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let file = NamedTempFile::new().unwrap();
        let config = PartitionConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config, PartitionConfig::default());
    }

    #[test]
    fn test_malformed_yaml_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "num_parts: [not, a, number]").unwrap();

        let err = PartitionConfig::from_yaml_file(file.path()).unwrap_err();
        assert!(matches!(err, PartitionError::Config { .. }));
    }

    #[test]
    fn test_missing_yaml_is_not_found() {
        let err = PartitionConfig::from_yaml_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, PartitionError::NotFound { .. }));
    }

    #[test]
    fn test_validate_rejects_zero_parts() {
        let config = PartitionConfig {
            num_parts: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PartitionError::InvalidPartCount(0))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_file_name() {
        let config = PartitionConfig {
            test_file: String::new(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            PartitionError::InvalidSetting {
                field: "test_file",
                ..
            }
        ));
        assert_eq!(err.to_string(), "Invalid setting 'test_file': must not be empty");
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = PartitionConfig {
            seed: Some(7),
            ..Default::default()
        };
        let a: Vec<u32> = (0..4).map(|_| config.rng().gen()).collect();
        let mut rng = config.rng();
        let b: u32 = rng.gen();
        assert!(a.iter().all(|&x| x == b));
    }
}
