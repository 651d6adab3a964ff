use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use partitioner::PartitionConfig;

/// Split the a9a dataset into training shards and a test shard.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// YAML file with partition settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the source files and the output layout
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Training file name inside the data directory
    #[arg(long)]
    train_file: Option<String>,

    /// Test file name inside the data directory
    #[arg(long)]
    test_file: Option<String>,

    /// Number of training shards
    #[arg(short, long)]
    num_parts: Option<usize>,

    /// Seed for a reproducible shuffle
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the run report as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn into_config(self) -> Result<(PartitionConfig, bool)> {
        let mut config = match &self.config {
            Some(path) => PartitionConfig::from_yaml_file(path)
                .with_context(|| format!("Failed to load config {:?}", path))?,
            None => PartitionConfig::default(),
        };

        if let Some(data_dir) = self.data_dir {
            config.data_dir = data_dir;
        }
        if let Some(train_file) = self.train_file {
            config.train_file = train_file;
        }
        if let Some(test_file) = self.test_file {
            config.test_file = test_file;
        }
        if let Some(num_parts) = self.num_parts {
            config.num_parts = num_parts;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        Ok((config, self.json))
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (config, json) = Cli::parse().into_config()?;
    log::debug!("partition config: {:?}", config);

    let report = partitioner::run(&config)
        .with_context(|| format!("Failed to partition {:?}", config.data_dir))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for shard in &report.train_shards {
            println!("{:?}: {} lines", shard.path, shard.lines);
        }
        println!("{:?}: {} lines", report.test.path, report.test.lines);
        println!(
            "Done. {} train shards of {} lines ({} dropped), {} test lines.",
            report.plan.num_parts,
            report.plan.part_size,
            report.dropped_train_lines,
            report.test.lines
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from(["gen_data", "-d", "/tmp/a9a", "-n", "8", "--seed", "5"]).unwrap();
        let (config, json) = cli.into_config().unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/a9a"));
        assert_eq!(config.num_parts, 8);
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.train_file, "a9a");
        assert!(!json);
    }

    #[test]
    fn test_no_flags_is_default_config() {
        let cli = Cli::try_parse_from(["gen_data", "--json"]).unwrap();
        let (config, json) = cli.into_config().unwrap();

        assert_eq!(config, PartitionConfig::default());
        assert!(json);
    }

    #[test]
    fn test_missing_config_file_fails() {
        let cli = Cli::try_parse_from(["gen_data", "--config", "/no/such/partition.yaml"]).unwrap();
        assert!(cli.into_config().is_err());
    }
}
