//! Run configuration: optional YAML file, then CLI flags on top.

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use punto_types::{BatchConfig, ConfigError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::Level;

pub const DEFAULT_OUTPUT: &str = "baccarat_shoes.csv";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Report encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `shoe_id,hand_number,player_cards,...` with dash-joined cards.
    #[default]
    Csv,
    /// One JSON object per hand.
    Jsonl,
}

/// Keys accepted in a `--config` YAML file. Every key is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub num_shoes: Option<u32>,
    pub decks: Option<u32>,
    pub burn_cards: Option<usize>,
    pub max_hands: Option<u32>,
    pub no_hand_cap: Option<bool>,
    pub seed: Option<u64>,
    pub output: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub log_level: Option<String>,
}

impl FileConfig {
    pub fn parse(yaml: &str) -> Result<Self> {
        let file: Self = serde_yaml::from_str(yaml).context("could not parse config file")?;
        if file.no_hand_cap == Some(true) && file.max_hands.is_some() {
            bail!("max_hands cannot be combined with no_hand_cap: true");
        }
        Ok(file)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("could not read config file {}", path.display()))?;
        Self::parse(&yaml).with_context(|| format!("invalid config file {}", path.display()))
    }
}

/// Fully resolved settings for one invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub batch: BatchConfig,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub log_level: Level,
}

pub fn parse_log_level(value: &str) -> Result<Level, ConfigError> {
    Level::from_str(value).map_err(|_| ConfigError::InvalidLogLevel {
        value: value.to_string(),
    })
}
