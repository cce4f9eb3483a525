//! Tokenizer configuration
//!
//! TOML layout:
//!
//! ```toml
//! [tokenizer]
//! min_bpm = 13
//! max_bpm = 400
//! max_ranges = 1
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Lowest value any BPM token may take, whatever the configured band
pub const BPM_FLOOR: u16 = 1;

/// Highest value any BPM token may take, whatever the configured band
pub const BPM_CEILING: u16 = 999;

/// Tunable parts of the query grammar
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TokenizerConfig {
    /// Smallest number read as a tempo (inclusive)
    #[serde(default = "default_min_bpm")]
    pub min_bpm: u16,
    /// Largest number read as a tempo (inclusive)
    #[serde(default = "default_max_bpm")]
    pub max_bpm: u16,
    /// Ranges kept per query; later ones are consumed and dropped
    #[serde(default = "default_max_ranges")]
    pub max_ranges: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            min_bpm: default_min_bpm(),
            max_bpm: default_max_bpm(),
            max_ranges: default_max_ranges(),
        }
    }
}

fn default_min_bpm() -> u16 {
    13
}
fn default_max_bpm() -> u16 {
    400
}
fn default_max_ranges() -> usize {
    1
}

/// On-disk layout of a configuration file
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
struct ConfigFile {
    #[serde(default)]
    tokenizer: TokenizerConfig,
}

impl TokenizerConfig {
    /// Load and validate configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        log::info!("Loaded tokenizer config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        file.tokenizer.validate()?;
        Ok(file.tokenizer)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.min_bpm < BPM_FLOOR {
            return Err(Error::Config(format!("min_bpm must be >= {}", BPM_FLOOR)));
        }
        if self.max_bpm > BPM_CEILING {
            return Err(Error::Config(format!("max_bpm must be <= {}", BPM_CEILING)));
        }
        if self.min_bpm >= self.max_bpm {
            return Err(Error::Config("min_bpm must be < max_bpm".to_string()));
        }
        Ok(())
    }

    /// Whether `bpm` lies inside the plausibility band
    pub fn accepts(&self, bpm: u16) -> bool {
        (BPM_FLOOR..=BPM_CEILING).contains(&bpm) && (self.min_bpm..=self.max_bpm).contains(&bpm)
    }
}
