//! Mining configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AprioriError, Result};

/// How candidate supports are counted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum CountingStrategy {
    /// One parallel pass over the transactions per level.
    #[default]
    Horizontal,
    /// Item -> transaction bitsets, intersected per candidate.
    Vertical,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinerConfig {
    /// Minimum number of supporting transactions. Must be at least 1.
    pub min_support: u32,
    /// Largest itemset size to mine; `None` mines until a level is empty.
    pub max_len: Option<usize>,
    pub counting: CountingStrategy,
    /// Size of a dedicated worker pool; `None` uses rayon's global pool.
    pub num_threads: Option<usize>,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            min_support: 1,
            max_len: None,
            counting: CountingStrategy::default(),
            num_threads: None,
        }
    }
}

impl MinerConfig {
    pub fn new(min_support: u32) -> Self {
        Self {
            min_support,
            ..Self::default()
        }
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn with_counting(mut self, counting: CountingStrategy) -> Self {
        self.counting = counting;
        self
    }

    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = Some(num_threads);
        self
    }

    /// Reject settings that cannot produce a meaningful run.
    pub fn validate(&self) -> Result<()> {
        if self.min_support == 0 {
            return Err(AprioriError::invalid_parameter(
                "min_support must be at least 1, got 0",
            ));
        }
        if self.max_len == Some(0) {
            return Err(AprioriError::invalid_parameter(
                "max_len must be at least 1, got 0",
            ));
        }
        if self.num_threads == Some(0) {
            return Err(AprioriError::invalid_parameter(
                "num_threads must be at least 1, got 0",
            ));
        }
        Ok(())
    }

    /// Load a JSON config file. Missing fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|err| AprioriError::unavailable(path, err))?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Parse a threshold coming from outside the program (CLI, form field).
///
/// Anything other than a positive integer is an `InvalidParameter`.
pub fn parse_min_support(text: &str) -> Result<u32> {
    let trimmed = text.trim();
    let value: i64 = trimmed.parse().map_err(|_| {
        AprioriError::invalid_parameter(format!(
            "min_support must be a positive integer, got {:?}",
            text
        ))
    })?;
    min_support_from_int(value)
}

/// Check an integer threshold from a caller with a wider integer type.
pub fn min_support_from_int(value: i64) -> Result<u32> {
    if value <= 0 {
        return Err(AprioriError::invalid_parameter(format!(
            "min_support must be at least 1, got {}",
            value
        )));
    }
    u32::try_from(value).map_err(|_| {
        AprioriError::invalid_parameter(format!("min_support {} is too large", value))
    })
}
