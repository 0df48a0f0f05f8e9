//! Ranking configuration with defaults.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScreenError};
use crate::ranking::orchestrator::validate_min_match;

fn default_limit() -> usize {
    10
}

/// Search options used by [`crate::Screener`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankOptions {
    /// Maximum number of results returned per query
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Minimum score (0.0 - 1.0) a candidate needs to be returned
    #[serde(default)]
    pub min_match: f64,

    /// Size of a dedicated scoring pool; `None` uses rayon's global pool
    #[serde(default)]
    pub threads: Option<usize>,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            min_match: 0.0,
            threads: None,
        }
    }
}

impl RankOptions {
    /// Checks:
    /// - `min_match` is finite and within `[0, 1]`
    /// - `threads`, when set, is greater than 0
    pub fn validate(&self) -> Result<()> {
        validate_min_match(self.min_match)?;
        if self.threads == Some(0) {
            return Err(ScreenError::InvalidParameter(
                "threads must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// Convert a caller-supplied signed limit, rejecting negatives
    pub fn limit_from_signed(limit: i64) -> Result<usize> {
        usize::try_from(limit).map_err(|_| {
            ScreenError::InvalidParameter(format!("limit must not be negative, got {limit}"))
        })
    }

    /// Parse options from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }
}
