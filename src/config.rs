//! Analysis configuration
//!
//! Settings an embedding application can persist as JSON:
//! - which angle forms the primary timeline
//! - an optional override of the reference video PID
//! - whether a malformed chapter list aborts the analysis

use crate::errors::{ChapterRateResult, ConfigError};
use crate::timeline::Pid;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// PIDs that can never carry an elementary stream (PAT and null packets)
const RESERVED_PIDS: [Pid; 2] = [0x0000, 0x1FFF];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Angle index walked as the primary timeline
    pub primary_angle: u32,
    /// Replaces the playlist's own reference PID when set
    pub reference_pid: Option<Pid>,
    /// Reject malformed chapter lists instead of analyzing clamped spans
    pub strict: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            primary_angle: 0,
            reference_pid: None,
            strict: false,
        }
    }
}

impl AnalysisConfig {
    /// Parse and validate a JSON document; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> ChapterRateResult<Self> {
        let config: AnalysisConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> ChapterRateResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(pid) = self.reference_pid {
            if RESERVED_PIDS.contains(&pid) {
                return Err(ConfigError::new(format!(
                    "PID 0x{:04X} is reserved and cannot be a reference stream",
                    pid
                )));
            }
        }
        Ok(())
    }
}
