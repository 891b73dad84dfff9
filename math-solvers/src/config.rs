//! JSON configuration for fixed-point solves

use crate::error::{Result, SolverError};
use math_fixed_point::FixedFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Solver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Number of unknowns N; the matrix is N×N
    pub dimension: usize,
    /// Fixed-point representation used for every value of the system
    pub format: FixedFormat,
    /// Log level of detail (0 = quiet, 1 = pivot record at info level)
    pub verbosity: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            dimension: 3,
            format: FixedFormat::default(),
            verbosity: 0,
        }
    }
}

impl SolverConfig {
    /// Configuration for an N×N system with the default format
    pub fn with_dimension(dimension: usize) -> Self {
        Self {
            dimension,
            ..Default::default()
        }
    }

    pub fn format(mut self, format: FixedFormat) -> Self {
        self.format = format;
        self
    }

    pub fn verbosity(mut self, verbosity: usize) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Reject configurations no system can be solved with
    pub fn validate(&self) -> Result<()> {
        if self.dimension == 0 {
            return Err(SolverError::EmptySystem);
        }
        Ok(())
    }

    /// Load and validate a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse and validate a configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SolverConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration as pretty-printed JSON
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
