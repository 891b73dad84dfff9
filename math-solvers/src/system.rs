//! Linear systems as stored in JSON files

use crate::config::SolverConfig;
use crate::error::{Result, SolverError};
use crate::solve::{SolveReport, solve_detailed};
use math_fixed_point::{Fixed, FixedFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Values of a matrix or vector, either as reals or as raw scaled integers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Values {
    /// Real numbers, converted with the configured format
    Real(Vec<f64>),
    /// Raw scaled integers, used as is
    Raw(Vec<i32>),
}

impl Values {
    /// Convert to fixed-point values of the given format
    pub fn to_fixed(&self, format: &FixedFormat) -> Result<Vec<Fixed>> {
        match self {
            Values::Real(values) => values
                .iter()
                .map(|&v| format.from_f64(v).map_err(SolverError::from))
                .collect(),
            Values::Raw(values) => Ok(values.iter().copied().map(Fixed::from_raw).collect()),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Values::Real(values) => values.len(),
            Values::Raw(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A complete problem: configuration, flattened matrix and right-hand side
///
/// ```json
/// {
///   "config": { "dimension": 2, "format": { "frac_bits": 16 } },
///   "matrix": { "real": [1.0, 1.0, 2.0, 1.0] },
///   "rhs": { "raw": [196608, 262144] }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemInput {
    #[serde(default)]
    pub config: SolverConfig,
    pub matrix: Values,
    pub rhs: Values,
}

/// A flattened system already in fixed-point form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatSystem {
    pub matrix: Vec<Fixed>,
    pub rhs: Vec<Fixed>,
}

impl SystemInput {
    /// Load a system from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let input: SystemInput = serde_json::from_str(json)?;
        input.config.validate()?;
        Ok(input)
    }

    /// Convert the values with the configured format
    pub fn to_flat(&self) -> Result<FlatSystem> {
        let format = &self.config.format;
        Ok(FlatSystem {
            matrix: self.matrix.to_fixed(format)?,
            rhs: self.rhs.to_fixed(format)?,
        })
    }

    /// Convert and solve
    pub fn solve(&self) -> Result<SolveReport> {
        let flat = self.to_flat()?;
        solve_detailed(&self.config, &flat.matrix, &flat.rhs)
    }
}
