use crate::utils::check_num;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// Sigma clipping parameters.
///
/// Can be built directly with [`ClipParams::new`] or loaded from TOML, where
/// missing fields take their default values. Values are validated either way.
#[derive(Debug, PartialEq, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClipParams {
    /// Maximum number of clipping iterations.
    pub max_iter: usize,
    /// Lower clipping bound, in standard deviations below the center.
    pub low: f64,
    /// Upper clipping bound, in standard deviations above the center.
    pub high: f64,
    /// Clipping stops once an iteration rejects fewer samples than this.
    pub stop_threshold: usize,
}

impl Default for ClipParams {
    fn default() -> Self {
        Self {
            max_iter: 5,
            low: 3.0,
            high: 3.0,
            stop_threshold: 1,
        }
    }
}

impl ClipParams {
    /// Create validated clipping parameters.
    ///
    /// # Errors
    /// Returns an error if any value is out of range.
    pub fn new(max_iter: usize, low: f64, high: f64, stop_threshold: usize) -> Result<Self> {
        let params = Self {
            max_iter,
            low,
            high,
            stop_threshold,
        };
        params.validate()?;
        Ok(params)
    }

    /// Parse clipping parameters from a TOML string.
    ///
    /// # Errors
    /// Returns an error if the string cannot be deserialized
    /// or if the values are invalid.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let params: ClipParams =
            toml::from_str(toml_str).context("failed to deserialize clip params")?;

        params.validate().context("failed to validate clip params")?;

        Ok(params)
    }

    /// Load clipping parameters from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, deserialized,
    /// or if the values are invalid.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let toml_str = fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;

        let params = Self::from_toml_str(&toml_str)?;
        log::info!("loaded {file:?}: {params:?}");

        Ok(params)
    }

    fn validate(&self) -> Result<()> {
        check_num(self.max_iter, 0..=10_000).context("invalid maximum number of iterations")?;

        check_num(self.low, 0.0..=1e6).context("invalid lower clipping bound")?;
        check_num(self.high, 0.0..=1e6).context("invalid upper clipping bound")?;

        Ok(())
    }
}
