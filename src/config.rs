//! Demo configuration read from environment variables

use eyre::{bail, Result, WrapErr};
use std::str::FromStr;

/// Left calculator operand.
pub const ENV_OPERAND_A: &str = "FIXTURE_OPERAND_A";
/// Right calculator operand.
pub const ENV_OPERAND_B: &str = "FIXTURE_OPERAND_B";
/// How many random numbers to generate.
pub const ENV_SAMPLE_SIZE: &str = "FIXTURE_SAMPLE_SIZE";
/// Exclusive upper bound of the random numbers.
pub const ENV_SAMPLE_BOUND: &str = "FIXTURE_SAMPLE_BOUND";
/// Fixed seed; the generator is seeded from the clock when unset.
pub const ENV_SEED: &str = "FIXTURE_SEED";
/// Report format, `text` or `json`.
pub const ENV_FORMAT: &str = "FIXTURE_FORMAT";

/// Output format of the demo report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => bail!("Unsupported report format: {}", other),
        }
    }
}

/// Settings for the demonstration binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub operand_a: i64,
    pub operand_b: i64,
    pub sample_size: usize,
    pub sample_bound: i64,
    pub seed: Option<u64>,
    pub format: ReportFormat,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            operand_a: 42,
            operand_b: 7,
            sample_size: 10,
            sample_bound: 100,
            seed: None,
            format: ReportFormat::Text,
        }
    }
}

impl DemoConfig {
    /// Reads the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, falling back to defaults
    ///
    /// # Errors
    /// Returns an error naming the variable if a value does not parse, or if
    /// the sample bound is not positive while the sample size is non-zero.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            operand_a: parse_var(&lookup, ENV_OPERAND_A)?.unwrap_or(defaults.operand_a),
            operand_b: parse_var(&lookup, ENV_OPERAND_B)?.unwrap_or(defaults.operand_b),
            sample_size: parse_var(&lookup, ENV_SAMPLE_SIZE)?.unwrap_or(defaults.sample_size),
            sample_bound: parse_var(&lookup, ENV_SAMPLE_BOUND)?.unwrap_or(defaults.sample_bound),
            seed: parse_var(&lookup, ENV_SEED)?,
            format: parse_var(&lookup, ENV_FORMAT)?.unwrap_or(defaults.format),
        };

        if config.sample_size > 0 && config.sample_bound <= 0 {
            bail!(
                "{} must be positive, got {}",
                ENV_SAMPLE_BOUND,
                config.sample_bound
            );
        }

        log::debug!("Loaded demo configuration: {:?}", config);
        Ok(config)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| eyre::eyre!("{}", e))
            .wrap_err_with(|| format!("Invalid value for {key}: {raw:?}")),
    }
}
