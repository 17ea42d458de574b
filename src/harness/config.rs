use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use rand::{thread_rng, Rng};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {name}")]
    InvalidValue { name: &'static str, value: String },
    #[error("invalid length sweep {min_len}..={max_len} step {step}")]
    InvalidSweep {
        min_len: usize,
        max_len: usize,
        step: usize,
    },
}

/// Parameters of the quicksort vs introsort timing comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    pub min_len: usize,
    pub max_len: usize,
    pub step: usize,
    /// Number of random swaps applied to the sorted input of the almost sorted series.
    pub swap_count: usize,
    pub output_dir: PathBuf,
    pub seed: u64,
}

impl BenchConfig {
    /// Defaults, each of which can be overridden by an environment variable:
    ///
    /// `BENCH_MIN_LEN` (500), `BENCH_MAX_LEN` (10000), `BENCH_STEP` (100), `BENCH_SWAP_COUNT` (5),
    /// `OUTPUT_DIR` (current directory) and `OVERRIDE_SEED` (random per process).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        fn parse<T: FromStr>(
            lookup: &impl Fn(&str) -> Option<String>,
            name: &'static str,
            default: T,
        ) -> Result<T, ConfigError> {
            match lookup(name) {
                Some(value) => value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue { name, value }),
                None => Ok(default),
            }
        }

        let config = Self {
            min_len: parse(&lookup, "BENCH_MIN_LEN", 500)?,
            max_len: parse(&lookup, "BENCH_MAX_LEN", 10_000)?,
            step: parse(&lookup, "BENCH_STEP", 100)?,
            swap_count: parse(&lookup, "BENCH_SWAP_COUNT", 5)?,
            output_dir: lookup("OUTPUT_DIR").map_or_else(|| PathBuf::from("."), PathBuf::from),
            seed: parse(&lookup, "OVERRIDE_SEED", thread_rng().gen())?,
        };
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_len == 0 || self.step == 0 || self.min_len > self.max_len {
            return Err(ConfigError::InvalidSweep {
                min_len: self.min_len,
                max_len: self.max_len,
                step: self.step,
            });
        }

        Ok(())
    }

    /// The input lengths to measure, `min_len..=max_len` by `step`.
    pub fn lengths(&self) -> impl Iterator<Item = usize> {
        (self.min_len..=self.max_len).step_by(self.step.max(1))
    }
}
