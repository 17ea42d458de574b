//! Timing comparison between plain quicksort and introsort.
//!
//! For every input pattern and every length of the sweep, a fresh copy of the input prefix is
//! sorted by each strategy and the elapsed time appended to the series file of that pattern and
//! strategy, e.g. `reversed.txt` for quicksort and `reversed_hybrid.txt` for introsort.

use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::generator::{ArrayGenerator, GeneratorConfig, GeneratorError};
use crate::unstable::{rust_introsort, rust_quicksort_pure};

pub mod config;
pub mod judge;
pub mod timing;

pub use config::{BenchConfig, ConfigError};
pub use timing::{measure_duration, SeriesSummary, TimingSink};

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{series} produced unsorted output for length {len}")]
    NotSorted { series: String, len: usize },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputPattern {
    Random,
    Reversed,
    /// Sorted, then disturbed by a few random swaps.
    Swap,
}

impl InputPattern {
    pub const ALL: [Self; 3] = [Self::Random, Self::Reversed, Self::Swap];

    pub fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Reversed => "reversed",
            Self::Swap => "swap",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    Quicksort,
    Introsort,
}

impl Strategy {
    pub const ALL: [Self; 2] = [Self::Quicksort, Self::Introsort];

    pub fn sort(self, v: &mut [i32]) {
        match self {
            Self::Quicksort => rust_quicksort_pure::sort(v),
            Self::Introsort => rust_introsort::sort(v),
        }
    }

    /// Name of the timing series for `pattern`, also the stem of its output file.
    pub fn series_name(self, pattern: InputPattern) -> String {
        match self {
            Self::Quicksort => pattern.name().to_owned(),
            Self::Introsort => format!("{}_hybrid", pattern.name()),
        }
    }
}

fn open_sink(dir: &Path, name: String) -> Result<TimingSink<BufWriter<File>>, HarnessError> {
    let path = dir.join(format!("{name}.txt"));
    let file = File::create(&path).map_err(|source| HarnessError::Io { path, source })?;

    Ok(TimingSink::new(name, BufWriter::new(file)))
}

/// Runs the full sweep described by `config` and writes one file per series into
/// `config.output_dir`.
pub fn run_comparison(config: &BenchConfig) -> Result<Vec<SeriesSummary>, HarnessError> {
    config.validate()?;

    fs::create_dir_all(&config.output_dir).map_err(|source| HarnessError::Io {
        path: config.output_dir.clone(),
        source,
    })?;

    let generator_config = GeneratorConfig {
        max_size: config.max_len,
        ..GeneratorConfig::default()
    };
    let mut generator = ArrayGenerator::with_seed(generator_config, config.seed)?;

    info!(
        seed = config.seed,
        min_len = config.min_len,
        max_len = config.max_len,
        step = config.step,
        output_dir = %config.output_dir.display(),
        "running timing comparison"
    );

    let mut inputs = Vec::with_capacity(InputPattern::ALL.len());
    for pattern in InputPattern::ALL {
        let base = match pattern {
            InputPattern::Random => generator.random(config.max_len)?,
            InputPattern::Reversed => generator.reversed(config.max_len)?,
            InputPattern::Swap => generator.almost_sorted(config.max_len, config.swap_count)?,
        };
        inputs.push((pattern, base));
    }

    let mut sinks = Vec::with_capacity(inputs.len() * Strategy::ALL.len());
    for (pattern, _) in &inputs {
        for strategy in Strategy::ALL {
            sinks.push(open_sink(
                &config.output_dir,
                strategy.series_name(*pattern),
            )?);
        }
    }

    for len in config.lengths() {
        debug!(len, "measuring");

        for (pattern_idx, (pattern, base)) in inputs.iter().enumerate() {
            for (strategy_idx, strategy) in Strategy::ALL.into_iter().enumerate() {
                // Every strategy gets its own copy, none of them may see pre-sorted input.
                let mut v = base[..len].to_vec();
                let duration = measure_duration(|| strategy.sort(&mut v));

                let series = strategy.series_name(*pattern);
                if !v.windows(2).all(|w| w[0] <= w[1]) {
                    return Err(HarnessError::NotSorted { series, len });
                }

                sinks[pattern_idx * Strategy::ALL.len() + strategy_idx]
                    .record(duration)
                    .map_err(|source| HarnessError::Io {
                        path: config.output_dir.join(format!("{series}.txt")),
                        source,
                    })?;
            }
        }
    }

    sinks
        .into_iter()
        .map(|sink| {
            sink.finish().map_err(|source| HarnessError::Io {
                path: config.output_dir.clone(),
                source,
            })
        })
        .collect()
}
