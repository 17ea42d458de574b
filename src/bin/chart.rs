use std::env;
use std::path::PathBuf;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use introsort_comp::harness::{self, BenchConfig};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("introsort_comp=info,chart=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = BenchConfig::from_env().context("invalid benchmark configuration")?;
    if let Some(output_dir) = env::args().nth(1) {
        config.output_dir = PathBuf::from(output_dir);
    }

    let summaries = harness::run_comparison(&config).context("timing comparison failed")?;

    // Series come in quicksort, introsort pairs per input pattern.
    for pair in summaries.chunks(2) {
        let [quick, intro] = pair else {
            continue;
        };

        info!(
            pattern = %quick.name,
            quicksort_mean_ms = quick.mean_ms(),
            introsort_mean_ms = intro.mean_ms(),
            speedup = quick.total_ms / intro.total_ms.max(f64::EPSILON),
            "series written"
        );
    }

    Ok(())
}
