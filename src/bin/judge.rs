use std::io;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use introsort_comp::harness::judge;

fn main() -> anyhow::Result<()> {
    // Stdout carries the answer, keep diagnostics on stderr.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("introsort_comp=warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let stdin = io::stdin().lock();
    let stdout = io::BufWriter::new(io::stdout().lock());

    judge::run(stdin, stdout).context("failed to sort judge input")
}
