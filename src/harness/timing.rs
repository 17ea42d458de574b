//! Wall-clock measurement of a single sort call and the plain text series the measurements are
//! written to, one fractional millisecond value per line.

use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Measures the time it takes to execute `test_fn`.
#[inline(never)]
pub fn measure_duration(test_fn: impl FnOnce()) -> Duration {
    let start = Instant::now();
    test_fn();
    start.elapsed()
}

pub fn as_millis_f64(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1_000.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSummary {
    pub name: String,
    pub count: usize,
    pub total_ms: f64,
}

impl SeriesSummary {
    pub fn mean_ms(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total_ms / self.count as f64
        }
    }
}

pub struct TimingSink<W: Write> {
    name: String,
    writer: W,
    count: usize,
    total: Duration,
}

impl<W: Write> TimingSink<W> {
    pub fn new(name: impl Into<String>, writer: W) -> Self {
        Self {
            name: name.into(),
            writer,
            count: 0,
            total: Duration::ZERO,
        }
    }

    pub fn record(&mut self, duration: Duration) -> io::Result<()> {
        writeln!(self.writer, "{:.6}", as_millis_f64(duration))?;
        self.count += 1;
        self.total += duration;

        Ok(())
    }

    /// Flushes the writer and returns the totals of the series.
    pub fn finish(mut self) -> io::Result<SeriesSummary> {
        self.writer.flush()?;

        Ok(SeriesSummary {
            name: self.name,
            count: self.count,
            total_ms: as_millis_f64(self.total),
        })
    }
}
