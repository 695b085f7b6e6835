//! Decode and tick counters plus logging setup.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Counters shared by the sequencer and the regulatory engine.
pub struct Metrics {
    organisms: AtomicU64,
    failed: AtomicU64,
    ticks: AtomicU64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            organisms: AtomicU64::new(0),
            failed: AtomicU64::new(0),
            ticks: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Records one sequencing attempt.
    pub fn record_sequence(&self, ok: bool) {
        if ok {
            self.organisms.fetch_add(1, Ordering::Relaxed);
        } else {
            self.failed.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Records a completed regulatory tick.
    pub fn record_tick(&self, duration: Duration, units: usize) {
        self.ticks.fetch_add(1, Ordering::Relaxed);

        // Log at debug level every 1000 ticks
        let tick = self.ticks.load(Ordering::Relaxed);
        if tick.is_multiple_of(1000) {
            tracing::debug!(
                tick = tick,
                units = units,
                duration_us = duration.as_micros() as u64,
                "GRN tick"
            );
        }
    }

    #[must_use]
    pub fn organisms(&self) -> u64 {
        self.organisms.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize tracing subscriber for logging.
///
/// `RUST_LOG` takes precedence over `default_directive`. Output goes to stderr
/// so reports on stdout stay machine readable. Calling this twice is a no-op.
pub fn init_logging(default_directive: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .ok();
}
