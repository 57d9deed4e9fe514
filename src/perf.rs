//! Performance Monitor
//!
//! Optional wall-clock timing of named operations, reported through tracing.

use std::future::Future;
use std::time::Instant;

use tracing::debug;

/// Times operations when enabled; otherwise runs them untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerfMonitor {
    enabled: bool,
}

impl PerfMonitor {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Runs `f`, logging how long it took under `name`.
    pub fn measure<T>(&self, name: &str, f: impl FnOnce() -> T) -> T {
        if !self.enabled {
            return f();
        }
        let start = Instant::now();
        let result = f();
        log_duration(name, start);
        result
    }

    /// Awaits `fut`, logging how long it took under `name`.
    ///
    /// The duration is logged whether the future resolves to success or error.
    pub async fn measure_async<F: Future>(&self, name: &str, fut: F) -> F::Output {
        if !self.enabled {
            return fut.await;
        }
        let start = Instant::now();
        let result = fut.await;
        log_duration(name, start);
        result
    }
}

fn log_duration(name: &str, start: Instant) {
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    debug!(operation = name, elapsed_ms, "Performance [{}]: {:.2}ms", name, elapsed_ms);
}
