//! Performance instrumentation for the pointer hot paths.
//!
//! Pointer moves arrive many times per second during a drag, so hit-testing
//! and drag handling are timed with [`profile_scope!`] when the `profiling`
//! feature is enabled. Without the feature the macro expands to nothing.
//!
//! ```ignore
//! fn handle_pointer_move() {
//!     profile_scope!("handle_pointer_move");
//!     // ... event handling code ...
//! }
//! ```

use std::time::Instant;
use tracing::{trace, warn};

/// Default warning threshold for profiled scopes, in milliseconds
pub const DEFAULT_WARN_MS: f64 = 4.0;

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $crate::perf::DEFAULT_WARN_MS);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

/// RAII timer that logs its scope's duration when dropped.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    warn_threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, warn_threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            warn_threshold_ms,
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed = self.elapsed_ms();
        if elapsed > self.warn_threshold_ms {
            warn!("{} took {:.2}ms (threshold {:.2}ms)", self.name, elapsed, self.warn_threshold_ms);
        } else {
            trace!("{} took {:.3}ms", self.name, elapsed);
        }
    }
}
