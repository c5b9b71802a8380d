use std::time::Instant;

/// Wall-clock instrumentation around account operations.
///
/// Reports through `tracing` after the wrapped call returns, whatever its
/// outcome. Disabled timing runs the call untouched.
#[derive(Debug, Clone, Copy)]
pub struct Timing {
    enabled: bool,
}

impl Timing {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn disabled() -> Self {
        Self::new(false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn measure<T, F>(&self, operation: &'static str, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        if !self.enabled {
            return f();
        }

        let start = Instant::now();
        let out = f();
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        tracing::info!(
            target: "bank_account::timing",
            operation,
            elapsed_ms,
            "operation timed"
        );
        out
    }
}
