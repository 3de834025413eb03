//! Tuning constants and the per-invocation configuration.

/// Extra bits on top of `ceil(digits * log2(10))`, absorbing the rounding
/// error accumulated by the final division and square root.
pub const GUARD_BITS: u64 = 32;

/// Series terms evaluated beyond the raw precision requirement.
pub const EXTRA_TERMS: u64 = 10;

/// Ranges with fewer terms than this are split sequentially even when running
/// on a worker pool.
pub const PARALLEL_GRAIN: u64 = 256;

/// Digit count used by the command line when none is given.
pub const DEFAULT_DIGITS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PiConfig {
    /// Decimal digits after the decimal point.
    pub digits: u64,
    /// Worker threads. `1` runs on the calling thread, `0` uses every
    /// available core.
    pub threads: usize,
}

impl PiConfig {
    pub fn new(digits: u64) -> Self {
        Self { digits, threads: 1 }
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Thread count with `0` resolved to the machine's parallelism.
    pub fn effective_threads(&self) -> usize {
        match self.threads {
            0 => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            n => n,
        }
    }
}

impl Default for PiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DIGITS)
    }
}
