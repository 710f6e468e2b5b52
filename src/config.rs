//! Decoder guard configuration.

/// Limits that stop a decode which is not converging on the terminator.
///
/// None of these affect a well-formed stream; they bound the work done on
/// corrupted input or a table that does not match the encoder's.
/// Renormalization is bounded by the input length instead, so arbitrarily
/// small symbol masses still decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoderConfig {
    /// Maximum number of symbols produced by one decode.
    pub max_symbols: usize,
    /// Alphabets scanned with at most this many symbols use a linear search;
    /// larger ones use binary search over the cumulative bounds.
    pub linear_scan_limit: usize,
}

impl CoderConfig {
    /// Set [`CoderConfig::max_symbols`].
    pub fn with_max_symbols(mut self, max_symbols: usize) -> Self {
        self.max_symbols = max_symbols;
        self
    }

    /// Set [`CoderConfig::linear_scan_limit`].
    pub fn with_linear_scan_limit(mut self, linear_scan_limit: usize) -> Self {
        self.linear_scan_limit = linear_scan_limit;
        self
    }
}

impl Default for CoderConfig {
    fn default() -> Self {
        Self {
            max_symbols: 1 << 24,
            linear_scan_limit: 16,
        }
    }
}
