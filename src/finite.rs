//! Finite-precision interval model.
//!
//! Interval endpoints are `u64` integers on a `precision`-bit scale, so
//! `whole = 2^precision`. Narrowing rounds to the nearest integer; truncation
//! would bias every interval downward and collapse narrow symbols early.
//!
//! Products are formed in `u128`: with `precision <= 62` and `u64` masses,
//! `2 * w * m + scale` cannot overflow.

use crate::error::{Error, Result};
use crate::interval::IntervalArithmetic;

/// Smallest precision with a non-zero `quarter`.
pub const MIN_PRECISION: u32 = 2;

/// Largest precision whose doubled endpoints still fit in `u64`.
pub const MAX_PRECISION: u32 = 62;

/// Integer interval model with constants fixed at construction.
#[derive(Clone, Debug)]
pub struct FinitePrecision {
    precision: u32,
    whole: u64,
    half: u64,
    quarter: u64,
    three_quarters: u64,
}

impl FinitePrecision {
    /// Create a model with `precision` bits.
    ///
    /// # Errors
    /// Returns `Error::InvalidPrecision` outside `2..=62`.
    pub fn new(precision: u32) -> Result<Self> {
        if !(MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
            return Err(Error::InvalidPrecision(precision));
        }
        let whole = 1u64 << precision;
        let quarter = whole >> 2;
        Ok(Self {
            precision,
            whole,
            half: whole >> 1,
            quarter,
            three_quarters: 3 * quarter,
        })
    }

    /// Bit width of the coding line.
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Largest table scale for which no positive mass can round to an empty
    /// interval. After renormalization the interval is at least a quarter of
    /// the line wide.
    pub fn max_safe_scale(&self) -> u64 {
        self.quarter
    }
}

/// `round(w * m / scale)`, halves rounding up.
#[inline]
fn scaled(w: u64, m: u64, scale: u64) -> u64 {
    let scale = scale as u128;
    ((2 * w as u128 * m as u128 + scale) / (2 * scale)) as u64
}

impl IntervalArithmetic for FinitePrecision {
    type Point = u64;
    type Mass = u64;

    fn zero(&self) -> u64 {
        0
    }

    fn whole(&self) -> u64 {
        self.whole
    }

    fn half(&self) -> &u64 {
        &self.half
    }

    fn quarter(&self) -> &u64 {
        &self.quarter
    }

    fn three_quarters(&self) -> &u64 {
        &self.three_quarters
    }

    fn narrow(&self, a: &u64, b: &u64, lower: &u64, upper: &u64, scale: &u64) -> (u64, u64) {
        let w = b - a;
        (a + scaled(w, *lower, *scale), a + scaled(w, *upper, *scale))
    }

    #[inline]
    fn double(&self, x: &u64) -> u64 {
        x << 1
    }

    #[inline]
    fn reflect(&self, x: &u64, origin: &u64) -> u64 {
        (x - origin) << 1
    }

    fn lookahead(&self, _available: usize) -> usize {
        self.precision as usize
    }

    fn load(&self, bits: &[u8]) -> u64 {
        bits.iter()
            .take(self.precision as usize)
            .enumerate()
            .filter(|(_, bit)| **bit != 0)
            .fold(0, |z, (i, _)| z | 1 << (self.precision as usize - 1 - i))
    }

    #[inline]
    fn shift_in(&self, z: u64, bit: u8) -> u64 {
        z | u64::from(bit != 0)
    }
}
