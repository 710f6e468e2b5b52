//! Binary arithmetic encoder and decoder.
//!
//! Both directions are written once against [`IntervalArithmetic`], so the
//! exact and finite-precision coders share every renormalization decision.
//!
//! The encoder narrows `[a, b)` to each symbol's table range and then
//! renormalizes: while the interval sits in one half of the line, the leading
//! bit is known and is committed; while it straddles the midpoint inside the
//! middle quarters, a bit is deferred and resolved by the next commit. The
//! decoder replays the same steps on `[a, b)` and its target value `z`,
//! shifting in one input bit per step.

use tracing::{debug, trace, warn};

use crate::bits::BitSink;
use crate::config::CoderConfig;
use crate::error::{Error, Result};
use crate::exact::ExactRational;
use crate::finite::FinitePrecision;
use crate::interval::{IntervalArithmetic, Renormalization};
use crate::table::BoundaryTable;

/// Symbol that ends a stream.
pub const TERMINATOR: usize = 0;

/// Arithmetic coder over an interval model.
#[derive(Clone, Debug)]
pub struct ArithmeticCoder<I> {
    model: I,
    config: CoderConfig,
}

/// Coder over `u64` endpoints with a fixed bit width.
pub type FiniteCoder = ArithmeticCoder<FinitePrecision>;

/// Coder over exact rationals.
pub type ExactCoder = ArithmeticCoder<ExactRational>;

impl FiniteCoder {
    /// Create a finite-precision coder with `precision` bits.
    ///
    /// # Errors
    /// Returns `Error::InvalidPrecision` outside `2..=62`.
    pub fn finite(precision: u32) -> Result<Self> {
        Ok(Self::new(FinitePrecision::new(precision)?))
    }
}

impl ExactCoder {
    /// Create an exact rational coder.
    pub fn exact() -> Self {
        Self::new(ExactRational::new())
    }
}

impl<I: IntervalArithmetic> ArithmeticCoder<I> {
    /// Create a coder over `model` with default decoder guards.
    pub fn new(model: I) -> Self {
        Self {
            model,
            config: CoderConfig::default(),
        }
    }

    /// Replace the decoder guards.
    pub fn with_config(mut self, config: CoderConfig) -> Self {
        self.config = config;
        self
    }

    /// The interval model.
    pub fn model(&self) -> &I {
        &self.model
    }

    /// The decoder guards.
    pub fn config(&self) -> &CoderConfig {
        &self.config
    }

    /// Encode `symbols` into a bit stream.
    ///
    /// The caller appends [`TERMINATOR`] if the decoder should find the end
    /// of the stream on its own. Without it the stream carries no end
    /// marker: `encode(&[])` yields the flush bits `01`, which decode as
    /// whatever symbols that point falls in (`[1, 0]` for four equal
    /// symbols), not as an empty message.
    ///
    /// # Errors
    /// Returns `Error::SymbolOutOfRange` for a symbol outside the table and
    /// `Error::MalformedInterval` if narrowing leaves an empty interval
    /// (a zero-mass symbol, or a table finer than the model's precision).
    pub fn encode(&self, symbols: &[usize], table: &BoundaryTable<I::Mass>) -> Result<Vec<u8>> {
        let m = &self.model;
        let mut a = m.zero();
        let mut b = m.whole();
        let mut sink = BitSink::new();

        for (position, &symbol) in symbols.iter().enumerate() {
            let (lower, upper) = table.range(symbol).ok_or(Error::SymbolOutOfRange {
                symbol,
                len: table.len(),
            })?;
            let (lo, hi) = m.narrow(&a, &b, lower, upper, table.scale());
            if !(lo < hi) {
                return Err(Error::MalformedInterval { position });
            }
            a = lo;
            b = hi;

            while let Some(step) = m.renormalization(&a, &b) {
                match step {
                    Renormalization::Lower => sink.commit(0),
                    Renormalization::Upper => sink.commit(1),
                    Renormalization::Straddle => sink.defer(),
                }
                trace!(?step, position, "renormalize");
                a = m.apply(step, &a);
                b = m.apply(step, &b);
            }
        }

        // One more deferred bit pins the final point inside [a, b).
        sink.defer();
        sink.commit(if a <= *m.quarter() { 0 } else { 1 });

        let bits = sink.into_bits();
        debug!(symbols = symbols.len(), bits = bits.len(), "encoded");
        Ok(bits)
    }

    /// Decode symbols `0..=max_symbol` from `bits` until [`TERMINATOR`].
    ///
    /// The terminator is the last element of the result. Bits past the end
    /// of the input read as `0`. Empty input decodes to no symbols.
    ///
    /// # Errors
    /// Returns `Error::SymbolOutOfRange` if `max_symbol` is outside the
    /// table, `Error::DecodeMismatch` if no scanned symbol contains the
    /// target value, and `Error::IncompleteDecode` if a guard in
    /// [`CoderConfig`] trips or the input runs out first. Both decode
    /// failures carry the symbols recovered so far.
    pub fn decode(
        &self,
        bits: &[u8],
        table: &BoundaryTable<I::Mass>,
        max_symbol: usize,
    ) -> Result<Vec<usize>> {
        if max_symbol >= table.len() {
            return Err(Error::SymbolOutOfRange {
                symbol: max_symbol,
                len: table.len(),
            });
        }
        if bits.is_empty() {
            return Ok(Vec::new());
        }

        let m = &self.model;
        let mut a = m.zero();
        let mut b = m.whole();
        let mut z = m.load(bits);
        let mut cursor = m.lookahead(bits.len());
        // Past this every input bit, plus a full window of padding, has
        // been shifted through z.
        let budget = bits.len() + cursor;
        let mut decoded = Vec::new();

        loop {
            if decoded.len() >= self.config.max_symbols || cursor > budget {
                warn!(decoded = decoded.len(), cursor, "decode did not reach terminator");
                return Err(Error::IncompleteDecode { decoded });
            }
            let Some((symbol, lo, hi)) = self.locate(&a, &b, &z, table, max_symbol) else {
                warn!(decoded = decoded.len(), "no symbol contains target value");
                return Err(Error::DecodeMismatch { decoded });
            };
            decoded.push(symbol);
            if symbol == TERMINATOR {
                debug!(symbols = decoded.len(), bits = bits.len(), "decoded");
                return Ok(decoded);
            }
            a = lo;
            b = hi;

            // A valid stream never renormalizes more often than it has bits,
            // so the input budget also bounds this loop.
            while let Some(step) = m.renormalization(&a, &b) {
                a = m.apply(step, &a);
                b = m.apply(step, &b);
                let bit = bits.get(cursor).copied().unwrap_or(0);
                z = m.shift_in(m.apply(step, &z), bit);
                cursor += 1;
                if cursor > budget {
                    warn!(decoded = decoded.len(), cursor, "input exhausted while renormalizing");
                    return Err(Error::IncompleteDecode { decoded });
                }
            }
        }
    }

    /// The symbol in `0..=max_symbol` whose narrowed interval contains `z`.
    fn locate(
        &self,
        a: &I::Point,
        b: &I::Point,
        z: &I::Point,
        table: &BoundaryTable<I::Mass>,
        max_symbol: usize,
    ) -> Option<(usize, I::Point, I::Point)> {
        let m = &self.model;
        let narrow = |j: usize| m.narrow(a, b, &table.lower()[j], &table.upper()[j], table.scale());

        if max_symbol < self.config.linear_scan_limit {
            return (0..=max_symbol).find_map(|j| {
                let (lo, hi) = narrow(j);
                m.contains(&lo, &hi, z).then_some((j, lo, hi))
            });
        }

        // Narrowed lower bounds are non-decreasing in j; find the last one
        // at or below z. Zero-width symbols share their successor's bound.
        let (mut left, mut right) = (0, max_symbol + 1);
        while left < right {
            let mid = left + (right - left) / 2;
            if narrow(mid).0 <= *z {
                left = mid + 1;
            } else {
                right = mid;
            }
        }
        let j = left.checked_sub(1)?;
        let (lo, hi) = narrow(j);
        m.contains(&lo, &hi, z).then_some((j, lo, hi))
    }
}
