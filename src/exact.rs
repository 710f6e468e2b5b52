//! Exact rational interval model.
//!
//! Endpoints are [`BigRational`]s on `[0, 1)`, so narrowing never rounds.
//! The price is denominator growth: operand size grows with the number of
//! coded symbols, which makes this model a reference for checking the
//! finite-precision coder rather than something to run on long streams.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::interval::IntervalArithmetic;

/// Rational interval model; `whole` is `1`.
#[derive(Clone, Debug)]
pub struct ExactRational {
    half: BigRational,
    quarter: BigRational,
    three_quarters: BigRational,
}

impl ExactRational {
    /// Create the model.
    pub fn new() -> Self {
        let ratio = |n: i32, d: i32| BigRational::new(BigInt::from(n), BigInt::from(d));
        Self {
            half: ratio(1, 2),
            quarter: ratio(1, 4),
            three_quarters: ratio(3, 4),
        }
    }
}

impl Default for ExactRational {
    fn default() -> Self {
        Self::new()
    }
}

impl IntervalArithmetic for ExactRational {
    type Point = BigRational;
    type Mass = BigRational;

    fn zero(&self) -> BigRational {
        BigRational::zero()
    }

    fn whole(&self) -> BigRational {
        BigRational::one()
    }

    fn half(&self) -> &BigRational {
        &self.half
    }

    fn quarter(&self) -> &BigRational {
        &self.quarter
    }

    fn three_quarters(&self) -> &BigRational {
        &self.three_quarters
    }

    fn narrow(
        &self,
        a: &BigRational,
        b: &BigRational,
        lower: &BigRational,
        upper: &BigRational,
        scale: &BigRational,
    ) -> (BigRational, BigRational) {
        let w = (b - a) / scale;
        (a + &w * lower, a + &w * upper)
    }

    fn double(&self, x: &BigRational) -> BigRational {
        x + x
    }

    fn reflect(&self, x: &BigRational, origin: &BigRational) -> BigRational {
        let d = x - origin;
        &d + &d
    }

    /// The whole stream is read up front.
    fn lookahead(&self, available: usize) -> usize {
        available
    }

    fn load(&self, bits: &[u8]) -> BigRational {
        let numer = bits.iter().fold(BigInt::zero(), |acc, &bit| {
            (acc << 1u32) + BigInt::from(u8::from(bit != 0))
        });
        BigRational::new(numer, BigInt::one() << bits.len())
    }

    /// Every input bit is already part of `z`; later shifts only see padding.
    fn shift_in(&self, z: BigRational, _bit: u8) -> BigRational {
        z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::Renormalization;
    use proptest::prelude::*;

    fn r(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn test_narrow_is_exact() {
        let m = ExactRational::new();
        let (lo, hi) = m.narrow(&r(1, 3), &r(2, 3), &r(1, 7), &r(2, 7), &r(1, 1));
        assert_eq!(lo, r(8, 21));
        assert_eq!(hi, r(9, 21));
    }

    #[test]
    fn test_narrow_with_integer_scale() {
        let m = ExactRational::new();
        let (lo, hi) = m.narrow(&r(0, 1), &r(1, 1), &r(3, 1), &r(10, 1), &r(17, 1));
        assert_eq!(lo, r(3, 17));
        assert_eq!(hi, r(10, 17));
    }

    #[test]
    fn test_load_reads_every_bit() {
        let m = ExactRational::new();
        assert_eq!(m.load(&[0, 1, 1]), r(3, 8));
        assert_eq!(m.load(&[1; 40]), r((1 << 40) - 1, 1 << 40));
        assert_eq!(m.lookahead(40), 40);
    }

    #[test]
    fn test_straddle_fold() {
        let m = ExactRational::new();
        let (a, b) = (r(7, 16), r(1, 2));
        assert_eq!(m.renormalization(&a, &b), Some(Renormalization::Straddle));
        assert_eq!(m.apply(Renormalization::Straddle, &a), r(3, 8));
        assert_eq!(m.renormalization(&r(1, 4), &r(1, 2)), None);
    }

    proptest! {
        #[test]
        fn prop_narrow_is_nested(
            a in 0i64..1000,
            width in 1i64..1000,
            den in 1i64..1000,
            bounds in (0i64..500, 0i64..500),
            extra in 0i64..500,
        ) {
            let m = ExactRational::new();
            let (c, d) = (bounds.0.min(bounds.1), bounds.0.max(bounds.1));
            let scale = d + extra + 1;
            let (lo_end, hi_end) = (r(a, den), r(a + width, den));
            let (lo, hi) = m.narrow(&lo_end, &hi_end, &r(c, 1), &r(d, 1), &r(scale, 1));
            prop_assert!(lo_end <= lo);
            prop_assert!(lo <= hi);
            prop_assert!(hi <= hi_end);
            prop_assert_eq!(lo == hi, c == d);
        }
    }
}
