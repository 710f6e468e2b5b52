//! Cumulative boundary tables.
//!
//! A table assigns symbol `i` the half-open range `[lower[i], upper[i])` out
//! of a total `scale`. The ranges partition `[0, scale)` in symbol order;
//! a symbol whose range is empty has zero mass and can never be decoded.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use crate::error::{Error, Result};

/// Per-symbol cumulative bounds `c` (`lower`) and `d` (`upper`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundaryTable<M> {
    lower: Vec<M>,
    upper: Vec<M>,
    scale: M,
}

impl<M: Clone + PartialOrd + Zero> BoundaryTable<M> {
    /// Create a table from explicit bounds.
    ///
    /// # Errors
    /// Returns `Error::InvalidTable` unless the ranges partition
    /// `[0, scale)` contiguously and `scale` is positive.
    pub fn new(lower: Vec<M>, upper: Vec<M>, scale: M) -> Result<Self> {
        if lower.is_empty() || lower.len() != upper.len() {
            return Err(Error::InvalidTable(format!(
                "expected equal non-empty bounds, got {} lower and {} upper",
                lower.len(),
                upper.len()
            )));
        }
        if !(scale > M::zero()) {
            return Err(Error::InvalidTable("scale must be positive".into()));
        }
        if !lower[0].is_zero() {
            return Err(Error::InvalidTable("first symbol must start at 0".into()));
        }
        for (i, (c, d)) in lower.iter().zip(&upper).enumerate() {
            if !(c <= d) {
                return Err(Error::InvalidTable(format!("symbol {i} has lower > upper")));
            }
            if i + 1 < lower.len() && lower[i + 1] != *d {
                return Err(Error::InvalidTable(format!(
                    "gap or overlap between symbols {i} and {}",
                    i + 1
                )));
            }
        }
        if upper[upper.len() - 1] != scale {
            return Err(Error::InvalidTable("last symbol must end at scale".into()));
        }
        Ok(Self { lower, upper, scale })
    }
}

impl<M> BoundaryTable<M> {
    /// Number of symbols in the table.
    pub fn len(&self) -> usize {
        self.lower.len()
    }

    /// Always false for a constructed table.
    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }

    /// Total mass `R`.
    pub fn scale(&self) -> &M {
        &self.scale
    }

    /// Cumulative lower bounds.
    pub fn lower(&self) -> &[M] {
        &self.lower
    }

    /// Cumulative upper bounds.
    pub fn upper(&self) -> &[M] {
        &self.upper
    }

    /// `(lower, upper)` for `symbol`, or `None` if it is out of range.
    pub fn range(&self, symbol: usize) -> Option<(&M, &M)> {
        Some((self.lower.get(symbol)?, self.upper.get(symbol)?))
    }
}

impl<M> BoundaryTable<M>
where
    M: Clone + PartialOrd + Zero + std::ops::Sub<Output = M>,
{
    /// Mass `upper - lower` of `symbol`.
    pub fn mass(&self, symbol: usize) -> Option<M> {
        let (c, d) = self.range(symbol)?;
        Some(d.clone() - c.clone())
    }
}

impl BoundaryTable<u64> {
    /// Build a table from a frequency histogram; `scale` is the total count.
    ///
    /// # Errors
    /// Returns `Error::EmptyHistogram` if `counts` has no mass.
    pub fn from_counts(counts: &[u64]) -> Result<Self> {
        let mut lower = Vec::with_capacity(counts.len());
        let mut upper = Vec::with_capacity(counts.len());
        let mut cumulative = 0u64;
        for &count in counts {
            lower.push(cumulative);
            cumulative = cumulative
                .checked_add(count)
                .ok_or_else(|| Error::InvalidTable("histogram total overflows u64".into()))?;
            upper.push(cumulative);
        }
        if cumulative == 0 {
            return Err(Error::EmptyHistogram);
        }
        Self::new(lower, upper, cumulative)
    }

    /// Quantize a probability vector onto `[0, scale)`.
    ///
    /// Probabilities are normalized by their sum first, so a vector that does
    /// not add up to exactly 1 is still accepted.
    ///
    /// # Errors
    /// Returns `Error::InvalidProbability` for negative or non-finite entries
    /// and `Error::EmptyHistogram` if they sum to zero.
    pub fn from_probabilities(probabilities: &[f64], scale: u64) -> Result<Self> {
        if let Some(&p) = probabilities.iter().find(|p| !p.is_finite() || **p < 0.0) {
            return Err(Error::InvalidProbability(p));
        }
        let total: f64 = probabilities.iter().sum();
        if total <= 0.0 {
            return Err(Error::EmptyHistogram);
        }
        let quantize = |cumulative: f64| ((cumulative / total) * scale as f64).round() as u64;

        let mut lower = Vec::with_capacity(probabilities.len());
        let mut upper: Vec<u64> = Vec::with_capacity(probabilities.len());
        let mut cumulative = 0.0;
        for &p in probabilities {
            lower.push(upper.last().copied().unwrap_or(0));
            cumulative += p;
            upper.push(quantize(cumulative).min(scale));
        }
        if let Some(last) = upper.last_mut() {
            *last = scale;
        }
        Self::new(lower, upper, scale)
    }

    /// The same partition as exact rationals, for the exact model.
    pub fn to_rational(&self) -> BoundaryTable<BigRational> {
        let ratio = |m: &u64| BigRational::from_integer(BigInt::from(*m));
        BoundaryTable {
            lower: self.lower.iter().map(ratio).collect(),
            upper: self.upper.iter().map(ratio).collect(),
            scale: ratio(&self.scale),
        }
    }
}

/// Empirical histogram of `data` over symbols `0..=max(data)`.
pub fn frequencies(data: &[usize]) -> Vec<u64> {
    let Some(&max) = data.iter().max() else {
        return Vec::new();
    };
    let mut counts = vec![0u64; max + 1];
    for &symbol in data {
        counts[symbol] += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_counts_with_gaps() {
        let table = BoundaryTable::from_counts(&[2, 0, 5, 1]).unwrap();
        assert_eq!(table.lower(), &[0, 2, 2, 7]);
        assert_eq!(table.upper(), &[2, 2, 7, 8]);
        assert_eq!(*table.scale(), 8);
        assert_eq!(table.mass(1), Some(0));
        assert_eq!(table.range(4), None);
    }

    #[test]
    fn test_empty_histogram() {
        assert!(matches!(BoundaryTable::from_counts(&[]), Err(Error::EmptyHistogram)));
        assert!(matches!(BoundaryTable::from_counts(&[0, 0]), Err(Error::EmptyHistogram)));
    }

    #[test]
    fn test_rejects_malformed_bounds() {
        let overlap = BoundaryTable::new(vec![0u64, 1], vec![2, 4], 4);
        assert!(matches!(overlap, Err(Error::InvalidTable(_))));
        let short = BoundaryTable::new(vec![0u64, 2], vec![2, 3], 4);
        assert!(matches!(short, Err(Error::InvalidTable(_))));
        let inverted = BoundaryTable::new(vec![0u64, 3], vec![3, 2], 2);
        assert!(matches!(inverted, Err(Error::InvalidTable(_))));
        let zero_scale = BoundaryTable::new(vec![0u64], vec![0], 0);
        assert!(matches!(zero_scale, Err(Error::InvalidTable(_))));
    }

    #[test]
    fn test_from_probabilities() {
        let table = BoundaryTable::from_probabilities(&[0.25, 0.25, 0.25, 0.25], 4).unwrap();
        assert_eq!(table.lower(), &[0, 1, 2, 3]);
        assert_eq!(table.upper(), &[1, 2, 3, 4]);

        // unnormalized input is rescaled
        let table = BoundaryTable::from_probabilities(&[1.0, 3.0], 8).unwrap();
        assert_eq!(table.upper(), &[2, 8]);

        assert!(matches!(
            BoundaryTable::from_probabilities(&[0.5, -0.5], 8),
            Err(Error::InvalidProbability(_))
        ));
        assert!(matches!(
            BoundaryTable::from_probabilities(&[f64::NAN], 8),
            Err(Error::InvalidProbability(_))
        ));
    }

    #[test]
    fn test_to_rational() {
        let table = BoundaryTable::from_counts(&[1, 3]).unwrap().to_rational();
        let r = |n: i64| BigRational::from_integer(BigInt::from(n));
        assert_eq!(table.upper(), &[r(1), r(4)]);
        assert_eq!(table.scale(), &r(4));
    }

    #[test]
    fn test_frequencies() {
        assert_eq!(frequencies(&[1, 2, 1, 0]), vec![1, 2, 1]);
        assert_eq!(frequencies(&[3]), vec![0, 0, 0, 1]);
        assert!(frequencies(&[]).is_empty());
    }

    proptest! {
        #[test]
        fn prop_histogram_table_is_valid(data in prop::collection::vec(0usize..20, 1..200)) {
            let counts = frequencies(&data);
            let table = BoundaryTable::from_counts(&counts).unwrap();
            prop_assert_eq!(table.len(), counts.len());
            for i in 0..table.len() {
                let (c, d) = table.range(i).unwrap();
                prop_assert!(c <= d);
                prop_assert_eq!(d - c, counts[i]);
            }
            prop_assert_eq!(table.upper()[table.len() - 1] - table.lower()[0], data.len() as u64);
        }
    }
}
