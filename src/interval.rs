//! Interval arithmetic shared by every coding model.
//!
//! The encoder and decoder in [`crate::coder`] are written once against
//! [`IntervalArithmetic`]. A model only has to say how points on its coding
//! line are represented, how a table range narrows an interval, and how a
//! point is doubled or reflected around a fixed origin.

use std::fmt::Debug;

/// One renormalization step applied to the coding interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Renormalization {
    /// Interval lies below `half`: commit `0` and double.
    Lower,
    /// Interval lies above `half`: commit `1`, reflect around `half`.
    Upper,
    /// Interval straddles `half` inside the middle quarters: defer a bit,
    /// reflect around `quarter`.
    Straddle,
}

/// Numeric representation of a coding interval `[a, b)` within `[0, whole)`.
pub trait IntervalArithmetic {
    /// A position on the coding line.
    type Point: Clone + PartialOrd + Debug;
    /// A cumulative probability value as stored in a boundary table.
    type Mass: Clone + PartialOrd + Debug;

    /// Lower end of the coding line.
    fn zero(&self) -> Self::Point;
    /// Upper end of the coding line.
    fn whole(&self) -> Self::Point;
    /// Midpoint of the coding line.
    fn half(&self) -> &Self::Point;
    /// First quarter point.
    fn quarter(&self) -> &Self::Point;
    /// Third quarter point.
    fn three_quarters(&self) -> &Self::Point;

    /// Maps the table range `[lower, upper)` out of `scale` onto `[a, b)`.
    ///
    /// For `lower <= upper <= scale` the result stays within `[a, b]`.
    fn narrow(
        &self,
        a: &Self::Point,
        b: &Self::Point,
        lower: &Self::Mass,
        upper: &Self::Mass,
        scale: &Self::Mass,
    ) -> (Self::Point, Self::Point);

    /// `2 * x`.
    fn double(&self, x: &Self::Point) -> Self::Point;

    /// `2 * (x - origin)`; callers guarantee `x >= origin`.
    fn reflect(&self, x: &Self::Point, origin: &Self::Point) -> Self::Point;

    /// Number of bits [`IntervalArithmetic::load`] consumes from a stream of
    /// `available` bits.
    fn lookahead(&self, available: usize) -> usize;

    /// Builds the decoder's initial target value from the head of `bits`.
    fn load(&self, bits: &[u8]) -> Self::Point;

    /// Appends the next input bit to a freshly renormalized target value.
    fn shift_in(&self, z: Self::Point, bit: u8) -> Self::Point;

    /// Whether `z` lies in `[a, b)`.
    fn contains(&self, a: &Self::Point, b: &Self::Point, z: &Self::Point) -> bool {
        a <= z && z < b
    }

    /// The next renormalization `[a, b)` admits, if any.
    ///
    /// Half-scale steps take priority; once neither applies, a straddle fold
    /// never re-enables them, so repeated calls reproduce the two-phase loop.
    fn renormalization(&self, a: &Self::Point, b: &Self::Point) -> Option<Renormalization> {
        if b < self.half() {
            Some(Renormalization::Lower)
        } else if a > self.half() {
            Some(Renormalization::Upper)
        } else if a > self.quarter() && b < self.three_quarters() {
            Some(Renormalization::Straddle)
        } else {
            None
        }
    }

    /// Applies `step` to a single point.
    fn apply(&self, step: Renormalization, x: &Self::Point) -> Self::Point {
        match step {
            Renormalization::Lower => self.double(x),
            Renormalization::Upper => self.reflect(x, self.half()),
            Renormalization::Straddle => self.reflect(x, self.quarter()),
        }
    }
}
