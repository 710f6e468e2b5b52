//! # Arithmetic Coding
//!
//! *An entire message as a single number.*
//!
//! ## Intuition First
//!
//! Start with the interval `[0, 1)`. Split it into slices, one per symbol, each as wide as
//! that symbol's probability. To encode a symbol, zoom into its slice and split *that* the same
//! way for the next symbol. After the whole message, any number inside the final tiny interval
//! identifies the message; writing down just enough binary digits to pin one down is the code.
//!
//! Likely symbols keep the interval wide, so they cost few digits. Unlikely symbols shrink it
//! fast, so they cost many.
//!
//! ## The Problem
//!
//! Done naively, the interval endpoints need ever more precision: after `n` symbols they carry
//! roughly `n * H` bits. Practical coders keep the endpoints in fixed-width integers and
//! *renormalize*: as soon as the leading binary digit of every point in the interval agrees,
//! that digit is written out and the interval is doubled.
//!
//! The awkward case is an interval that shrinks around the midpoint `1/2`: its leading digit
//! stays undecided while the interval gets too narrow to represent. The fix is to fold the
//! middle half of the line outward and count how many times that happened; the next decided
//! digit settles all of the withheld ones at once (they are its complement).
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon     Entropy as the fundamental limit; Shannon-Fano-Elias interval codes
//! 1963  Elias       Unpublished infinite-precision interval coding (via Abramson)
//! 1976  Rissanen    Finite-precision arithmetic coding
//! 1976  Pasco       FIFO arithmetic codes
//! 1979  Martin      Range coding (byte-wise renormalization)
//! 1987  Witten      Witten-Neal-Cleary: the E1/E2/E3 reference implementation
//! 1998  Moffat      Arithmetic coding revisited: low-precision multiplication
//! ```
//!
//! ## Mathematical Formulation
//!
//! With cumulative bounds `c[x] <= d[x]` out of a total `R`, each symbol updates the interval
//! `[a, b)` of width `w = b - a` to
//!
//! ```text
//! b' = a + round(w * d[x] / R)
//! a' = a + round(w * c[x] / R)
//! ```
//!
//! then renormalizes on a line `[0, W)` with `W = 2^precision`:
//!
//! ```text
//! b < W/2              emit 0 (+ s ones),  [a, b) -> [2a, 2b)
//! a > W/2              emit 1 (+ s zeros), [a, b) -> [2(a - W/2), 2(b - W/2))
//! W/4 < a, b < 3W/4    s += 1,             [a, b) -> [2(a - W/4), 2(b - W/4))
//! ```
//!
//! ## Complexity Analysis
//!
//! - **Time**: $O(1)$ per emitted bit plus the symbol search in the decoder
//!   (linear for small alphabets, $O(\log n)$ otherwise).
//! - **Space**: $O(1)$ for the finite-precision coder; the exact coder's operands grow linearly
//!   with the message length.
//!
//! ## Failure Modes
//!
//! 1. **Precision Underflow**: a symbol whose mass rounds to zero width collapses the interval.
//!    The coder reports this rather than emitting a stream that cannot be decoded.
//! 2. **Table Mismatch**: decoding with a different table than encoding finds no matching
//!    symbol, or never reaches the terminator; both are reported with the partial output.
//!
//! ## Implementation Notes
//!
//! This crate provides one coder, generic over [`IntervalArithmetic`]:
//! - **[`FiniteCoder`]**: `u64` endpoints on a fixed bit width; the production shape.
//! - **[`ExactCoder`]**: `BigRational` endpoints; never rounds, used as a reference.
//!
//! Symbol `0` is the [`TERMINATOR`]: the decoder stops once it produces it.
//!
//! ## References
//!
//! - Witten, I. H., Neal, R. M., Cleary, J. G. (1987). "Arithmetic coding for data compression."
//! - Moffat, A., Neal, R. M., Witten, I. H. (1998). "Arithmetic coding revisited."
//! - MacKay, D. J. C. (2003). "Information Theory, Inference, and Learning Algorithms", ch. 6.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bits;
pub mod coder;
pub mod config;
pub mod error;
pub mod exact;
pub mod finite;
pub mod interval;
pub mod table;

pub use bits::{bits_to_string, string_to_bits};
pub use coder::{ArithmeticCoder, ExactCoder, FiniteCoder, TERMINATOR};
pub use config::CoderConfig;
pub use error::Error;
pub use exact::ExactRational;
pub use finite::FinitePrecision;
pub use interval::{IntervalArithmetic, Renormalization};
pub use table::{frequencies, BoundaryTable};
