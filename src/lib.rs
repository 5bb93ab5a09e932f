// Copyright © 2016–2018 University of Malta

// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU Lesser General Public License
// as published by the Free Software Foundation, either version 3 of
// the License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU Lesser General Public
// License and a copy of the GNU General Public License along with
// this program. If not, see <http://www.gnu.org/licenses/>.

//! # Exact fraction arithmetic
//!
//! The `frac` crate provides the [`Fraction`] type: an exact rational
//! value stored as a signed 64-bit numerator over a non-negative 64-bit
//! denominator. There is no floating-point rounding anywhere; results
//! of the arithmetic operators are always returned in lowest terms,
//! with the sign carried entirely by the numerator.
//!
//! A denominator of zero is a representable "invalid fraction" state
//! rather than an error: it is never rejected at construction and it
//! propagates silently through arithmetic, so division by zero does not
//! panic. Callers that need a guaranteed-valid result check
//! [`Fraction::is_valid`].
//!
//! # Basic use
//!
//! ```rust
//! use frac::Fraction;
//!
//! let sum = Fraction::from((2, 4)) + Fraction::from((1, 4));
//! // 12/16, reduced to lowest terms
//! assert_eq!(sum, (3, 4));
//! assert_eq!(sum.to_string(), "3/4");
//!
//! // comparison is by value, not by representation
//! assert_eq!(Fraction::from((1, 2)), Fraction::from((2, 4)));
//! assert!(Fraction::from((-1, 2)) < Fraction::from((1, 2)));
//! ```
//!
//! Operators are overloaded for fraction and integer operands on either
//! side, and compound assignment is supported:
//!
//! ```rust
//! use frac::Fraction;
//!
//! let mut f = Fraction::from((1, 2));
//! f += 2;
//! assert_eq!(f, (5, 2));
//! assert_eq!(3 * f, (15, 2));
//! ```
//!
//! Besides the plain `"3/4"` rendering, a Unicode stacked rendering is
//! available through [`Fraction::formatted`]:
//!
//! ```rust
//! use frac::{FormatOptions, Fraction, Style};
//!
//! let f = Fraction::from((3, 4));
//! let stacked = FormatOptions {
//!     style: Style::UnicodeStacked,
//!     ..FormatOptions::default()
//! };
//! assert_eq!(f.formatted(stacked), "³⁄₄");
//! ```
//!
//! # Numeric range
//!
//! Numerator and denominator are plain `i64` values. Cross
//! multiplication inside the operators and comparisons can overflow for
//! extreme inputs; this is an accepted limitation of the fixed-width
//! representation and is not detected.

#![warn(missing_docs)]

#[macro_use]
mod macros;
pub mod fraction;
pub mod ops;

pub use crate::fraction::{FormatOptions, Fraction, Style};

/// Assigns to a fraction from another value.
///
/// # Examples
///
/// ```rust
/// use frac::{Assign, Fraction};
/// let mut f = Fraction::from((1, 2));
/// f.assign((-2, 3));
/// assert_eq!(f, (-2, 3));
/// f.assign(7);
/// assert_eq!(f, (7, 1));
/// ```
pub trait Assign<Src = Self> {
    /// Performs the assignment.
    fn assign(&mut self, src: Src);
}

/// Explicit integer-to-fraction conversions.
///
/// Integers lift into fractions either directly, with a denominator of
/// one, or as reciprocals. The reciprocal of zero is the invalid
/// fraction.
///
/// # Examples
///
/// ```rust
/// use frac::{Fraction, ToFraction};
/// assert_eq!(4.to_fraction(), Fraction::from((4, 1)));
/// assert_eq!(4.to_recip(), Fraction::from((1, 4)));
/// assert!(!0.to_recip().is_valid());
/// ```
pub trait ToFraction {
    /// Converts to a fraction with a denominator of one.
    fn to_fraction(self) -> Fraction;
    /// Converts to the reciprocal fraction, one over the value.
    fn to_recip(self) -> Fraction;
}
