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

//! Operations on fractions.
//!
//! The compound-assignment traits of the standard library
//! (`AddAssign` and friends) modify the left operand. The traits here
//! complete the set: [`NegAssign`] negates in place, and the `…From`
//! traits assign the result to the *right* operand, which matters for
//! the non-commutative operators.

/// Compound negation and assignment.
///
/// # Examples
///
/// ```rust
/// use frac::ops::NegAssign;
/// use frac::Fraction;
/// let mut f = Fraction::from((5, 7));
/// f.neg_assign();
/// assert_eq!(f, (-5, 7));
/// ```
pub trait NegAssign {
    /// Performs the negation.
    fn neg_assign(&mut self);
}

/// Compound addition and assignment to the rhs operand.
///
/// `rhs.add_from(lhs)` has the same effect as `rhs = lhs + rhs`.
///
/// # Examples
///
/// ```rust
/// use frac::ops::AddFrom;
/// use frac::Fraction;
/// let mut rhs = Fraction::from((1, 2));
/// rhs.add_from(Fraction::from((1, 4)));
/// // rhs = 1/4 + 1/2
/// assert_eq!(rhs, (3, 4));
/// ```
pub trait AddFrom<Lhs = Self> {
    /// Performs the addition.
    fn add_from(&mut self, lhs: Lhs);
}

/// Compound subtraction and assignment to the rhs operand.
///
/// `rhs.sub_from(lhs)` has the same effect as `rhs = lhs - rhs`.
///
/// # Examples
///
/// ```rust
/// use frac::ops::SubFrom;
/// use frac::Fraction;
/// let mut rhs = Fraction::from((1, 2));
/// rhs.sub_from(Fraction::from((3, 2)));
/// // rhs = 3/2 - 1/2
/// assert_eq!(rhs, (1, 1));
/// ```
pub trait SubFrom<Lhs = Self> {
    /// Performs the subtraction.
    fn sub_from(&mut self, lhs: Lhs);
}

/// Compound multiplication and assignment to the rhs operand.
///
/// `rhs.mul_from(lhs)` has the same effect as `rhs = lhs * rhs`.
///
/// # Examples
///
/// ```rust
/// use frac::ops::MulFrom;
/// use frac::Fraction;
/// let mut rhs = Fraction::from((2, 3));
/// rhs.mul_from(Fraction::from((1, 2)));
/// // rhs = 1/2 * 2/3
/// assert_eq!(rhs, (1, 3));
/// ```
pub trait MulFrom<Lhs = Self> {
    /// Performs the multiplication.
    fn mul_from(&mut self, lhs: Lhs);
}

/// Compound division and assignment to the rhs operand.
///
/// `rhs.div_from(lhs)` has the same effect as `rhs = lhs / rhs`.
///
/// # Examples
///
/// ```rust
/// use frac::ops::DivFrom;
/// use frac::Fraction;
/// let mut rhs = Fraction::from((1, 2));
/// rhs.div_from(Fraction::from(1));
/// // rhs = 1 / (1/2)
/// assert_eq!(rhs, (2, 1));
/// ```
pub trait DivFrom<Lhs = Self> {
    /// Performs the division.
    fn div_from(&mut self, lhs: Lhs);
}
