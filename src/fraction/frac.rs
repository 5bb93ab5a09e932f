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

/**
An exact fraction.

A `Fraction` is a signed 64-bit numerator over a 64-bit denominator
stored as a non-negative magnitude. A negative denominator supplied at
any construction or assignment boundary folds its sign into the
numerator, so the stored denominator is never negative.

A denominator of zero is the representable *invalid fraction* state: it
is accepted everywhere and propagates silently through arithmetic.
Results of arithmetic and comparison on invalid values are unspecified;
formatting renders a sentinel string instead of a number.

Results of the arithmetic operators are always in lowest terms. Direct
construction and the field setters deliberately do *not* reduce, so an
unreduced pair such as 2/4 can be represented; comparison is by cross
multiplication and is therefore unaffected.

# Examples

```rust
use frac::Fraction;

let f = Fraction::from_parts(3, -4);
// the sign of the denominator folds into the numerator
assert_eq!(f.numer(), -3);
assert_eq!(f.denom(), 4);

let sum = f + Fraction::from((1, 4));
assert_eq!(sum, (-1, 2));
```
*/
#[derive(Clone, Copy)]
pub struct Fraction {
    num: i64,
    den: i64,
}

impl Fraction {
    /// Creates the unit fraction 1/1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frac::Fraction;
    /// let unit = Fraction::new();
    /// assert_eq!(unit.numer(), 1);
    /// assert_eq!(unit.denom(), 1);
    /// ```
    #[inline]
    pub const fn new() -> Fraction {
        Fraction { num: 1, den: 1 }
    }

    /// Creates a fraction from a numerator and a denominator.
    ///
    /// The numerator is stored verbatim. A negative denominator folds
    /// its sign into the numerator and is stored as its absolute
    /// value. A denominator of zero is accepted as-is and yields the
    /// invalid state. The stored pair is not reduced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frac::Fraction;
    /// let f = Fraction::from_parts(3, -4);
    /// assert_eq!(f.into_parts(), (-3, 4));
    /// let invalid = Fraction::from_parts(5, 0);
    /// assert!(!invalid.is_valid());
    /// ```
    #[inline]
    pub const fn from_parts(num: i64, den: i64) -> Fraction {
        if den < 0 {
            Fraction { num: -num, den: -den }
        } else {
            Fraction { num, den }
        }
    }

    /// Creates the reciprocal of `frac`.
    ///
    /// The reciprocal of a fraction with a zero numerator is the
    /// invalid fraction.
    #[inline]
    pub const fn recip_of(frac: Fraction) -> Fraction {
        Fraction::from_parts(frac.den, frac.num)
    }

    /// Returns the numerator.
    #[inline]
    pub const fn numer(&self) -> i64 {
        self.num
    }

    /// Returns the denominator. It is never negative.
    #[inline]
    pub const fn denom(&self) -> i64 {
        self.den
    }

    /// Returns the raw `(numerator, denominator)` pair.
    #[inline]
    pub const fn into_parts(self) -> (i64, i64) {
        (self.num, self.den)
    }

    /// Returns whether the denominator is nonzero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frac::Fraction;
    /// assert!(Fraction::from((3, 4)).is_valid());
    /// assert!(!Fraction::from_parts(3, 0).is_valid());
    /// ```
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.den != 0
    }

    /// Sets the numerator, leaving the denominator unchanged. Does not
    /// reduce.
    #[inline]
    pub fn set_numer(&mut self, num: i64) {
        self.num = num;
    }

    /// Sets the denominator, folding a negative sign into the
    /// numerator. Does not reduce.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frac::Fraction;
    /// let mut f = Fraction::from((3, 4));
    /// f.set_denom(-6);
    /// assert_eq!(f.into_parts(), (-3, 6));
    /// ```
    #[inline]
    pub fn set_denom(&mut self, den: i64) {
        if den < 0 {
            self.num = -self.num;
        }
        self.den = den.abs();
    }

    /// Reduces to lowest terms.
    ///
    /// Both components are divided by the absolute value of their
    /// greatest common divisor, so the result's denominator is never
    /// negative and a zero value comes out as 0/1. Reduction is
    /// idempotent.
    ///
    /// An invalid fraction keeps its zero denominator; the degenerate
    /// 0/0 pair, whose divisor would be zero, is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frac::Fraction;
    /// let f = Fraction::from((12, 16)).reduce();
    /// assert_eq!(f.into_parts(), (3, 4));
    /// ```
    #[inline]
    pub fn reduce(mut self) -> Fraction {
        self.reduce_mut();
        self
    }

    /// Reduces to lowest terms, mutating the value.
    pub fn reduce_mut(&mut self) {
        let mut divisor = gcd(self.num, self.den);
        if divisor < 0 {
            divisor = -divisor;
        }
        // only the 0/0 pair has a zero divisor
        if divisor == 0 {
            return;
        }
        self.num /= divisor;
        self.den /= divisor;
    }

    /// Returns the reciprocal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frac::Fraction;
    /// let f = Fraction::from((-2, 3));
    /// assert_eq!(f.recip().into_parts(), (-3, 2));
    /// ```
    #[inline]
    pub fn recip(self) -> Fraction {
        Fraction::recip_of(self)
    }

    /// Computes the reciprocal, mutating the value.
    #[inline]
    pub fn recip_mut(&mut self) {
        *self = Fraction::recip_of(*self);
    }

    // Arithmetic results route through here: raw cross products in,
    // lowest terms out. The denominator of a cross product is never
    // negative because the stored denominators are not.
    #[inline]
    pub(crate) fn reduced_parts(num: i64, den: i64) -> Fraction {
        Fraction { num, den }.reduce()
    }
}

// Iterative Euclidean algorithm. gcd(0, 0) is 0, and the result
// carries the sign left over from the remainder chain; callers take
// the absolute value.
pub(crate) fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

#[cfg(test)]
mod tests {
    use crate::fraction::frac::gcd;
    use crate::Fraction;

    #[test]
    fn check_new_and_parts() {
        let unit = Fraction::new();
        assert_eq!(unit.numer(), 1);
        assert_eq!(unit.denom(), 1);

        let f = Fraction::from_parts(3, -4);
        assert_eq!(f.numer(), -3);
        assert_eq!(f.denom(), 4);
        assert_eq!(f, Fraction::from_parts(-3, 4));
        assert_eq!(f.into_parts(), (-3, 4));

        let invalid = Fraction::from_parts(5, 0);
        assert!(!invalid.is_valid());
        assert_eq!(invalid.denom(), 0);
        assert_eq!(invalid.numer(), 5);
    }

    #[test]
    fn check_setters() {
        let mut f = Fraction::new();
        f.set_numer(6);
        assert_eq!(f.into_parts(), (6, 1));
        f.set_denom(-8);
        // the sign folds over and the raw pair stays unreduced
        assert_eq!(f.into_parts(), (-6, 8));
        f.set_denom(0);
        assert!(!f.is_valid());
        assert_eq!(f.numer(), -6);
    }

    #[test]
    fn check_reduce() {
        let f = Fraction::from_parts(12, 16).reduce();
        assert_eq!(f.into_parts(), (3, 4));
        // idempotent
        assert_eq!(f.reduce().into_parts(), (3, 4));

        let neg = Fraction::from_parts(-4, 6).reduce();
        assert_eq!(neg.into_parts(), (-2, 3));

        let zero = Fraction::from_parts(0, 5).reduce();
        assert_eq!(zero.into_parts(), (0, 1));

        // invalid pairs keep their zero denominator
        assert_eq!(Fraction::from_parts(6, 0).reduce().into_parts(), (1, 0));
        assert_eq!(Fraction::from_parts(-6, 0).reduce().into_parts(), (-1, 0));
        assert_eq!(Fraction::from_parts(0, 0).reduce().into_parts(), (0, 0));

        let mut m = Fraction::from_parts(10, 4);
        m.reduce_mut();
        assert_eq!(m.into_parts(), (5, 2));
    }

    #[test]
    fn check_recip() {
        let f = Fraction::from_parts(-2, 3);
        assert_eq!(f.recip().into_parts(), (-3, 2));
        assert_eq!(f.recip().recip(), f);
        assert_eq!(Fraction::recip_of(f).into_parts(), (-3, 2));

        // the reciprocal of a zero numerator is the invalid state
        let zero = Fraction::from_parts(0, 7);
        assert!(!zero.recip().is_valid());

        let mut m = f;
        m.recip_mut();
        assert_eq!(m.into_parts(), (-3, 2));
    }

    #[test]
    fn check_gcd() {
        assert_eq!(gcd(12, 16), 4);
        assert_eq!(gcd(16, 12), 4);
        assert_eq!(gcd(-4, 6), 2);
        assert_eq!(gcd(4, -6), -2);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(-7, 0), -7);
        assert_eq!(gcd(0, 0), 0);
    }
}
