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

use crate::ops::{AddFrom, DivFrom, MulFrom, NegAssign, SubFrom};
use crate::Fraction;
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
};

impl Neg for Fraction {
    type Output = Fraction;
    #[inline]
    fn neg(self) -> Fraction {
        Fraction::from_parts(-self.numer(), self.denom())
    }
}

impl Neg for &Fraction {
    type Output = Fraction;
    #[inline]
    fn neg(self) -> Fraction {
        -*self
    }
}

impl NegAssign for Fraction {
    #[inline]
    fn neg_assign(&mut self) {
        *self = -*self;
    }
}

// Cross multiplication to the common denominator; the reduction pass
// takes care of lowest terms, no least-common-denominator search.
#[inline]
fn add_frac(lhs: Fraction, rhs: Fraction) -> Fraction {
    let num = lhs.numer() * rhs.denom() + rhs.numer() * lhs.denom();
    let den = lhs.denom() * rhs.denom();
    Fraction::reduced_parts(num, den)
}

#[inline]
fn sub_frac(lhs: Fraction, rhs: Fraction) -> Fraction {
    add_frac(lhs, -rhs)
}

#[inline]
fn mul_frac(lhs: Fraction, rhs: Fraction) -> Fraction {
    Fraction::reduced_parts(
        lhs.numer() * rhs.numer(),
        lhs.denom() * rhs.denom(),
    )
}

// Division by a zero-numerator fraction propagates a zero denominator
// through the reciprocal instead of raising an error.
#[inline]
fn div_frac(lhs: Fraction, rhs: Fraction) -> Fraction {
    mul_frac(lhs, rhs.recip())
}

arith_binary! { add_frac; Add add; AddAssign add_assign; AddFrom add_from }
arith_binary! { sub_frac; Sub sub; SubAssign sub_assign; SubFrom sub_from }
arith_binary! { mul_frac; Mul mul; MulAssign mul_assign; MulFrom mul_from }
arith_binary! { div_frac; Div div; DivAssign div_assign; DivFrom div_from }

arith_prim! { add_frac; Add add; AddAssign add_assign; i8 i16 i32 i64 u8 u16 u32 }
arith_prim! { sub_frac; Sub sub; SubAssign sub_assign; i8 i16 i32 i64 u8 u16 u32 }
arith_prim! { mul_frac; Mul mul; MulAssign mul_assign; i8 i16 i32 i64 u8 u16 u32 }
arith_prim! { div_frac; Div div; DivAssign div_assign; i8 i16 i32 i64 u8 u16 u32 }

sum_prod! { Fraction, Fraction::from(0), Fraction::new() }

#[cfg(test)]
mod tests {
    use crate::ops::{AddFrom, DivFrom, MulFrom, NegAssign, SubFrom};
    use crate::Fraction;

    #[test]
    fn check_add_sub() {
        let a = Fraction::from((2, 4));
        let b = Fraction::from((1, 4));
        // 12/16 comes back reduced
        assert_eq!((a + b).into_parts(), (3, 4));
        assert_eq!(a + b, b + a);
        assert_eq!((a - a).into_parts(), (0, 1));
        assert_eq!(Fraction::from((1, 2)) - Fraction::from((1, 3)), (1, 6));
    }

    #[test]
    fn check_mul_div() {
        let a = Fraction::from((1, 3));
        let b = Fraction::from((3, 1));
        assert_eq!((a * b).into_parts(), (1, 1));
        assert_eq!(a * b, b * a);
        let c = Fraction::from((2, 4));
        assert_eq!((c / c).into_parts(), (1, 1));
        assert_eq!(Fraction::from((3, 4)) / Fraction::from((2, 1)), (3, 8));
    }

    #[test]
    fn check_neg() {
        let f = Fraction::from((2, 4));
        // negation does not reduce
        assert_eq!((-f).into_parts(), (-2, 4));
        let mut m = f;
        m.neg_assign();
        assert_eq!(m, -f);
        assert_eq!(-(-f), f);
    }

    #[test]
    fn check_invalid_propagation() {
        let zero = Fraction::from((0, 7));
        let res = Fraction::from((3, 5)) / zero;
        assert_eq!(res.denom(), 0);
        assert!(!res.is_valid());
        // and the invalid state stays invalid through further arithmetic
        assert!(!(res + Fraction::from((1, 2))).is_valid());
    }

    #[test]
    fn check_compound_assign() {
        let mut f = Fraction::from((1, 2));
        f += Fraction::from((1, 4));
        assert_eq!(f, (3, 4));
        f -= Fraction::from((1, 4));
        assert_eq!(f, (1, 2));
        f *= Fraction::from((2, 3));
        assert_eq!(f, (1, 3));
        f /= Fraction::from((1, 3));
        assert_eq!(f.into_parts(), (1, 1));
    }

    #[test]
    fn check_prim_operands() {
        let f = Fraction::from((1, 2));
        assert_eq!(f + 2, (5, 2));
        assert_eq!(2 + f, (5, 2));
        assert_eq!(f - 1, (-1, 2));
        assert_eq!(1 - f, (1, 2));
        assert_eq!(f * 3, (3, 2));
        assert_eq!(3 * f, (3, 2));
        assert_eq!(f / 2, (1, 4));
        assert_eq!(2 / f, (4, 1));
        let mut m = f;
        m += 1;
        m *= 2u8;
        assert_eq!(m.into_parts(), (3, 1));
    }

    #[test]
    fn check_ref_op() {
        let lhs = Fraction::from((-13, 27));
        let rhs = Fraction::from((15, 101));
        assert_eq!(-&lhs, -lhs);
        assert_eq!(&lhs + &rhs, lhs + rhs);
        assert_eq!(&lhs - &rhs, lhs - rhs);
        assert_eq!(&lhs * &rhs, lhs * rhs);
        assert_eq!(&lhs / &rhs, lhs / rhs);
        assert_eq!(lhs + &rhs, &lhs + rhs);
        assert_eq!(&lhs * 3, lhs * 3);
    }

    #[test]
    fn check_from_ops() {
        let mut f = Fraction::from((1, 2));
        f.add_from(Fraction::from((1, 4)));
        assert_eq!(f, (3, 4));
        f.sub_from(Fraction::from((1, 1)));
        assert_eq!(f, (1, 4));
        f.mul_from(Fraction::from((2, 1)));
        assert_eq!(f, (1, 2));
        f.div_from(Fraction::from((1, 1)));
        assert_eq!(f, (2, 1));
    }

    #[test]
    fn check_sum_product() {
        let v = [
            Fraction::from((1, 2)),
            Fraction::from((1, 3)),
            Fraction::from((1, 6)),
        ];
        let sum: Fraction = v.iter().sum();
        assert_eq!(sum.into_parts(), (1, 1));
        let product: Fraction = v.iter().product();
        assert_eq!(product.into_parts(), (1, 36));
        let empty_sum: Fraction = std::iter::empty::<Fraction>().sum();
        assert_eq!(empty_sum.into_parts(), (0, 1));
        let empty_product: Fraction = std::iter::empty::<Fraction>().product();
        assert_eq!(empty_product.into_parts(), (1, 1));
    }
}
