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

use crate::Fraction;
use std::cmp::Ordering;

// Comparison is by cross multiplication, never by reducing first:
// a/b < c/d exactly when a·d < b·c, which holds because stored
// denominators are never negative. Comparisons involving an invalid
// fraction are unspecified.

impl Eq for Fraction {}

impl Ord for Fraction {
    #[inline]
    fn cmp(&self, other: &Fraction) -> Ordering {
        (self.numer() * other.denom()).cmp(&(self.denom() * other.numer()))
    }
}

impl PartialEq for Fraction {
    #[inline]
    fn eq(&self, other: &Fraction) -> bool {
        self.numer() * other.denom() == self.denom() * other.numer()
    }
}

impl PartialOrd for Fraction {
    #[inline]
    fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
        Some(<Fraction as Ord>::cmp(self, other))
    }
}

macro_rules! cmp_prim {
    ($($T:ty)*) => { $(
        impl PartialEq<$T> for Fraction {
            #[inline]
            fn eq(&self, other: &$T) -> bool {
                <Fraction as PartialEq>::eq(self, &Fraction::from(*other))
            }
        }

        impl PartialEq<Fraction> for $T {
            #[inline]
            fn eq(&self, other: &Fraction) -> bool {
                <Fraction as PartialEq<$T>>::eq(other, self)
            }
        }

        impl PartialOrd<$T> for Fraction {
            #[inline]
            fn partial_cmp(&self, other: &$T) -> Option<Ordering> {
                <Fraction as PartialOrd>::partial_cmp(
                    self,
                    &Fraction::from(*other),
                )
            }
        }

        impl PartialOrd<Fraction> for $T {
            #[inline]
            fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
                <Fraction as PartialOrd<$T>>::partial_cmp(other, self)
                    .map(Ordering::reverse)
            }
        }
    )* };
}

cmp_prim! { i8 i16 i32 i64 u8 u16 u32 }

macro_rules! cross {
    ($Num:ty; $Den:ty) => {
        impl PartialEq<($Num, $Den)> for Fraction {
            #[inline]
            fn eq(&self, other: &($Num, $Den)) -> bool {
                <Fraction as PartialEq>::eq(self, &Fraction::from(*other))
            }
        }

        impl PartialEq<Fraction> for ($Num, $Den) {
            #[inline]
            fn eq(&self, other: &Fraction) -> bool {
                <Fraction as PartialEq>::eq(&Fraction::from(*self), other)
            }
        }

        impl PartialOrd<($Num, $Den)> for Fraction {
            #[inline]
            fn partial_cmp(&self, other: &($Num, $Den)) -> Option<Ordering> {
                <Fraction as PartialOrd>::partial_cmp(
                    self,
                    &Fraction::from(*other),
                )
            }
        }

        impl PartialOrd<Fraction> for ($Num, $Den) {
            #[inline]
            fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
                <Fraction as PartialOrd>::partial_cmp(
                    &Fraction::from(*self),
                    other,
                )
            }
        }
    };
}

// (Major, Major), (Major, Minor*), (Minor*, Major)
macro_rules! matrix {
    ( $Major:ty $(; $Minor:ty)* ) => {
        cross! { $Major; $Major }
        $( cross! { $Major; $Minor } )*
        $( cross! { $Minor; $Major } )*
    };
}

matrix! { u8 }
matrix! { i8; u8 }
matrix! { u16; i8; u8 }
matrix! { i16; u16; i8; u8 }
matrix! { u32; i16; u16; i8; u8 }
matrix! { i32; u32; i16; u16; i8; u8 }
matrix! { i64; i32; u32; i16; u16; i8; u8 }

#[cfg(test)]
mod tests {
    use crate::Fraction;

    #[test]
    fn check_cross_cmp() {
        assert!(Fraction::from((-1, 2)) < Fraction::from((1, 2)));
        assert!(Fraction::from((1, 3)) < Fraction::from((1, 2)));
        assert!(Fraction::from((3, 2)) > Fraction::from((4, 3)));
        // unreduced operands compare by value, not by representation
        assert_eq!(Fraction::from((1, 2)), Fraction::from((2, 4)));
        assert!(Fraction::from((2, 4)) <= Fraction::from((1, 2)));
        assert_ne!(Fraction::from((1, 2)), Fraction::from((3, 4)));
        assert_eq!(Fraction::from_parts(3, -4), Fraction::from_parts(-3, 4));
    }

    #[test]
    fn check_cmp_prim() {
        let f = Fraction::from((7, 2));
        assert!(f < 4);
        assert!(f > 3);
        assert!(4 > f);
        assert!(3 < f);
        assert_eq!(Fraction::from((8, 2)), 4);
        assert_eq!(4u8, Fraction::from((8, 2)));
        assert_ne!(f, 3);
        assert_eq!(Fraction::from(-5i8), -5i64);
    }

    #[test]
    fn check_cmp_tuple() {
        let f = Fraction::from((3, 4));
        assert_eq!(f, (3, 4));
        assert_eq!((3, 4), f);
        assert_eq!(f, (6u8, 8u8));
        assert!(f < (4, 5));
        assert!((1, 2) < f);
        // a negative supplied denominator folds before comparing
        assert_eq!(f, (-3, -4));
    }

    #[test]
    fn check_sort() {
        let mut v = [
            Fraction::from((3, 4)),
            Fraction::from((-1, 2)),
            Fraction::from((2, 3)),
            Fraction::from(1),
        ];
        v.sort();
        assert_eq!(
            v,
            [
                Fraction::from((-1, 2)),
                Fraction::from((2, 3)),
                Fraction::from((3, 4)),
                Fraction::from(1),
            ]
        );
    }
}
