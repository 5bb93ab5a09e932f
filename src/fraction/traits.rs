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

use crate::{Assign, Fraction, ToFraction};
use std::hash::{Hash, Hasher};

impl Default for Fraction {
    #[inline]
    fn default() -> Fraction {
        Fraction::new()
    }
}

// Equality is by cross multiplication, so mathematically equal values
// must hash identically even when their representations differ; the
// reduced form is hashed. All invalid fractions compare equal to each
// other, so only the zero denominator is hashed for them. A zero
// numerator over a zero denominator also compares equal to plain zero;
// that corner of the hash/equality contract is left unspecified, like
// every comparison involving an invalid fraction.
impl Hash for Fraction {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        let reduced = self.reduce();
        reduced.denom().hash(state);
        if reduced.denom() != 0 {
            reduced.numer().hash(state);
        }
    }
}

impl Assign for Fraction {
    #[inline]
    fn assign(&mut self, src: Fraction) {
        *self = src;
    }
}

impl Assign<&Fraction> for Fraction {
    #[inline]
    fn assign(&mut self, src: &Fraction) {
        *self = *src;
    }
}

macro_rules! from_prim {
    ($($T:ty)*) => { $(
        impl From<$T> for Fraction {
            #[inline]
            fn from(src: $T) -> Fraction {
                Fraction::from_parts(i64::from(src), 1)
            }
        }

        impl Assign<$T> for Fraction {
            #[inline]
            fn assign(&mut self, src: $T) {
                *self = Fraction::from(src);
            }
        }

        impl ToFraction for $T {
            #[inline]
            fn to_fraction(self) -> Fraction {
                Fraction::from(self)
            }

            #[inline]
            fn to_recip(self) -> Fraction {
                Fraction::from_parts(1, i64::from(self))
            }
        }
    )* };
}

from_prim! { i8 i16 i32 i64 u8 u16 u32 }

macro_rules! from_tuple {
    ($Num:ty; $Den:ty) => {
        impl From<($Num, $Den)> for Fraction {
            #[inline]
            fn from(src: ($Num, $Den)) -> Fraction {
                Fraction::from_parts(i64::from(src.0), i64::from(src.1))
            }
        }

        impl Assign<($Num, $Den)> for Fraction {
            #[inline]
            fn assign(&mut self, src: ($Num, $Den)) {
                *self = Fraction::from(src);
            }
        }
    };
}

// (Major, Major), (Major, Minor*), (Minor*, Major)
macro_rules! matrix {
    ( $Major:ty $(; $Minor:ty)* ) => {
        from_tuple! { $Major; $Major }
        $( from_tuple! { $Major; $Minor } )*
        $( from_tuple! { $Minor; $Major } )*
    };
}

matrix! { u8 }
matrix! { i8; u8 }
matrix! { u16; i8; u8 }
matrix! { i16; u16; i8; u8 }
matrix! { u32; i16; u16; i8; u8 }
matrix! { i32; u32; i16; u16; i8; u8 }
matrix! { i64; i32; u32; i16; u16; i8; u8 }
