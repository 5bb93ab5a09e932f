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

// Implements a binary operator for all owned/borrowed operand
// combinations, plus the compound-assignment form and the
// assignment-to-rhs form. $func is the function computing the reduced
// result from two fraction values.
macro_rules! arith_binary {
    (
        $func:path;
        $Imp:ident $method:ident;
        $ImpAssign:ident $method_assign:ident;
        $ImpFrom:ident $method_from:ident
    ) => {
        impl $Imp for Fraction {
            type Output = Fraction;
            #[inline]
            fn $method(self, rhs: Fraction) -> Fraction {
                $func(self, rhs)
            }
        }

        impl $Imp<&Fraction> for Fraction {
            type Output = Fraction;
            #[inline]
            fn $method(self, rhs: &Fraction) -> Fraction {
                $func(self, *rhs)
            }
        }

        impl $Imp<Fraction> for &Fraction {
            type Output = Fraction;
            #[inline]
            fn $method(self, rhs: Fraction) -> Fraction {
                $func(*self, rhs)
            }
        }

        impl $Imp for &Fraction {
            type Output = Fraction;
            #[inline]
            fn $method(self, rhs: &Fraction) -> Fraction {
                $func(*self, *rhs)
            }
        }

        impl $ImpAssign for Fraction {
            #[inline]
            fn $method_assign(&mut self, rhs: Fraction) {
                *self = $func(*self, rhs);
            }
        }

        impl $ImpAssign<&Fraction> for Fraction {
            #[inline]
            fn $method_assign(&mut self, rhs: &Fraction) {
                *self = $func(*self, *rhs);
            }
        }

        impl $ImpFrom for Fraction {
            #[inline]
            fn $method_from(&mut self, lhs: Fraction) {
                *self = $func(lhs, *self);
            }
        }

        impl $ImpFrom<&Fraction> for Fraction {
            #[inline]
            fn $method_from(&mut self, lhs: &Fraction) {
                *self = $func(*lhs, *self);
            }
        }
    };
}

// Implements a binary operator between fractions and a list of
// primitive integer types, on both sides, going through the
// integer-to-fraction lift.
macro_rules! arith_prim {
    (
        $func:path;
        $Imp:ident $method:ident;
        $ImpAssign:ident $method_assign:ident;
        $($T:ty)*
    ) => { $(
        impl $Imp<$T> for Fraction {
            type Output = Fraction;
            #[inline]
            fn $method(self, rhs: $T) -> Fraction {
                $func(self, Fraction::from(rhs))
            }
        }

        impl $Imp<$T> for &Fraction {
            type Output = Fraction;
            #[inline]
            fn $method(self, rhs: $T) -> Fraction {
                $func(*self, Fraction::from(rhs))
            }
        }

        impl $Imp<Fraction> for $T {
            type Output = Fraction;
            #[inline]
            fn $method(self, rhs: Fraction) -> Fraction {
                $func(Fraction::from(self), rhs)
            }
        }

        impl $Imp<&Fraction> for $T {
            type Output = Fraction;
            #[inline]
            fn $method(self, rhs: &Fraction) -> Fraction {
                $func(Fraction::from(self), *rhs)
            }
        }

        impl $ImpAssign<$T> for Fraction {
            #[inline]
            fn $method_assign(&mut self, rhs: $T) {
                *self = $func(*self, Fraction::from(rhs));
            }
        }
    )* };
}

macro_rules! sum_prod {
    ($Big:ty, $zero:expr, $one:expr) => {
        impl Sum for $Big {
            fn sum<I>(iter: I) -> $Big
            where
                I: Iterator<Item = $Big>,
            {
                iter.fold($zero, Add::add)
            }
        }

        impl<'a> Sum<&'a $Big> for $Big {
            fn sum<I>(iter: I) -> $Big
            where
                I: Iterator<Item = &'a $Big>,
            {
                iter.fold($zero, |acc, rhs| acc + rhs)
            }
        }

        impl Product for $Big {
            fn product<I>(iter: I) -> $Big
            where
                I: Iterator<Item = $Big>,
            {
                iter.fold($one, Mul::mul)
            }
        }

        impl<'a> Product<&'a $Big> for $Big {
            fn product<I>(iter: I) -> $Big
            where
                I: Iterator<Item = &'a $Big>,
            {
                iter.fold($one, |acc, rhs| acc * rhs)
            }
        }
    };
}
