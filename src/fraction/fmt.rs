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
use std::fmt::{self, Debug, Display, Formatter};

/// How a numerator/denominator pair is rendered.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Style {
    /// `"-11/15"`: decimal numerator, `/`, decimal denominator.
    Plain,
    /// `"¹¹⁄₁₅"`: superscript numerator, U+2044 FRACTION SLASH,
    /// subscript denominator. A negative numerator keeps its plain `-`
    /// sign, as in `"-¹⁄₂"`; there is no superscript minus in the
    /// digit mapping.
    UnicodeStacked,
}

/// Options for [`Fraction::formatted`].
///
/// The default is [`Style::Plain`] with the short invalid-fraction
/// sentinel.
#[derive(Clone, Copy, Debug)]
pub struct FormatOptions {
    /// Rendering of a proper numerator/denominator pair.
    pub style: Style,
    /// Includes the numerator in the invalid-fraction sentinel, as in
    /// `"invalid fraction: 5/0"`.
    pub numerator_in_invalid: bool,
}

impl Default for FormatOptions {
    #[inline]
    fn default() -> FormatOptions {
        FormatOptions {
            style: Style::Plain,
            numerator_in_invalid: false,
        }
    }
}

impl Fraction {
    /// Formats the fraction as a display string.
    ///
    /// The rules apply in order:
    ///
    /// 1. a zero denominator renders the invalid-fraction sentinel;
    /// 2. a zero numerator renders `"0"`;
    /// 3. a numerator equal to the denominator renders `"1"`;
    /// 4. a denominator of one renders the numerator alone;
    /// 5. anything else renders per the selected [`Style`].
    ///
    /// The value is rendered as stored, without reduction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frac::{FormatOptions, Fraction};
    /// let opts = FormatOptions::default();
    /// assert_eq!(Fraction::from((0, 5)).formatted(opts), "0");
    /// assert_eq!(Fraction::from((5, 5)).formatted(opts), "1");
    /// assert_eq!(Fraction::from((7, 1)).formatted(opts), "7");
    /// assert_eq!(Fraction::from((-11, 15)).formatted(opts), "-11/15");
    /// ```
    pub fn formatted(&self, options: FormatOptions) -> String {
        if self.denom() == 0 {
            return if options.numerator_in_invalid {
                format!("invalid fraction: {}/0", self.numer())
            } else {
                String::from("invalid fraction")
            };
        }
        if self.numer() == 0 {
            return String::from("0");
        }
        if self.numer() == self.denom() {
            return String::from("1");
        }
        if self.denom() == 1 {
            return self.numer().to_string();
        }
        match options.style {
            Style::Plain => format!("{}/{}", self.numer(), self.denom()),
            Style::UnicodeStacked => {
                let mut s = superscript(self.numer());
                s.push('\u{2044}');
                s.push_str(&subscript(self.denom()));
                s
            }
        }
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(&self.formatted(FormatOptions::default()))
    }
}

impl Debug for Fraction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let options = FormatOptions {
            style: Style::Plain,
            numerator_in_invalid: true,
        };
        f.pad(&self.formatted(options))
    }
}

fn superscript(n: i64) -> String {
    const DIGITS: [char; 10] = [
        '\u{2070}', '\u{00b9}', '\u{00b2}', '\u{00b3}', '\u{2074}',
        '\u{2075}', '\u{2076}', '\u{2077}', '\u{2078}', '\u{2079}',
    ];
    map_digits(n, &DIGITS)
}

fn subscript(n: i64) -> String {
    const DIGITS: [char; 10] = [
        '\u{2080}', '\u{2081}', '\u{2082}', '\u{2083}', '\u{2084}',
        '\u{2085}', '\u{2086}', '\u{2087}', '\u{2088}', '\u{2089}',
    ];
    map_digits(n, &DIGITS)
}

// The table covers the digits 0–9; the sign passes through unmapped.
fn map_digits(n: i64, digits: &[char; 10]) -> String {
    let mut mapped = String::new();
    for ch in n.to_string().chars() {
        match ch.to_digit(10) {
            Some(d) => mapped.push(digits[d as usize]),
            None => mapped.push(ch),
        }
    }
    mapped
}
