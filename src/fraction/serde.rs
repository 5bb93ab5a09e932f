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
use serde::de::{
    Deserialize, Deserializer, Error as DeError, MapAccess, SeqAccess,
    Visitor,
};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt::{self, Formatter};

const FIELDS: &[&str] = &["numer", "denom"];

impl Serialize for Fraction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Fraction", 2)?;
        state.serialize_field("numer", &self.numer())?;
        state.serialize_field("denom", &self.denom())?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for Fraction {
    fn deserialize<D>(deserializer: D) -> Result<Fraction, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_struct("Fraction", FIELDS, FracVisitor)
    }
}

struct FracVisitor;

impl<'de> Visitor<'de> for FracVisitor {
    type Value = Fraction;

    fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("struct Fraction")
    }

    fn visit_seq<V>(self, mut seq: V) -> Result<Fraction, V::Error>
    where
        V: SeqAccess<'de>,
    {
        let numer = seq
            .next_element()?
            .ok_or_else(|| DeError::invalid_length(0, &self))?;
        let denom = seq
            .next_element()?
            .ok_or_else(|| DeError::invalid_length(1, &self))?;
        // sign-folded at the boundary like every other construction path
        Ok(Fraction::from_parts(numer, denom))
    }

    fn visit_map<V>(self, mut map: V) -> Result<Fraction, V::Error>
    where
        V: MapAccess<'de>,
    {
        let mut numer: Option<i64> = None;
        let mut denom: Option<i64> = None;
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "numer" => {
                    if numer.is_some() {
                        return Err(DeError::duplicate_field("numer"));
                    }
                    numer = Some(map.next_value()?);
                }
                "denom" => {
                    if denom.is_some() {
                        return Err(DeError::duplicate_field("denom"));
                    }
                    denom = Some(map.next_value()?);
                }
                _ => return Err(DeError::unknown_field(&key, FIELDS)),
            }
        }
        let numer = numer.ok_or_else(|| DeError::missing_field("numer"))?;
        let denom = denom.ok_or_else(|| DeError::missing_field("denom"))?;
        Ok(Fraction::from_parts(numer, denom))
    }
}

#[cfg(test)]
mod tests {
    use crate::Fraction;
    use serde_test::Token;

    fn tokens(numer: i64, denom: i64) -> [Token; 6] {
        [
            Token::Struct {
                name: "Fraction",
                len: 2,
            },
            Token::Str("numer"),
            Token::I64(numer),
            Token::Str("denom"),
            Token::I64(denom),
            Token::StructEnd,
        ]
    }

    enum Check {
        SerDe(Fraction),
        De(Fraction),
    }

    impl Check {
        fn check(self, numer: i64, denom: i64) {
            let t = tokens(numer, denom);
            match self {
                Check::SerDe(f) => serde_test::assert_tokens(&f, &t),
                Check::De(f) => serde_test::assert_de_tokens(&f, &t),
            }
        }
    }

    #[test]
    fn check_tokens() {
        Check::SerDe(Fraction::new()).check(1, 1);
        Check::SerDe(Fraction::from((-11, 15))).check(-11, 15);
        // raw representation round-trips without reduction
        Check::SerDe(Fraction::from((2, 4))).check(2, 4);
        // the invalid state is representable on the wire too
        Check::SerDe(Fraction::from_parts(5, 0)).check(5, 0);
        // a negative denominator folds on the way in
        Check::De(Fraction::from_parts(3, -4)).check(3, -4);
    }

    #[test]
    fn check_json() {
        let f = Fraction::from((2, 4));
        let encoded = serde_json::to_string(&f).unwrap();
        assert_eq!(encoded, "{\"numer\":2,\"denom\":4}");
        let decoded: Fraction = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.into_parts(), (2, 4));

        let folded: Fraction =
            serde_json::from_str("{\"numer\":3,\"denom\":-4}").unwrap();
        assert_eq!(folded.into_parts(), (-3, 4));

        let invalid: Fraction =
            serde_json::from_str("{\"numer\":5,\"denom\":0}").unwrap();
        assert!(!invalid.is_valid());
    }
}
