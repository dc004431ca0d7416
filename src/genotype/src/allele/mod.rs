mod error;
pub use error::ParseAlleleError;

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

/// A single observed allele value at an STR marker.
/// Usual case:     a repeat count, possibly carrying a microvariant digit. e.g. `13`, `9.3`
/// Specific case:  a sex-typing letter. e.g. `X`, `Y` (amelogenin)
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Allele {
    Repeat { units: u8, extra: u8 },
    Letter(char),
}

impl Allele {
    /// Instantiate a repeat-count allele from its whole-repeat `units` and microvariant
    /// digit `extra` (`9.3` => units: 9, extra: 3).
    #[must_use]
    pub fn repeat(units: u8, extra: u8) -> Self {
        debug_assert!(extra < 10, "microvariant digit must be a single decimal digit");
        Self::Repeat { units, extra }
    }

    /// Convert a floating-point repeat count to an `Allele`.
    ///
    /// Fractional parts must land on a single microvariant digit: `9.3` is a
    /// valid STR designation, `9.35` is not.
    pub fn try_from_f64(value: f64) -> Result<Self, ParseAlleleError> {
        let invalid = ParseAlleleError::InvalidRepeat(value);
        if !value.is_finite() || !(0.0..256.0).contains(&value) {
            return Err(invalid);
        }
        let tenths = (value * 10.0).round();
        if (value * 10.0 - tenths).abs() > 1e-6 {
            return Err(invalid);
        }
        let tenths = tenths as u32;
        match u8::try_from(tenths / 10) {
            Ok(units) => Ok(Self::Repeat { units, extra: (tenths % 10) as u8 }),
            Err(_) => Err(invalid),
        }
    }
}

impl FromStr for Allele {
    type Err = ParseAlleleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let invalid = || ParseAlleleError::InvalidToken(token.to_string());

        // Single alphabetic character => sex-typing letter.
        if let Ok(letter) = token.parse::<char>() {
            if letter.is_ascii_alphabetic() {
                return Ok(Self::Letter(letter.to_ascii_uppercase()));
            }
        }

        match token.split_once('.') {
            None => {
                let units = token.parse::<u8>().map_err(|_| invalid())?;
                Ok(Self::Repeat { units, extra: 0 })
            }
            Some((units, extra)) if extra.len() == 1 => {
                let units = units.parse::<u8>().map_err(|_| invalid())?;
                let extra = extra.parse::<u8>().map_err(|_| invalid())?;
                Ok(Self::Repeat { units, extra })
            }
            Some(_) => Err(invalid()),
        }
    }
}

impl Display for Allele {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Repeat { units, extra: 0 } => write!(f, "{units}"),
            Self::Repeat { units, extra }    => write!(f, "{units}.{extra}"),
            Self::Letter(letter)             => write!(f, "{letter}"),
        }
    }
}

/// Population files key frequencies with strings, while genotype files may carry
/// raw JSON numbers. Both spellings must land on the same representation.
impl<'de> Deserialize<'de> for Allele {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AlleleVisitor;

        impl Visitor<'_> for AlleleVisitor {
            type Value = Allele;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("an STR repeat count or a sex-typing letter")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                value.parse().map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                match u8::try_from(value) {
                    Ok(units) => Ok(Allele::Repeat { units, extra: 0 }),
                    Err(_) => Err(E::custom(ParseAlleleError::InvalidRepeat(value as f64))),
                }
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                u64::try_from(value)
                    .map_err(|_| E::custom(ParseAlleleError::InvalidRepeat(value as f64)))
                    .and_then(|value| self.visit_u64(value))
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
                Allele::try_from_f64(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(AlleleVisitor)
    }
}
