use std::str::FromStr;

use crate::ascii::AsciiChar;
use crate::error::AsciiError;

impl AsciiChar {
    /// Constructeur canonique : lecture directe dans la table, O(1).
    ///
    /// Retourne `None` si `byte > 127`.
    ///
    /// # Example
    /// ```
    /// use ac_core::AsciiChar;
    /// assert_eq!(AsciiChar::from_byte(0x5B), Some(AsciiChar::LeftSquareBracket));
    /// assert_eq!(AsciiChar::from_byte(0x80), None);
    /// ```
    #[inline(always)]
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        if byte < 0x80 {
            Some(Self::ALL[byte as usize])
        } else {
            None
        }
    }

    /// Construit depuis un entier signé. `None` hors de `0..=127`.
    ///
    /// # Example
    /// ```
    /// use ac_core::AsciiChar;
    /// assert_eq!(AsciiChar::from_int(91), Some(AsciiChar::LeftSquareBracket));
    /// assert_eq!(AsciiChar::from_int(-1), None);
    /// assert_eq!(AsciiChar::from_int(200), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn from_int(value: i64) -> Option<Self> {
        u8::try_from(value).ok().and_then(Self::from_byte)
    }

    /// Construit depuis une valeur scalaire Unicode (code point brut).
    ///
    /// # Example
    /// ```
    /// use ac_core::AsciiChar;
    /// assert_eq!(AsciiChar::from_scalar(0x41), Some(AsciiChar::CapitalA));
    /// assert_eq!(AsciiChar::from_scalar(0xE9), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn from_scalar(value: u32) -> Option<Self> {
        u8::try_from(value).ok().and_then(Self::from_byte)
    }

    /// Construit depuis un `char`. `None` si le caractère n'est pas ASCII.
    ///
    /// # Example
    /// ```
    /// use ac_core::AsciiChar;
    /// assert_eq!(AsciiChar::from_char('~'), Some(AsciiChar::Tilde));
    /// assert_eq!(AsciiChar::from_char('é'), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        Self::from_scalar(u32::from(ch))
    }

    /// Construit depuis une chaîne d'exactement un caractère ASCII.
    ///
    /// A one-char ASCII string is exactly one UTF-8 byte, so only the
    /// byte length needs checking.
    ///
    /// # Example
    /// ```
    /// use ac_core::AsciiChar;
    /// assert_eq!(AsciiChar::from_single_str("A"), Some(AsciiChar::CapitalA));
    /// assert_eq!(AsciiChar::from_single_str("AB"), None);
    /// assert_eq!(AsciiChar::from_single_str(""), None);
    /// assert_eq!(AsciiChar::from_single_str("é"), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn from_single_str(s: &str) -> Option<Self> {
        match s.as_bytes() {
            [byte] => Self::from_byte(*byte),
            _ => None,
        }
    }
}

/// `$widen` élargit la valeur rejetée vers `i128` pour le message d'erreur.
macro_rules! try_from_int {
    ($($t:ty),* ; |$v:ident| $widen:expr) => {
        $(
            impl TryFrom<$t> for AsciiChar {
                type Error = AsciiError;

                fn try_from(value: $t) -> Result<Self, Self::Error> {
                    u8::try_from(value)
                        .ok()
                        .and_then(Self::from_byte)
                        .ok_or_else(|| {
                            let $v = value;
                            AsciiError::OutOfRange { value: $widen }
                        })
                }
            }
        )*
    };
}

try_from_int!(u8, u16, u32, u64, i8, i16, i32, i64; |v| i128::from(v));
try_from_int!(i128; |v| v);
// Pas de `From` vers i128 pour ces types ; u128 au-delà de i128::MAX est saturé.
try_from_int!(usize, isize, u128; |v| i128::try_from(v).unwrap_or(i128::MAX));

impl TryFrom<char> for AsciiChar {
    type Error = AsciiError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::from_char(ch).ok_or(AsciiError::NonAscii { ch })
    }
}

impl TryFrom<&str> for AsciiChar {
    type Error = AsciiError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::try_from(ch),
            _ => Err(AsciiError::NotSingleChar {
                len: s.chars().count(),
            }),
        }
    }
}

impl FromStr for AsciiChar {
    type Err = AsciiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_point_constructs() {
        for n in 0..=127u8 {
            let from_byte = AsciiChar::from_byte(n).map(AsciiChar::code_point);
            let from_int = AsciiChar::from_int(i64::from(n)).map(AsciiChar::code_point);
            assert_eq!(from_byte, Some(n));
            assert_eq!(from_int, Some(n));
        }
    }

    #[test]
    fn out_of_range_is_absent() {
        for n in [-1i64, -128, 128, 200, 255, 256, i64::MAX, i64::MIN] {
            assert_eq!(AsciiChar::from_int(n), None, "{n} accepté");
        }
        for b in 128..=255u8 {
            assert_eq!(AsciiChar::from_byte(b), None);
        }
        assert_eq!(AsciiChar::from_scalar(0x80), None);
        assert_eq!(AsciiChar::from_scalar(u32::MAX), None);
    }

    #[test]
    fn round_trip_through_decimal() {
        for ch in AsciiChar::iter() {
            assert_eq!(AsciiChar::from_byte(ch.code_point()), Some(ch));
            assert_eq!(AsciiChar::from_char(char::from(ch.code_point())), Some(ch));
        }
    }

    #[test]
    fn single_str_rules() {
        assert_eq!(AsciiChar::from_single_str("A"), Some(AsciiChar::CapitalA));
        assert_eq!(AsciiChar::from_single_str("\0"), Some(AsciiChar::Null));
        assert_eq!(AsciiChar::from_single_str("\u{7f}"), Some(AsciiChar::Delete));
        assert_eq!(AsciiChar::from_single_str("AB"), None);
        assert_eq!(AsciiChar::from_single_str(""), None);
        assert_eq!(AsciiChar::from_single_str("€"), None);
        // e + accent combinant : deux scalaires.
        assert_eq!(AsciiChar::from_single_str("e\u{301}"), None);
    }

    #[test]
    fn try_from_matches_option_constructors() {
        for n in -300i32..300 {
            let via_trait = AsciiChar::try_from(n).ok();
            assert_eq!(via_trait, AsciiChar::from_int(i64::from(n)));
        }
        for b in 0..=255u8 {
            assert_eq!(AsciiChar::try_from(b).ok(), AsciiChar::from_byte(b));
        }
    }

    #[test]
    fn try_from_reports_reason() {
        assert_eq!(
            AsciiChar::try_from(200u16),
            Err(AsciiError::OutOfRange { value: 200 })
        );
        assert_eq!(
            AsciiChar::try_from(-1i8),
            Err(AsciiError::OutOfRange { value: -1 })
        );
        assert_eq!(
            AsciiChar::try_from('λ'),
            Err(AsciiError::NonAscii { ch: 'λ' })
        );
        assert_eq!(
            "AB".parse::<AsciiChar>(),
            Err(AsciiError::NotSingleChar { len: 2 })
        );
        assert_eq!(
            "".parse::<AsciiChar>(),
            Err(AsciiError::NotSingleChar { len: 0 })
        );
        assert_eq!("é".parse::<AsciiChar>(), Err(AsciiError::NonAscii { ch: 'é' }));
        assert_eq!("z".parse::<AsciiChar>(), Ok(AsciiChar::SmallZ));
    }

    #[test]
    fn try_from_pointer_sized_and_wide_ints() {
        assert_eq!(AsciiChar::try_from(65usize), Ok(AsciiChar::CapitalA));
        assert_eq!(AsciiChar::try_from(127isize), Ok(AsciiChar::Delete));
        assert_eq!(AsciiChar::try_from(0u128), Ok(AsciiChar::Null));
        assert_eq!(AsciiChar::try_from(91i128), Ok(AsciiChar::LeftSquareBracket));
        assert_eq!(
            AsciiChar::try_from(128usize),
            Err(AsciiError::OutOfRange { value: 128 })
        );
        assert_eq!(
            AsciiChar::try_from(-1isize),
            Err(AsciiError::OutOfRange { value: -1 })
        );
        assert_eq!(
            AsciiChar::try_from(u128::MAX),
            Err(AsciiError::OutOfRange { value: i128::MAX })
        );
    }
}
