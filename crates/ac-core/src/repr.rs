use std::fmt::{self, Write};

use crate::ascii::AsciiChar;

/// Mnémoniques des codes 0..=32. DEL (127) est traité à part.
const MNEMONICS: [&str; 33] = [
    "NUL", "SOH", "STX", "ETX", "EOT", "ENQ", "ACK", "BEL", //
    "BS", "HT", "LF", "VT", "FF", "CR", "SO", "SI", //
    "DLE", "DC1", "DC2", "DC3", "DC4", "NAK", "SYN", "ETB", //
    "CAN", "EM", "SUB", "ESC", "FS", "GS", "RS", "US", //
    "SPC",
];

/// Textual and numeric representations. All of them are total.
impl AsciiChar {
    /// Valeur décimale, identique au code point.
    #[inline(always)]
    #[must_use]
    pub const fn decimal(self) -> u8 {
        self.code_point()
    }

    /// Valeur décimale élargie en entier signé.
    #[inline(always)]
    #[must_use]
    pub const fn integer(self) -> i64 {
        self.code_point() as i64
    }

    /// The character itself.
    ///
    /// # Example
    /// ```
    /// use ac_core::AsciiChar;
    /// assert_eq!(AsciiChar::CommercialAt.as_char(), '@');
    /// ```
    #[inline(always)]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.code_point() as char
    }

    /// Binaire sur 8 chiffres, complété à gauche par des zéros.
    ///
    /// # Example
    /// ```
    /// use ac_core::AsciiChar;
    /// assert_eq!(AsciiChar::CapitalA.binary(), "01000001");
    /// ```
    #[must_use]
    pub fn binary(self) -> String {
        format!("{:08b}", self.decimal())
    }

    /// Octal sur 3 chiffres.
    ///
    /// # Example
    /// ```
    /// use ac_core::AsciiChar;
    /// assert_eq!(AsciiChar::LeftSquareBracket.octal(), "133");
    /// assert_eq!(AsciiChar::Null.octal(), "000");
    /// ```
    #[must_use]
    pub fn octal(self) -> String {
        format!("{:03o}", self.decimal())
    }

    /// Hexadécimal majuscule sur 2 chiffres.
    ///
    /// # Example
    /// ```
    /// use ac_core::AsciiChar;
    /// assert_eq!(AsciiChar::LeftSquareBracket.hexadecimal(), "5B");
    /// assert_eq!(AsciiChar::LineFeed.hexadecimal(), "0A");
    /// ```
    #[must_use]
    pub fn hexadecimal(self) -> String {
        format!("{:02X}", self.decimal())
    }

    /// One-character string holding the character.
    #[must_use]
    pub fn unicode(self) -> String {
        self.as_char().to_string()
    }

    /// Entité HTML numérique décimale, sans zéros de tête.
    ///
    /// # Example
    /// ```
    /// use ac_core::AsciiChar;
    /// assert_eq!(AsciiChar::LeftSquareBracket.html_entity(), "&#91;");
    /// assert_eq!(AsciiChar::Null.html_entity(), "&#0;");
    /// ```
    #[must_use]
    pub fn html_entity(self) -> String {
        format!("&#{};", self.decimal())
    }

    /// Forme échappée, à la manière d'un littéral C.
    ///
    /// NUL, BEL, BS, HT, LF, VT, FF and CR use their named escapes. Every
    /// other control code is `\xHH` with lowercase hex digits. Printable
    /// characters are literal, except `\`, `"` and `'` which get a
    /// leading backslash.
    ///
    /// # Example
    /// ```
    /// use ac_core::AsciiChar;
    /// assert_eq!(AsciiChar::Null.escaped(), "\\0");
    /// assert_eq!(AsciiChar::Escape.escaped(), "\\x1b");
    /// assert_eq!(AsciiChar::QuotationMark.escaped(), "\\\"");
    /// assert_eq!(AsciiChar::CapitalA.escaped(), "A");
    /// ```
    #[must_use]
    pub fn escaped(self) -> String {
        let named = match self {
            Self::Null => "\\0",
            Self::Bell => "\\a",
            Self::Backspace => "\\b",
            Self::HorizontalTab => "\\t",
            Self::LineFeed => "\\n",
            Self::VerticalTab => "\\v",
            Self::FormFeed => "\\f",
            Self::CarriageReturn => "\\r",
            Self::ReverseSolidus => "\\\\",
            Self::QuotationMark => "\\\"",
            Self::Apostrophe => "\\'",
            _ if self.is_control() => return format!("\\x{:02x}", self.decimal()),
            _ => return self.unicode(),
        };
        named.to_owned()
    }

    /// Mnémonique de contrôle : codes 0..=31, `SPC` et `DEL`. Vide sinon.
    ///
    /// # Example
    /// ```
    /// use ac_core::AsciiChar;
    /// assert_eq!(AsciiChar::Escape.control_description(), "ESC");
    /// assert_eq!(AsciiChar::Space.control_description(), "SPC");
    /// assert_eq!(AsciiChar::CapitalA.control_description(), "");
    /// ```
    #[must_use]
    pub fn control_description(self) -> &'static str {
        match self {
            Self::Delete => "DEL",
            _ => MNEMONICS
                .get(usize::from(self.decimal()))
                .copied()
                .unwrap_or(""),
        }
    }
}

impl fmt::Display for AsciiChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.as_char())
    }
}

impl From<AsciiChar> for char {
    fn from(ch: AsciiChar) -> Self {
        ch.as_char()
    }
}

macro_rules! into_int {
    ($($t:ty),*) => {
        $(
            impl From<AsciiChar> for $t {
                fn from(ch: AsciiChar) -> Self {
                    <$t>::from(ch.decimal())
                }
            }
        )*
    };
}

into_int!(u8, u16, u32, u64, u128, usize, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_is_eight_digits_and_parses_back() {
        for ch in AsciiChar::iter() {
            let s = ch.binary();
            assert_eq!(s.len(), 8);
            assert!(s.chars().all(|c| c == '0' || c == '1'));
            assert_eq!(u8::from_str_radix(&s, 2), Ok(ch.decimal()));
        }
    }

    #[test]
    fn octal_is_three_digits_and_parses_back() {
        for ch in AsciiChar::iter() {
            let s = ch.octal();
            assert_eq!(s.len(), 3);
            assert!(s.chars().all(|c| ('0'..='7').contains(&c)));
            assert_eq!(u8::from_str_radix(&s, 8), Ok(ch.decimal()));
        }
    }

    #[test]
    fn hexadecimal_is_two_uppercase_digits() {
        for ch in AsciiChar::iter() {
            let s = ch.hexadecimal();
            assert_eq!(s.len(), 2);
            assert!(s.chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
            assert_eq!(u8::from_str_radix(&s, 16), Ok(ch.decimal()));
        }
        assert_eq!(AsciiChar::Delete.hexadecimal(), "7F");
    }

    #[test]
    fn html_entity_format() {
        for ch in AsciiChar::iter() {
            assert_eq!(ch.html_entity(), format!("&#{};", ch.decimal()));
        }
        assert_eq!(AsciiChar::Delete.html_entity(), "&#127;");
    }

    #[test]
    fn unicode_and_integer_agree_with_decimal() {
        for ch in AsciiChar::iter() {
            assert_eq!(ch.integer(), i64::from(ch.decimal()));
            assert_eq!(ch.unicode().chars().count(), 1);
            assert_eq!(u32::from(ch.as_char()), u32::from(ch.decimal()));
            assert_eq!(ch.to_string(), ch.unicode());
        }
    }

    #[test]
    fn control_description_table() {
        let described: Vec<AsciiChar> = AsciiChar::iter()
            .filter(|ch| !ch.control_description().is_empty())
            .collect();
        assert_eq!(described.len(), 34);
        for ch in AsciiChar::iter() {
            let has_mnemonic = !ch.control_description().is_empty();
            assert_eq!(has_mnemonic, ch.is_control() || ch == AsciiChar::Space);
        }
        assert_eq!(AsciiChar::Null.control_description(), "NUL");
        assert_eq!(AsciiChar::UnitSeparator.control_description(), "US");
        assert_eq!(AsciiChar::Delete.control_description(), "DEL");
        assert_eq!(AsciiChar::Tilde.control_description(), "");
    }

    #[test]
    fn escaped_named_hex_and_literal() {
        let named = [
            (AsciiChar::Null, "\\0"),
            (AsciiChar::Bell, "\\a"),
            (AsciiChar::Backspace, "\\b"),
            (AsciiChar::HorizontalTab, "\\t"),
            (AsciiChar::LineFeed, "\\n"),
            (AsciiChar::VerticalTab, "\\v"),
            (AsciiChar::FormFeed, "\\f"),
            (AsciiChar::CarriageReturn, "\\r"),
        ];
        for (ch, expected) in named {
            assert_eq!(ch.escaped(), expected);
        }
        assert_eq!(AsciiChar::StartOfHeading.escaped(), "\\x01");
        assert_eq!(AsciiChar::ShiftOut.escaped(), "\\x0e");
        assert_eq!(AsciiChar::UnitSeparator.escaped(), "\\x1f");
        assert_eq!(AsciiChar::Delete.escaped(), "\\x7f");
        assert_eq!(AsciiChar::ReverseSolidus.escaped(), "\\\\");
        assert_eq!(AsciiChar::Apostrophe.escaped(), "\\'");
        assert_eq!(AsciiChar::Space.escaped(), " ");
        assert_eq!(AsciiChar::SmallQ.escaped(), "q");
    }

    #[test]
    fn escaped_printables_are_literal_except_quotes_and_backslash() {
        for ch in AsciiChar::iter().filter(|c| c.is_printable()) {
            let special = matches!(
                ch,
                AsciiChar::ReverseSolidus | AsciiChar::QuotationMark | AsciiChar::Apostrophe
            );
            if special {
                assert_eq!(ch.escaped(), format!("\\{ch}"));
            } else {
                assert_eq!(ch.escaped(), ch.unicode());
            }
        }
    }

    #[test]
    fn widening_conversions() {
        let ch = AsciiChar::SmallA;
        assert_eq!(u8::from(ch), 97);
        assert_eq!(i32::from(ch), 97);
        assert_eq!(u64::from(ch), 97);
        assert_eq!(char::from(ch), 'a');
        assert_eq!(usize::from(ch), 97);
        assert_eq!(isize::from(ch), 97);
    }
}
