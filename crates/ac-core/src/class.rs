use serde::{Deserialize, Serialize};

use crate::ascii::AsciiChar;

/// Classification predicates, all defined as ranges over the decimal value.
impl AsciiChar {
    /// Codes 0..=31 et DEL (127).
    #[inline(always)]
    #[must_use]
    pub const fn is_control(self) -> bool {
        let d = self.decimal();
        d <= 0x1F || d == 0x7F
    }

    /// Codes 32..=126, espace compris.
    #[inline(always)]
    #[must_use]
    pub const fn is_printable(self) -> bool {
        matches!(self.decimal(), 0x20..=0x7E)
    }

    /// Printable and not a space: 33..=126.
    #[inline(always)]
    #[must_use]
    pub const fn is_graphic(self) -> bool {
        matches!(self.decimal(), 0x21..=0x7E)
    }

    /// `'0'..='9'`.
    #[inline(always)]
    #[must_use]
    pub const fn is_digit(self) -> bool {
        self.decimal().is_ascii_digit()
    }

    /// `'A'..='Z'`.
    #[inline(always)]
    #[must_use]
    pub const fn is_uppercase(self) -> bool {
        self.decimal().is_ascii_uppercase()
    }

    /// `'a'..='z'`.
    #[inline(always)]
    #[must_use]
    pub const fn is_lowercase(self) -> bool {
        self.decimal().is_ascii_lowercase()
    }

    /// # Example
    /// ```
    /// use ac_core::AsciiChar;
    /// assert!(AsciiChar::CapitalQ.is_letter());
    /// assert!(!AsciiChar::Digit7.is_letter());
    /// ```
    #[inline(always)]
    #[must_use]
    pub const fn is_letter(self) -> bool {
        self.is_uppercase() || self.is_lowercase()
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_alphanumeric(self) -> bool {
        self.is_digit() || self.is_letter()
    }

    /// `'0'..='9'`, `'A'..='F'`, `'a'..='f'`.
    #[inline(always)]
    #[must_use]
    pub const fn is_hex_digit(self) -> bool {
        self.decimal().is_ascii_hexdigit()
    }

    /// Graphic characters that are neither letters nor digits.
    #[inline(always)]
    #[must_use]
    pub const fn is_punctuation(self) -> bool {
        self.is_graphic() && !self.is_alphanumeric()
    }

    /// Espace, HT, LF, VT, FF, CR.
    ///
    /// Liste fermée, pas une plage. L'espace est à la fois imprimable et blanc.
    ///
    /// # Example
    /// ```
    /// use ac_core::AsciiChar;
    /// assert!(AsciiChar::Space.is_whitespace());
    /// assert!(AsciiChar::Space.is_printable());
    /// assert!(!AsciiChar::FileSeparator.is_whitespace());
    /// ```
    #[inline(always)]
    #[must_use]
    pub const fn is_whitespace(self) -> bool {
        matches!(self.decimal(), 0x20 | 0x09 | 0x0A | 0x0B | 0x0C | 0x0D)
    }

    /// Lettre minuscule → majuscule ; tout le reste est inchangé.
    ///
    /// # Example
    /// ```
    /// use ac_core::AsciiChar;
    /// assert_eq!(AsciiChar::SmallG.to_uppercase(), AsciiChar::CapitalG);
    /// assert_eq!(AsciiChar::Digit1.to_uppercase(), AsciiChar::Digit1);
    /// ```
    #[must_use]
    pub const fn to_uppercase(self) -> Self {
        if self.is_lowercase() {
            Self::ALL[(self.decimal() - 0x20) as usize]
        } else {
            self
        }
    }

    /// Lettre majuscule → minuscule ; tout le reste est inchangé.
    #[must_use]
    pub const fn to_lowercase(self) -> Self {
        if self.is_uppercase() {
            Self::ALL[(self.decimal() + 0x20) as usize]
        } else {
            self
        }
    }
}

/// Named character class, usable as a filter.
///
/// # Example
/// ```
/// use ac_core::{AsciiChar, CharClass};
/// let class = CharClass::from_name("digit").unwrap_or(CharClass::Printable);
/// assert!(class.matches(AsciiChar::Digit5));
/// assert_eq!(AsciiChar::iter().filter(|&c| class.matches(c)).count(), 10);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    Control,
    Printable,
    Graphic,
    Digit,
    Uppercase,
    Lowercase,
    Letter,
    Alphanumeric,
    HexDigit,
    Punctuation,
    Whitespace,
}

impl CharClass {
    /// Toutes les classes, dans l'ordre de déclaration.
    pub const ALL: [CharClass; 11] = [
        CharClass::Control,
        CharClass::Printable,
        CharClass::Graphic,
        CharClass::Digit,
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Letter,
        CharClass::Alphanumeric,
        CharClass::HexDigit,
        CharClass::Punctuation,
        CharClass::Whitespace,
    ];

    /// Retourne la classe correspondant au nom en minuscules, `None` sinon.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.name() == name)
    }

    /// Nom en minuscules, identique à la forme sérialisée.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Control => "control",
            Self::Printable => "printable",
            Self::Graphic => "graphic",
            Self::Digit => "digit",
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::Letter => "letter",
            Self::Alphanumeric => "alphanumeric",
            Self::HexDigit => "hexdigit",
            Self::Punctuation => "punctuation",
            Self::Whitespace => "whitespace",
        }
    }

    /// `true` si `ch` appartient à la classe.
    #[inline]
    #[must_use]
    pub const fn matches(self, ch: AsciiChar) -> bool {
        match self {
            Self::Control => ch.is_control(),
            Self::Printable => ch.is_printable(),
            Self::Graphic => ch.is_graphic(),
            Self::Digit => ch.is_digit(),
            Self::Uppercase => ch.is_uppercase(),
            Self::Lowercase => ch.is_lowercase(),
            Self::Letter => ch.is_letter(),
            Self::Alphanumeric => ch.is_alphanumeric(),
            Self::HexDigit => ch.is_hex_digit(),
            Self::Punctuation => ch.is_punctuation(),
            Self::Whitespace => ch.is_whitespace(),
        }
    }
}
