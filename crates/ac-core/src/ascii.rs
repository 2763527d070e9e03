use serde::{Deserialize, Serialize};

/// Déclare l'enum `AsciiChar` et la table `ALL` à partir d'une seule liste,
/// ce qui garantit que les deux restent alignées.
macro_rules! ascii_chars {
    ($($(#[$meta:meta])* $name:ident = $code:literal,)*) => {
        /// One of the 128 ASCII characters.
        ///
        /// The discriminant is the code point, so `ch as u8` and
        /// [`AsciiChar::code_point`] always agree.
        ///
        /// # Example
        /// ```
        /// use ac_core::AsciiChar;
        /// assert_eq!(AsciiChar::CapitalA.code_point(), 65);
        /// assert_eq!(AsciiChar::ALL[65], AsciiChar::CapitalA);
        /// ```
        #[repr(u8)]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
        #[serde(try_from = "u8", into = "u8")]
        pub enum AsciiChar {
            $($(#[$meta])* $name = $code,)*
        }

        impl AsciiChar {
            /// Les 128 caractères, dans l'ordre croissant des code points.
            ///
            /// `ALL[n].code_point() == n` pour tout `n` de 0 à 127.
            pub const ALL: [AsciiChar; 128] = [$(AsciiChar::$name,)*];
        }
    };
}

ascii_chars! {
    /// `NUL` (0x00)
    Null = 0,
    /// `SOH` (0x01)
    StartOfHeading = 1,
    /// `STX` (0x02)
    StartOfText = 2,
    /// `ETX` (0x03)
    EndOfText = 3,
    /// `EOT` (0x04)
    EndOfTransmission = 4,
    /// `ENQ` (0x05)
    Enquiry = 5,
    /// `ACK` (0x06)
    Acknowledge = 6,
    /// `BEL` (0x07)
    Bell = 7,
    /// `BS` (0x08)
    Backspace = 8,
    /// `HT` (0x09)
    HorizontalTab = 9,
    /// `LF` (0x0A)
    LineFeed = 10,
    /// `VT` (0x0B)
    VerticalTab = 11,
    /// `FF` (0x0C)
    FormFeed = 12,
    /// `CR` (0x0D)
    CarriageReturn = 13,
    /// `SO` (0x0E)
    ShiftOut = 14,
    /// `SI` (0x0F)
    ShiftIn = 15,
    /// `DLE` (0x10)
    DataLinkEscape = 16,
    /// `DC1` (0x11)
    DeviceControl1 = 17,
    /// `DC2` (0x12)
    DeviceControl2 = 18,
    /// `DC3` (0x13)
    DeviceControl3 = 19,
    /// `DC4` (0x14)
    DeviceControl4 = 20,
    /// `NAK` (0x15)
    NegativeAcknowledge = 21,
    /// `SYN` (0x16)
    SynchronousIdle = 22,
    /// `ETB` (0x17)
    EndOfTransmissionBlock = 23,
    /// `CAN` (0x18)
    Cancel = 24,
    /// `EM` (0x19)
    EndOfMedium = 25,
    /// `SUB` (0x1A)
    Substitute = 26,
    /// `ESC` (0x1B)
    Escape = 27,
    /// `FS` (0x1C)
    FileSeparator = 28,
    /// `GS` (0x1D)
    GroupSeparator = 29,
    /// `RS` (0x1E)
    RecordSeparator = 30,
    /// `US` (0x1F)
    UnitSeparator = 31,
    /// Space, `' '`
    Space = 32,
    /// `!`
    ExclamationMark = 33,
    /// `"`
    QuotationMark = 34,
    /// `#`
    NumberSign = 35,
    /// `$`
    DollarSign = 36,
    /// `%`
    PercentSign = 37,
    /// `&`
    Ampersand = 38,
    /// `'`
    Apostrophe = 39,
    /// `(`
    LeftParenthesis = 40,
    /// `)`
    RightParenthesis = 41,
    /// `*`
    Asterisk = 42,
    /// `+`
    PlusSign = 43,
    /// `,`
    Comma = 44,
    /// `-`
    HyphenMinus = 45,
    /// `.`
    FullStop = 46,
    /// `/`
    Solidus = 47,
    /// `0`
    Digit0 = 48,
    /// `1`
    Digit1 = 49,
    /// `2`
    Digit2 = 50,
    /// `3`
    Digit3 = 51,
    /// `4`
    Digit4 = 52,
    /// `5`
    Digit5 = 53,
    /// `6`
    Digit6 = 54,
    /// `7`
    Digit7 = 55,
    /// `8`
    Digit8 = 56,
    /// `9`
    Digit9 = 57,
    /// `:`
    Colon = 58,
    /// `;`
    Semicolon = 59,
    /// `<`
    LessThanSign = 60,
    /// `=`
    EqualsSign = 61,
    /// `>`
    GreaterThanSign = 62,
    /// `?`
    QuestionMark = 63,
    /// `@`
    CommercialAt = 64,
    /// `A`
    CapitalA = 65,
    /// `B`
    CapitalB = 66,
    /// `C`
    CapitalC = 67,
    /// `D`
    CapitalD = 68,
    /// `E`
    CapitalE = 69,
    /// `F`
    CapitalF = 70,
    /// `G`
    CapitalG = 71,
    /// `H`
    CapitalH = 72,
    /// `I`
    CapitalI = 73,
    /// `J`
    CapitalJ = 74,
    /// `K`
    CapitalK = 75,
    /// `L`
    CapitalL = 76,
    /// `M`
    CapitalM = 77,
    /// `N`
    CapitalN = 78,
    /// `O`
    CapitalO = 79,
    /// `P`
    CapitalP = 80,
    /// `Q`
    CapitalQ = 81,
    /// `R`
    CapitalR = 82,
    /// `S`
    CapitalS = 83,
    /// `T`
    CapitalT = 84,
    /// `U`
    CapitalU = 85,
    /// `V`
    CapitalV = 86,
    /// `W`
    CapitalW = 87,
    /// `X`
    CapitalX = 88,
    /// `Y`
    CapitalY = 89,
    /// `Z`
    CapitalZ = 90,
    /// `[`
    LeftSquareBracket = 91,
    /// `\`
    ReverseSolidus = 92,
    /// `]`
    RightSquareBracket = 93,
    /// `^`
    CircumflexAccent = 94,
    /// `_`
    LowLine = 95,
    /// `` ` ``
    GraveAccent = 96,
    /// `a`
    SmallA = 97,
    /// `b`
    SmallB = 98,
    /// `c`
    SmallC = 99,
    /// `d`
    SmallD = 100,
    /// `e`
    SmallE = 101,
    /// `f`
    SmallF = 102,
    /// `g`
    SmallG = 103,
    /// `h`
    SmallH = 104,
    /// `i`
    SmallI = 105,
    /// `j`
    SmallJ = 106,
    /// `k`
    SmallK = 107,
    /// `l`
    SmallL = 108,
    /// `m`
    SmallM = 109,
    /// `n`
    SmallN = 110,
    /// `o`
    SmallO = 111,
    /// `p`
    SmallP = 112,
    /// `q`
    SmallQ = 113,
    /// `r`
    SmallR = 114,
    /// `s`
    SmallS = 115,
    /// `t`
    SmallT = 116,
    /// `u`
    SmallU = 117,
    /// `v`
    SmallV = 118,
    /// `w`
    SmallW = 119,
    /// `x`
    SmallX = 120,
    /// `y`
    SmallY = 121,
    /// `z`
    SmallZ = 122,
    /// `{`
    LeftCurlyBracket = 123,
    /// `|`
    VerticalLine = 124,
    /// `}`
    RightCurlyBracket = 125,
    /// `~`
    Tilde = 126,
    /// `DEL` (0x7F)
    Delete = 127,
}

/// Copie statique de `AsciiChar::ALL`, pour emprunter des tranches `'static`.
static TABLE: [AsciiChar; AsciiChar::COUNT] = AsciiChar::ALL;

impl AsciiChar {
    /// Nombre de caractères du domaine.
    pub const COUNT: usize = 128;

    /// Code point in `0..=127`.
    ///
    /// # Example
    /// ```
    /// use ac_core::AsciiChar;
    /// assert_eq!(AsciiChar::Delete.code_point(), 127);
    /// ```
    #[inline(always)]
    #[must_use]
    pub const fn code_point(self) -> u8 {
        self as u8
    }

    /// Itère sur les 128 caractères par code point croissant.
    ///
    /// # Example
    /// ```
    /// use ac_core::AsciiChar;
    /// let mut it = AsciiChar::iter();
    /// assert_eq!(it.next(), Some(AsciiChar::Null));
    /// assert_eq!(it.last(), Some(AsciiChar::Delete));
    /// ```
    #[must_use]
    pub fn iter() -> impl DoubleEndedIterator<Item = AsciiChar> + ExactSizeIterator {
        Self::ALL.into_iter()
    }

    /// Inclusive run of characters from `first` to `last`, ascending.
    ///
    /// Empty when `first > last`.
    ///
    /// # Example
    /// ```
    /// use ac_core::AsciiChar;
    /// let digits: String = AsciiChar::range(AsciiChar::Digit0, AsciiChar::Digit9)
    ///     .map(AsciiChar::as_char)
    ///     .collect();
    /// assert_eq!(digits, "0123456789");
    /// ```
    #[must_use]
    pub fn range(first: AsciiChar, last: AsciiChar) -> impl DoubleEndedIterator<Item = AsciiChar> {
        let start = usize::from(first.code_point());
        let end = usize::from(last.code_point());
        let slice: &'static [AsciiChar] = if start <= end {
            &TABLE[start..=end]
        } else {
            &[]
        };
        slice.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_indexed_by_code_point() {
        for (i, ch) in AsciiChar::ALL.iter().enumerate() {
            assert_eq!(usize::from(ch.code_point()), i, "{ch:?} mal placé");
        }
    }

    #[test]
    fn code_points_cover_whole_range_once() {
        let mut seen = [false; 128];
        for ch in AsciiChar::iter() {
            let idx = usize::from(ch.code_point());
            assert!(!seen[idx], "code point {idx} en double");
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s));
        assert_eq!(AsciiChar::iter().len(), AsciiChar::COUNT);
    }

    #[test]
    fn iteration_is_ascending_and_adjacent() {
        let all: Vec<AsciiChar> = AsciiChar::iter().collect();
        for pair in all.windows(2) {
            assert_eq!(pair[0].code_point() + 1, pair[1].code_point());
        }
    }

    #[test]
    fn named_landmarks() {
        assert_eq!(AsciiChar::Space.code_point(), 32);
        assert_eq!(AsciiChar::Digit0.code_point(), 48);
        assert_eq!(AsciiChar::CapitalZ.code_point(), 90);
        assert_eq!(AsciiChar::LeftSquareBracket.code_point(), 91);
        assert_eq!(AsciiChar::SmallA.code_point(), 97);
        assert_eq!(AsciiChar::Tilde.code_point(), 126);
    }

    #[test]
    fn range_bounds() {
        assert_eq!(AsciiChar::range(AsciiChar::SmallA, AsciiChar::SmallZ).count(), 26);
        assert_eq!(AsciiChar::range(AsciiChar::Null, AsciiChar::Delete).count(), 128);
        assert_eq!(AsciiChar::range(AsciiChar::Tilde, AsciiChar::Space).count(), 0);
        assert_eq!(
            AsciiChar::range(AsciiChar::Escape, AsciiChar::Escape).collect::<Vec<_>>(),
            vec![AsciiChar::Escape]
        );
    }
}
