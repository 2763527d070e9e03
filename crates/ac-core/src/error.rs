use thiserror::Error;

/// Why a value could not be converted to an [`AsciiChar`](crate::AsciiChar).
///
/// Only the `TryFrom`/`FromStr` conversions produce it. The `from_*`
/// constructors report the same failures as a plain `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AsciiError {
    /// Numeric value outside `0..=127`.
    #[error("Valeur hors plage ASCII (0..=127) : {value}")]
    OutOfRange {
        /// The rejected value, widened.
        value: i128,
    },

    /// Character whose scalar value is above 0x7F.
    #[error("Caractère non ASCII : {ch:?}")]
    NonAscii {
        /// The rejected character.
        ch: char,
    },

    /// String that does not hold exactly one character.
    #[error("Un seul caractère attendu, {len} reçu(s)")]
    NotSingleChar {
        /// Number of characters in the string.
        len: usize,
    },
}
