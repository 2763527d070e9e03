use std::cmp::Ordering;

use crate::ascii::AsciiChar;

impl PartialOrd for AsciiChar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AsciiChar {
    fn cmp(&self, other: &Self) -> Ordering {
        self.decimal().cmp(&other.decimal())
    }
}

/// Comparaisons croisées avec les entiers bruts, dans les deux sens.
///
/// Le caractère est élargi vers le type de l'entier avant comparaison, de
/// sorte que `ch == ch.decimal()` et `ch == ch.integer()` tiennent toujours.
macro_rules! cmp_with_int {
    ($($t:ty),*) => {
        $(
            impl PartialEq<$t> for AsciiChar {
                #[inline]
                fn eq(&self, other: &$t) -> bool {
                    <$t>::from(self.decimal()) == *other
                }
            }

            impl PartialEq<AsciiChar> for $t {
                #[inline]
                fn eq(&self, other: &AsciiChar) -> bool {
                    *self == <$t>::from(other.decimal())
                }
            }

            impl PartialOrd<$t> for AsciiChar {
                #[inline]
                fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                    <$t>::from(self.decimal()).partial_cmp(other)
                }
            }

            impl PartialOrd<AsciiChar> for $t {
                #[inline]
                fn partial_cmp(&self, other: &AsciiChar) -> Option<Ordering> {
                    self.partial_cmp(&<$t>::from(other.decimal()))
                }
            }
        )*
    };
}

cmp_with_int!(u8, u16, u32, u64, u128, usize, i16, i32, i64, i128, isize);
