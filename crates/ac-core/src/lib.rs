/// Type-safe ASCII characters for asciichar.
///
/// `AsciiChar` is a closed 128-value enum. Construction from integers,
/// bytes, chars and strings is fallible; every representation, predicate
/// and comparison on a constructed value is total.

pub mod ascii;
pub mod class;
pub mod cmp;
pub mod config;
pub mod construct;
pub mod error;
pub mod repr;
pub mod table;

pub use ascii::AsciiChar;
pub use class::CharClass;
pub use config::TableConfig;
pub use error::AsciiError;
pub use table::Column;
