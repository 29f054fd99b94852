#![deny(missing_docs)]
#![doc = "String algorithms: Soundex phonetic codes and Levenshtein edit distance."]

/// Levenshtein edit distance over Unicode scalar values.
pub mod levenshtein;
/// American Soundex phonetic encoding.
pub mod soundex;

pub use levenshtein::{levenshtein, levenshtein_bytes};
pub use soundex::{soundex, SOUNDEX_LEN};
