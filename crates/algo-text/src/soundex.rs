use algo_core::errors::{AlgoError, ErrorInfo};
use tracing::{debug, trace};

/// Length of every Soundex code: the leading letter plus three digits.
pub const SOUNDEX_LEN: usize = 4;

const DIGITS: usize = SOUNDEX_LEN - 1;

/// Letter groups sharing a phonetic code.
const GROUPS: [(&str, u8); 6] = [
    ("BFPV", b'1'),
    ("CGJKQSXZ", b'2'),
    ("DT", b'3'),
    ("L", b'4'),
    ("MN", b'5'),
    ("R", b'6'),
];

/// Returns the digit for an uppercase letter, or `None` for vowels, H, W, Y
/// and anything that is not a letter.
fn phonetic_code(letter: char) -> Option<u8> {
    GROUPS
        .iter()
        .rev()
        .find(|(members, _)| members.contains(letter))
        .map(|(_, code)| *code)
}

/// Encodes `word` as a four character Soundex code.
///
/// The first character is kept (ASCII uppercased) and followed by up to three
/// digits. A digit is only recorded when it differs from the previously
/// recorded digit, so runs of letters from one group collapse, even across
/// vowels. The leading letter is not a recorded digit and never suppresses the
/// first one: `"Pfister"` encodes as `P123`. Missing digits stay `'0'`.
///
/// Fails with [`AlgoError::InvalidArgument`] when `word` is empty or contains no
/// ASCII letter at all.
pub fn soundex(word: &str) -> Result<String, AlgoError> {
    let mut chars = word.chars().map(|c| c.to_ascii_uppercase());
    let Some(first) = chars.next() else {
        debug!("rejecting empty soundex input");
        return Err(AlgoError::invalid_argument(
            "empty-input",
            "soundex requires a non-empty word",
        ));
    };
    if !word.chars().any(|c| c.is_ascii_alphabetic()) {
        debug!(word, "rejecting soundex input without letters");
        return Err(ErrorInfo::new(
            "no-convertible-characters",
            "soundex input contains no ASCII letters",
        )
        .with_context("word", word)
        .into());
    }

    let mut digits = [b'0'; DIGITS];
    let mut filled = 0;
    let mut last = None;
    for code in chars.filter_map(phonetic_code) {
        if filled == DIGITS {
            break;
        }
        if last != Some(code) {
            digits[filled] = code;
            filled += 1;
            last = Some(code);
        }
    }

    let mut encoded = String::with_capacity(SOUNDEX_LEN);
    encoded.push(first);
    encoded.extend(digits.iter().map(|&digit| char::from(digit)));
    trace!(word, %encoded, "soundex");
    Ok(encoded)
}
