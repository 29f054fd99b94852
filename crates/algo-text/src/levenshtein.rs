use algo_core::errors::{AlgoError, ErrorInfo};
use algo_core::range::range;
use tracing::{debug, trace};

/// Picks the cheapest of the three edit paths.
///
/// Preference on ties runs changes, then deletes, then adds. Comparing each
/// candidate against both others pairwise is not enough: with
/// `adds == deletes < changes` neither is strictly least.
#[inline]
fn cheapest(adds: usize, deletes: usize, changes: usize) -> usize {
    if adds < deletes.min(changes) {
        adds
    } else if deletes < changes {
        deletes
    } else {
        changes
    }
}

/// Minimum number of single character insertions, deletions or substitutions
/// turning `a` into `b`.
///
/// Characters are Unicode scalar values. The table keeps two rolling rows
/// sized after the shorter operand, so memory is `O(min(|a|, |b|))`.
///
/// ```
/// assert_eq!(algo_text::levenshtein("kitten", "sitting"), 3);
/// ```
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let (short, long) = if a.len() > b.len() { (&b, &a) } else { (&a, &b) };
    // Vec lengths never exceed isize::MAX.
    let width = (short.len() + 1) as isize;

    let mut current = range(Vec::new(), width, None);
    for i in 1..=long.len() {
        let previous = std::mem::replace(&mut current, range(vec![i], width, Some(0)));
        for j in 1..=short.len() {
            let adds = previous[j] + 1;
            let deletes = current[j - 1] + 1;
            let changes = previous[j - 1] + usize::from(short[j - 1] != long[i - 1]);
            current[j] = cheapest(adds, deletes, changes);
        }
    }

    let distance = current[short.len()];
    trace!(short = short.len(), long = long.len(), distance, "levenshtein");
    distance
}

/// Byte-oriented entry point for callers holding undecoded text.
///
/// Both operands must be valid UTF-8; otherwise the call fails with
/// [`AlgoError::InvalidArgument`] and code `invalid-text`.
pub fn levenshtein_bytes(a: &[u8], b: &[u8]) -> Result<usize, AlgoError> {
    let a = decode("a", a)?;
    let b = decode("b", b)?;
    Ok(levenshtein(a, b))
}

fn decode<'a>(operand: &str, bytes: &'a [u8]) -> Result<&'a str, AlgoError> {
    std::str::from_utf8(bytes).map_err(|err| {
        debug!(operand, valid_up_to = err.valid_up_to(), "rejecting non UTF-8 operand");
        ErrorInfo::new("invalid-text", "levenshtein operand is not valid UTF-8")
            .with_context("operand", operand)
            .with_context("valid_up_to", err.valid_up_to())
            .into()
    })
}
