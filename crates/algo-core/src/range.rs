//! Range construction and padding for integer sequences.

use tracing::trace;

/// Pads `values` in place until it holds exactly `|size|` elements.
///
/// A negative `size` prepends, a positive one appends. Each new slot takes
/// `fill` when supplied and otherwise the index of the slot within the padding
/// loop. Prepended slots are pushed to the front one at a time, so index fill
/// ends up descending: padding `[5]` to `-3` gives `[1, 0, 5]`.
///
/// `Some(0)` is a real fill value and pads with zeros.
///
/// Sequences already at or above `|size|` are left untouched.
pub fn pad(values: &mut Vec<usize>, size: isize, fill: Option<usize>) {
    let missing = size.unsigned_abs().saturating_sub(values.len());
    if missing == 0 {
        return;
    }
    trace!(len = values.len(), size, missing, ?fill, "padding sequence");

    let slot = |index: usize| fill.unwrap_or(index);
    if size < 0 {
        values.splice(0..0, (0..missing).rev().map(slot));
    } else {
        values.extend((0..missing).map(slot));
    }
}

/// Value-returning variant of [`pad`].
///
/// `range(Vec::new(), 4, None)` yields `[0, 1, 2, 3]`.
pub fn range(mut values: Vec<usize>, size: isize, fill: Option<usize>) -> Vec<usize> {
    pad(&mut values, size, fill);
    values
}
