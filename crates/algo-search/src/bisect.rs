use algo_core::errors::AlgoError;
use tracing::trace;

use crate::bounds::SearchBounds;

fn right_within<T: PartialOrd>(items: &[T], x: &T, mut low: usize, mut high: usize) -> usize {
    while low < high {
        let mid = low + (high - low) / 2;
        if *x < items[mid] {
            high = mid;
        } else {
            low = mid + 1;
        }
    }
    low
}

fn left_within<T: PartialOrd>(items: &[T], x: &T, mut low: usize, mut high: usize) -> usize {
    while low < high {
        let mid = low + (high - low) / 2;
        if items[mid] < *x {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    low
}

/// Rightmost index at which `x` can be inserted into the ascending `items`
/// while keeping it sorted; elements equal to `x` end up before it.
///
/// Fails with [`AlgoError::InvalidArgument`] when `bounds` does not describe a
/// window inside `items`.
///
/// ```
/// use algo_search::{bisect_right, SearchBounds};
///
/// assert_eq!(bisect_right(&[1, 2, 2, 3], &2, SearchBounds::full()).unwrap(), 3);
/// ```
pub fn bisect_right<T: PartialOrd>(
    items: &[T],
    x: &T,
    bounds: SearchBounds,
) -> Result<usize, AlgoError> {
    let (low, high) = bounds.resolve(items.len())?;
    let index = right_within(items, x, low, high);
    trace!(len = items.len(), low, high, index, "bisect right");
    Ok(index)
}

/// Alias of [`bisect_right`].
pub fn bisect<T: PartialOrd>(
    items: &[T],
    x: &T,
    bounds: SearchBounds,
) -> Result<usize, AlgoError> {
    bisect_right(items, x, bounds)
}

/// Leftmost index at which `x` can be inserted into the ascending `items`
/// while keeping it sorted; elements equal to `x` end up after it.
///
/// Fails with [`AlgoError::InvalidArgument`] when `bounds` does not describe a
/// window inside `items`.
pub fn bisect_left<T: PartialOrd>(
    items: &[T],
    x: &T,
    bounds: SearchBounds,
) -> Result<usize, AlgoError> {
    let (low, high) = bounds.resolve(items.len())?;
    let index = left_within(items, x, low, high);
    trace!(len = items.len(), low, high, index, "bisect left");
    Ok(index)
}

/// [`bisect_right`] over the whole slice.
pub fn bisect_right_all<T: PartialOrd>(items: &[T], x: &T) -> usize {
    right_within(items, x, 0, items.len())
}

/// [`bisect_left`] over the whole slice.
pub fn bisect_left_all<T: PartialOrd>(items: &[T], x: &T) -> usize {
    left_within(items, x, 0, items.len())
}
