use tracing::trace;

/// Exchanges `items[first]` and `items[second]`.
///
/// # Panics
///
/// Panics if either index is out of bounds.
#[inline]
pub fn swap<T>(items: &mut [T], first: usize, second: usize) {
    items.swap(first, second);
}

/// Sorts `items` ascending in place and hands the same slice back.
///
/// Both loops count down. Pass `i` walks `j` from `len - i` to 1, sinking
/// `items[j]` below `items[j - 1]` whenever it compares strictly less, so the
/// window grows by one slot per pass and the last pass spans the whole slice.
/// Equal elements are never exchanged, which keeps the sort stable. There is no
/// early exit: every pass runs even on sorted input.
///
/// ```
/// let mut items = [3, 1, 2];
/// assert_eq!(algo_sort::bubble_sort(&mut items), &[1, 2, 3]);
/// ```
pub fn bubble_sort<T: PartialOrd>(items: &mut [T]) -> &mut [T] {
    let len = items.len();
    let mut swaps = 0usize;
    for i in (0..len).rev() {
        // With `i == 0` the walk starts at `len`, past the last element.
        for j in (1..=(len - i)).rev().filter(|&j| j < len) {
            if items[j] < items[j - 1] {
                swap(items, j, j - 1);
                swaps += 1;
            }
        }
    }
    trace!(len, swaps, "bubble sort");
    items
}

/// Owned variant of [`bubble_sort`].
pub fn bubble_sorted<T: PartialOrd>(mut items: Vec<T>) -> Vec<T> {
    bubble_sort(&mut items);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_exchanges_positions() {
        let mut items = ['a', 'b', 'c'];
        swap(&mut items, 0, 2);
        assert_eq!(items, ['c', 'b', 'a']);
    }

    #[test]
    fn swap_same_index_is_noop() {
        let mut items = [1, 2];
        swap(&mut items, 1, 1);
        assert_eq!(items, [1, 2]);
    }
}
