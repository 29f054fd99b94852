use std::cmp::Ordering;

use algo_sort::{bubble_sort, bubble_sorted};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
struct Keyed {
    key: u8,
    tag: usize,
}

impl PartialEq for Keyed {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.key.partial_cmp(&other.key)
    }
}

#[test]
fn empty_and_single_are_unchanged() {
    let mut empty: [i32; 0] = [];
    assert!(bubble_sort(&mut empty).is_empty());

    let mut single = [42];
    assert_eq!(bubble_sort(&mut single), &[42]);
}

#[test]
fn sorts_small_input() {
    let mut items = [3, 1, 2];
    bubble_sort(&mut items);
    assert_eq!(items, [1, 2, 3]);
}

#[test]
fn returns_the_same_slice_for_chaining() {
    let mut items = vec![5, 4, 3, 2, 1];
    let first = bubble_sort(&mut items)[0];
    assert_eq!(first, 1);
    assert_eq!(items, vec![1, 2, 3, 4, 5]);
}

#[test]
fn owned_variant_sorts() {
    assert_eq!(
        bubble_sorted(vec!["pear", "apple", "fig"]),
        vec!["apple", "fig", "pear"]
    );
    assert_eq!(bubble_sorted(Vec::<u8>::new()), Vec::<u8>::new());
}

#[test]
fn equal_elements_keep_their_order() {
    let items: Vec<Keyed> = [2u8, 1, 2, 1, 0, 2]
        .iter()
        .enumerate()
        .map(|(tag, &key)| Keyed { key, tag })
        .collect();
    let sorted = bubble_sorted(items);
    let tags: Vec<usize> = sorted.iter().map(|item| item.tag).collect();
    assert_eq!(tags, vec![4, 1, 3, 0, 2, 5]);
}

proptest! {
    #[test]
    fn sorted_permutation(items in proptest::collection::vec(any::<i32>(), 0..48)) {
        let mut expected = items.clone();
        expected.sort();

        let mut actual = items;
        bubble_sort(&mut actual);
        prop_assert!(actual.windows(2).all(|pair| pair[0] <= pair[1]));
        prop_assert_eq!(actual, expected);
    }
}
