#![deny(missing_docs)]
#![doc = "Bubble sort over mutable slices, with an owned-vector variant."]

mod bubble;

pub use bubble::{bubble_sort, bubble_sorted, swap};
