#![deny(missing_docs)]
#![doc = "Bisection helpers locating insertion points in sorted slices."]

//! Both directions narrow a half-open `[low, high)` window and never touch the
//! slice, so unsorted input yields an unspecified index but never panics.

mod bisect;
mod bounds;

pub use bisect::{bisect, bisect_left, bisect_left_all, bisect_right, bisect_right_all};
pub use bounds::SearchBounds;
