#![deny(missing_docs)]
#![doc = "Shared error surface and sequence helpers for the node-algorithms crates."]

pub mod errors;
pub mod range;

pub use errors::{AlgoError, ErrorInfo};
pub use range::{pad, range};
