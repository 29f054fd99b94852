use algo_core::errors::{AlgoError, ErrorInfo};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Optional window restricting a bisection to `items[low..high]`.
///
/// Unset bounds default to the start and the end of the slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchBounds {
    /// First index considered; defaults to `0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<usize>,
    /// One past the last index considered; defaults to the slice length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<usize>,
}

impl SearchBounds {
    /// Searches the whole slice.
    pub const fn full() -> Self {
        Self {
            low: None,
            high: None,
        }
    }

    /// Searches `items[low..high]`.
    pub const fn new(low: usize, high: usize) -> Self {
        Self {
            low: Some(low),
            high: Some(high),
        }
    }

    /// Sets the lower bound, keeping the upper one.
    pub const fn with_low(mut self, low: usize) -> Self {
        self.low = Some(low);
        self
    }

    /// Sets the upper bound, keeping the lower one.
    pub const fn with_high(mut self, high: usize) -> Self {
        self.high = Some(high);
        self
    }

    /// Resolves the window against a slice of length `len`.
    pub(crate) fn resolve(&self, len: usize) -> Result<(usize, usize), AlgoError> {
        let low = self.low.unwrap_or(0);
        let high = self.high.unwrap_or(len);
        if high > len || low > high {
            debug!(low, high, len, "rejecting bisection bounds");
            return Err(ErrorInfo::new(
                "bounds-out-of-range",
                "bisection bounds must satisfy low <= high <= len",
            )
            .with_context("low", low)
            .with_context("high", high)
            .with_context("len", len)
            .into());
        }
        Ok((low, high))
    }
}
