//! Window offset enumeration.
//!
//! Two interchangeable ways of listing the offsets whose window fits in
//! the input:
//!
//! - [`OffsetStrategy::Counted`] derives the window count up front and
//!   yields the closed range `0..=N-L`.
//! - [`OffsetStrategy::Filtered`] walks every offset `0..N` and keeps those
//!   where `i + L <= N`.
//!
//! Both produce the same offsets in the same ascending order.

use serde::{Deserialize, Serialize};

/// How candidate window offsets are enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetStrategy {
    /// Precomputed closed range `[0, N - L]`.
    #[default]
    Counted,
    /// Full range `[0, N)` filtered by window-fits-in-bounds.
    Filtered,
}

impl OffsetStrategy {
    /// Offsets of every full window of length `window` in an input of
    /// `input_len` digits.  Empty when the window does not fit.
    pub fn offsets(self, input_len: usize, window: usize) -> Vec<usize> {
        match self {
            Self::Counted => counted_offsets(input_len, window),
            Self::Filtered => filtered_offsets(input_len, window),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Counted => "counted",
            Self::Filtered => "filtered",
        }
    }
}

impl std::fmt::Display for OffsetStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OffsetStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "counted" => Ok(Self::Counted),
            "filtered" => Ok(Self::Filtered),
            other => Err(format!(
                "unknown offset strategy '{other}' (expected 'counted' or 'filtered')"
            )),
        }
    }
}

fn counted_offsets(input_len: usize, window: usize) -> Vec<usize> {
    match input_len.checked_sub(window) {
        Some(last) => (0..=last).collect(),
        None => Vec::new(),
    }
}

fn filtered_offsets(input_len: usize, window: usize) -> Vec<usize> {
    (0..input_len)
        .filter(|&i| i.checked_add(window).is_some_and(|end| end <= input_len))
        .collect()
}
