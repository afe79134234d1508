//! Window sums and the maximum reduction.
//!
//! [`evaluate`] validates that the window fits, enumerates offsets with the
//! configured [`OffsetStrategy`], sums every window and keeps the largest.
//! With [`WindowOptions::parallel`] set, windows are summed on the Rayon
//! pool; each window is independent so the result is the same either way.

use std::cmp::Reverse;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::digits::DigitString;
use crate::errors::WindowSumError;
use crate::length::WindowLength;
use crate::offsets::OffsetStrategy;

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

/// Evaluation knobs.  The defaults give the counted, sequential path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowOptions {
    pub strategy: OffsetStrategy,
    pub parallel: bool,
}

/// Outcome of one evaluation.
///
/// `best_offset` is the smallest offset whose window reaches `max_sum`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowReport {
    pub window: usize,
    pub input_len: usize,
    pub windows: usize,
    pub max_sum: u64,
    pub best_offset: usize,
    pub strategy: OffsetStrategy,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Sum of every full window, in offset order.
///
/// Returns an empty vector when `window` is longer than the input.
pub fn window_sums(
    digits: &DigitString,
    window: WindowLength,
    strategy: OffsetStrategy,
) -> Vec<u64> {
    let len = window.get();
    strategy
        .offsets(digits.len(), len)
        .into_iter()
        .map(|offset| digits.window_sum(offset, len))
        .collect()
}

/// Find the maximum window sum of `digits`.
pub fn evaluate(
    digits: &DigitString,
    window: WindowLength,
    options: WindowOptions,
) -> Result<WindowReport, WindowSumError> {
    let len = window.get();
    let no_window = WindowSumError::NoValidWindow {
        window: len,
        len: digits.len(),
    };
    if len > digits.len() {
        return Err(no_window);
    }

    let offsets = options.strategy.offsets(digits.len(), len);
    log::debug!(
        "evaluating {} windows of length {len} over {} digits ({}, parallel={})",
        offsets.len(),
        digits.len(),
        options.strategy,
        options.parallel
    );

    // Ties resolve to the smallest offset: keys are unique, so either
    // reduction picks the same element.
    let key = |&(offset, sum): &(usize, u64)| (sum, Reverse(offset));
    let best = if options.parallel {
        offsets
            .par_iter()
            .map(|&offset| (offset, digits.window_sum(offset, len)))
            .max_by_key(key)
    } else {
        offsets
            .iter()
            .map(|&offset| (offset, digits.window_sum(offset, len)))
            .max_by_key(key)
    };

    let (best_offset, max_sum) = best.ok_or(no_window)?;
    log::trace!("max window sum {max_sum} at offset {best_offset}");

    Ok(WindowReport {
        window: len,
        input_len: digits.len(),
        windows: offsets.len(),
        max_sum,
        best_offset,
        strategy: options.strategy,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
