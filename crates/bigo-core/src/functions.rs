//! Reference functions with known complexity
//!
//! Each function is deterministic. Size arguments are `i64` so that a
//! negative size is representable and rejected with `InvalidInput` before
//! anything is emitted.

use std::hint::black_box;

use crate::{BigOError, BigOResult, Emission, OutputSink};

fn require_size(function: &'static str, n: i64) -> BigOResult<u64> {
    u64::try_from(n).map_err(|_| BigOError::negative_size(function, n))
}

/// Sum of 1..=n by accumulation. Time O(n), space O(1).
pub fn sum_range(n: i64) -> BigOResult<u128> {
    let n = require_size("sum_range", n)?;
    let mut total: u128 = 0;
    for i in 1..=n {
        // black_box keeps the loop from being folded into the closed form
        total += black_box(i) as u128;
    }
    Ok(total)
}

/// Sum of 1..=n as n(n+1)/2. Time O(1), space O(1).
pub fn sum_range_closed_form(n: i64) -> BigOResult<u128> {
    let n = require_size("sum_range_closed_form", n)? as u128;
    Ok(n * (n + 1) / 2)
}

/// Emits 0..n ascending, then n-1 down to 0. Time O(n), space O(1).
pub fn count_up_and_down(n: i64, sink: &mut dyn OutputSink) -> BigOResult<()> {
    let n = require_size("count_up_and_down", n)?;
    for i in 0..n {
        sink.emit(Emission::Value(i));
    }
    for j in (0..n).rev() {
        sink.emit(Emission::Value(j));
    }
    Ok(())
}

/// Emits every ordered pair (i, j) with i, j in [0, n). Time O(n^2), space O(1).
pub fn print_all_pairs(n: i64, sink: &mut dyn OutputSink) -> BigOResult<()> {
    let n = require_size("print_all_pairs", n)?;
    for i in 0..n {
        for j in 0..n {
            sink.emit(Emission::Pair(i, j));
        }
    }
    Ok(())
}

/// Emits 1..=max(5, n). Linear once n > 5.
///
/// Any integer is accepted: for n <= 5 the output is always 1..=5.
pub fn log_at_least(n: i64, sink: &mut dyn OutputSink) {
    let upper = n.max(5) as u64;
    for i in 1..=upper {
        sink.emit(Emission::Value(i));
    }
}

/// Emits 1..=min(5, n). Bounded by 5, so constant.
///
/// Sizes below 1 emit nothing.
pub fn log_at_most(n: i64, sink: &mut dyn OutputSink) {
    let upper = n.min(5);
    for i in 1..=upper {
        sink.emit(Emission::Value(i as u64));
    }
}

/// Total of all elements. Time O(n), space O(1).
pub fn sum_array(values: &[f64]) -> f64 {
    let mut total = 0.0;
    for v in values {
        total += v;
    }
    total
}

/// New sequence with every element doubled. Time O(n), space O(n).
pub fn double_array(values: &[f64]) -> Vec<f64> {
    let mut doubled = Vec::with_capacity(values.len());
    for v in values {
        doubled.push(2.0 * v);
    }
    doubled
}
