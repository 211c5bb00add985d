//! Simple-operation counts for each reference function
//!
//! Wall-clock time varies between machines and between runs; the number of
//! simple operations (assignments, comparisons, arithmetic) does not. Counting
//! rules used throughout:
//! - a loop costs one assignment to start, then per iteration one comparison
//!   and two operations for the increment (`i += 1` is an add and an assign)
//! - `total += x` is two operations (add, assign)
//! - an emission counts as one operation
//!
//! All models saturate instead of overflowing.

/// Loop overhead per iteration: compare + increment (add, assign)
const LOOP_STEP: u64 = 3;

/// `let total = 0; for i in 1..=n { total += i }` -> 2 + n * (3 + 2)
pub fn sum_range(n: u64) -> u64 {
    2u64.saturating_add(n.saturating_mul(LOOP_STEP + 2))
}

/// `n * (n + 1) / 2` -> multiply, add, divide
pub fn sum_range_closed_form(_n: u64) -> u64 {
    3
}

/// Two loops of n emissions each, plus one setup per loop
pub fn count_up_and_down(n: u64) -> u64 {
    let per_loop = n.saturating_mul(LOOP_STEP + 1);
    per_loop.saturating_mul(2).saturating_add(2)
}

/// Outer loop setup, then per outer iteration: loop step, inner setup,
/// and n inner iterations of (loop step + emission)
pub fn print_all_pairs(n: u64) -> u64 {
    let inner = n.saturating_mul(LOOP_STEP + 1);
    let per_outer = (LOOP_STEP + 1).saturating_add(inner);
    1u64.saturating_add(n.saturating_mul(per_outer))
}

/// Loop over 1..=max(5, n) emitting each value
pub fn log_at_least(n: u64) -> u64 {
    1u64.saturating_add(n.max(5).saturating_mul(LOOP_STEP + 1))
}

/// Loop over 1..=min(5, n) emitting each value
pub fn log_at_most(n: u64) -> u64 {
    1 + n.min(5) * (LOOP_STEP + 1)
}

/// Same shape as `sum_range`, over the element count
pub fn sum_array(len: u64) -> u64 {
    sum_range(len)
}

/// One allocation, one loop setup, per element: loop step and a multiply-push
pub fn double_array(len: u64) -> u64 {
    2u64.saturating_add(len.saturating_mul(LOOP_STEP + 2))
}
