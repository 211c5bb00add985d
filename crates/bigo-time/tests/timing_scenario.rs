//! End-to-end timing runs on the real monotonic clock
//!
//! Durations are printed, not asserted: wall-clock growth depends on the host.

use bigo_core::{sum_range, sum_range_closed_form, Catalog, Output, VecSink};
use bigo_time::{input_of_size, timing_series, TimingConfig, TimingHarness};

#[test]
fn closed_form_over_walkthrough_sizes() {
    let harness = TimingHarness::with_config(TimingConfig::quiet());
    for n in [1_000i64, 1_000_000, 1_000_000_000] {
        let (sum, result) = harness.measure_with_output(sum_range_closed_form, n).unwrap();
        let n = n as u128;
        assert_eq!(sum, n * (n + 1) / 2);
        assert!(result.end >= result.start);
        println!("closed form n={} {}", n, result);
    }
}

#[test]
fn loop_over_small_sizes() {
    let harness = TimingHarness::with_config(TimingConfig::quiet());
    for n in [1_000i64, 10_000, 100_000] {
        let (sum, result) = harness.measure_with_output(sum_range, n).unwrap();
        assert_eq!(sum, sum_range_closed_form(n).unwrap());
        println!("loop n={} {}", n, result);
    }
}

#[test]
fn every_catalog_entry_can_be_timed() {
    let harness = TimingHarness::with_config(TimingConfig::quiet());
    for entry in Catalog::standard().iter() {
        let samples = timing_series(&harness, entry, &[8, 64], |n| {
            input_of_size(entry.input_kind(), n)
        })
        .unwrap();
        assert_eq!(samples.len(), 2);
        assert!(samples.iter().all(|s| s.cost >= 0.0));
    }
}

#[test]
fn timed_call_output_matches_untimed_call() {
    let harness = TimingHarness::with_config(TimingConfig::quiet());
    let entry = Catalog::standard().get("double_array").unwrap();
    let input = input_of_size(entry.input_kind(), 5);

    let (timed, _) = harness.measure_function(entry, &input, &mut VecSink::new()).unwrap();
    let untimed = entry.call(&input, &mut VecSink::new()).unwrap();
    assert_eq!(timed, untimed);
    assert_eq!(timed, Output::Numbers(vec![0.0, 2.0, 4.0, 6.0, 8.0]));
}
