//! Timing harness - one call, two clock readings
//!
//! The harness is strictly sequential: read the clock, invoke, read the clock.
//! There is no retry, warm-up or repetition. Failures from the function or the
//! clock propagate unchanged; the harness never fabricates a duration.

use std::fmt;
use std::hint::black_box;
use std::time::Duration;

use bigo_core::{BigOResult, ExampleFunction, Input, Output, OutputSink};

use crate::{Clock, MonotonicClock, Timestamp};

/// Timing harness configuration
#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// Log each measurement at info level
    pub report: bool,
    /// Label attached to logged measurements of anonymous callables
    pub label: Option<String>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig {
            report: true,
            label: None,
        }
    }
}

impl TimingConfig {
    /// No logging; for sweeps where only the returned results matter
    pub fn quiet() -> Self {
        TimingConfig {
            report: false,
            label: None,
        }
    }

    /// Attach a label to logged measurements
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Outcome of a single measurement
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimingResult {
    pub start: Timestamp,
    pub end: Timestamp,
    /// end - start, never negative
    pub elapsed: Duration,
}

impl TimingResult {
    /// Build from two readings; elapsed clamps at zero
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        TimingResult {
            start,
            end,
            elapsed: end - start,
        }
    }

    /// Elapsed time as fractional seconds
    #[inline]
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

impl fmt::Display for TimingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Time elapsed: {:.9} seconds", self.elapsed_seconds())
    }
}

/// Measures wall-clock duration of single invocations
pub struct TimingHarness<C: Clock = MonotonicClock> {
    clock: C,
    config: TimingConfig,
}

impl TimingHarness<MonotonicClock> {
    /// Harness on the monotonic clock with default configuration
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock::new(), TimingConfig::default())
    }

    /// Harness on the monotonic clock with custom configuration
    pub fn with_config(config: TimingConfig) -> Self {
        Self::with_clock(MonotonicClock::new(), config)
    }
}

impl Default for TimingHarness<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TimingHarness<C> {
    /// Harness on an arbitrary clock source
    pub fn with_clock(clock: C, config: TimingConfig) -> Self {
        TimingHarness { clock, config }
    }

    /// Time one call of `f(input)`, discarding its output
    pub fn measure<I, O, F>(&self, f: F, input: I) -> BigOResult<TimingResult>
    where
        F: FnOnce(I) -> BigOResult<O>,
    {
        let (output, result) = self.measure_with_output(f, input)?;
        black_box(output);
        Ok(result)
    }

    /// Time one call of `f(input)` and hand back its output as well
    pub fn measure_with_output<I, O, F>(&self, f: F, input: I) -> BigOResult<(O, TimingResult)>
    where
        F: FnOnce(I) -> BigOResult<O>,
    {
        self.run(self.config.label.as_deref(), || f(input))
    }

    /// Time one call of a function that cannot fail, such as `sum_array`
    pub fn measure_infallible<I, O, F>(&self, f: F, input: I) -> BigOResult<TimingResult>
    where
        F: FnOnce(I) -> O,
    {
        self.measure(|i| Ok(f(i)), input)
    }

    /// Time one call of a catalog entry
    pub fn measure_function(
        &self,
        function: &ExampleFunction,
        input: &Input,
        sink: &mut dyn OutputSink,
    ) -> BigOResult<(Output, TimingResult)> {
        self.run(Some(function.name()), || function.call(input, sink))
    }

    fn run<O>(
        &self,
        label: Option<&str>,
        call: impl FnOnce() -> BigOResult<O>,
    ) -> BigOResult<(O, TimingResult)> {
        let start = self.clock.now()?;
        let output = call()?;
        let end = self.clock.now()?;

        let result = TimingResult::new(start, end);
        if self.config.report {
            tracing::info!(
                clock = self.clock.name(),
                label = label.unwrap_or("<anonymous>"),
                elapsed_secs = result.elapsed_seconds(),
                "{}",
                result
            );
        }
        Ok((output, result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ManualClock;
    use bigo_core::{log_at_most, sum_array, sum_range, BigOError, Catalog, VecSink};

    #[test]
    fn test_measure_monotonic_non_negative() {
        let harness = TimingHarness::with_config(TimingConfig::quiet());
        let result = harness.measure(sum_range, 10_000).unwrap();
        assert!(result.end >= result.start);
        assert_eq!(result.elapsed, result.end - result.start);
    }

    #[test]
    fn test_measure_with_manual_clock() {
        let clock = ManualClock::with_step(Duration::from_millis(250));
        let harness = TimingHarness::with_clock(&clock, TimingConfig::quiet());

        let (sum, result) = harness.measure_with_output(sum_range, 10).unwrap();
        assert_eq!(sum, 55);
        assert_eq!(result.elapsed, Duration::from_millis(250));
        assert_eq!(result.elapsed_seconds(), 0.25);
        assert_eq!(result.to_string(), "Time elapsed: 0.250000000 seconds");
    }

    #[test]
    fn test_measure_infallible_functions() {
        let clock = ManualClock::with_step(Duration::from_micros(7));
        let harness = TimingHarness::with_clock(&clock, TimingConfig::quiet());

        let values = vec![1.0, 2.0, 3.0];
        let result = harness.measure_infallible(sum_array, &values[..]).unwrap();
        assert_eq!(result.elapsed, Duration::from_micros(7));

        let mut sink = VecSink::new();
        let result = harness
            .measure_infallible(|n| log_at_most(n, &mut sink), 3)
            .unwrap();
        assert_eq!(result.elapsed, Duration::from_micros(7));
        assert_eq!(sink.values(), vec![1, 2, 3]);
    }

    #[test]
    fn test_function_error_propagates() {
        let harness = TimingHarness::with_config(TimingConfig::quiet());
        let err = harness.measure(sum_range, -5).unwrap_err();
        assert!(matches!(err, BigOError::InvalidInput { function: "sum_range", .. }));
    }

    #[test]
    fn test_unavailable_clock_is_not_faked() {
        let clock = ManualClock::new();
        clock.set_available(false);
        let harness = TimingHarness::with_clock(&clock, TimingConfig::quiet());

        let mut called = false;
        let err = harness
            .measure(
                |n: i64| {
                    called = true;
                    sum_range(n)
                },
                10,
            )
            .unwrap_err();
        assert!(matches!(err, BigOError::MeasurementUnavailable(_)));
        assert!(!called);
    }

    #[test]
    fn test_measure_catalog_entry() {
        let clock = ManualClock::with_step(Duration::from_micros(3));
        let harness = TimingHarness::with_clock(&clock, TimingConfig::default());
        let entry = Catalog::standard().get("count_up_and_down").unwrap();

        let mut sink = VecSink::new();
        let (output, result) = harness.measure_function(entry, &Input::Size(4), &mut sink).unwrap();
        assert_eq!(output, Output::Emitted);
        assert_eq!(sink.values(), vec![0, 1, 2, 3, 3, 2, 1, 0]);
        assert_eq!(result.elapsed, Duration::from_micros(3));
    }

    #[test]
    fn test_reporting_does_not_change_result() {
        let quiet = ManualClock::with_step(Duration::from_nanos(42));
        let loud = ManualClock::with_step(Duration::from_nanos(42));

        let a = TimingHarness::with_clock(&quiet, TimingConfig::quiet())
            .measure(sum_range, 100)
            .unwrap();
        let b = TimingHarness::with_clock(&loud, TimingConfig::default().with_label("sum_range"))
            .measure(sum_range, 100)
            .unwrap();
        assert_eq!(a, b);
    }
}
