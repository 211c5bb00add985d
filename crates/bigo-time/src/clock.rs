//! Clock sources for the timing harness

use std::fmt;
use std::ops::Sub;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use bigo_core::{BigOError, BigOResult};
use parking_lot::Mutex;

/// A point in time, in nanoseconds since the clock's own origin
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(pub u64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0);

    #[inline]
    pub fn from_nanos(nanos: u64) -> Self {
        Timestamp(nanos)
    }

    #[inline]
    pub fn from_duration(d: Duration) -> Self {
        Timestamp(d.as_nanos().min(u64::MAX as u128) as u64)
    }

    #[inline]
    pub fn as_nanos(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / 1_000_000_000.0
    }

    #[inline]
    pub fn saturating_add(self, d: Duration) -> Self {
        Timestamp(self.0.saturating_add(Timestamp::from_duration(d).0))
    }
}

impl Sub<Timestamp> for Timestamp {
    type Output = Duration;

    /// Never negative: an earlier `self` yields zero
    #[inline]
    fn sub(self, rhs: Timestamp) -> Self::Output {
        Duration::from_nanos(self.0.saturating_sub(rhs.0))
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t({:.6}ms)", self.0 as f64 / 1_000_000.0)
    }
}

/// Source of timestamps
pub trait Clock {
    /// Current time, or `MeasurementUnavailable` if the source cannot answer
    fn now(&self) -> BigOResult<Timestamp>;

    /// Short label for logs
    fn name(&self) -> &'static str;
}

/// Process-monotonic clock backed by `Instant`
/// INVARIANT: successive readings never decrease
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Create a clock whose origin is now
    pub fn new() -> Self {
        MonotonicClock {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> BigOResult<Timestamp> {
        Ok(Timestamp::from_duration(self.origin.elapsed()))
    }

    fn name(&self) -> &'static str {
        "monotonic"
    }
}

/// Wall clock measured from the Unix epoch
///
/// Not monotonic: a system time adjustment between two readings shows up in
/// the elapsed time (clamped at zero).
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> BigOResult<Timestamp> {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(Timestamp::from_duration)
            .map_err(|e| {
                BigOError::MeasurementUnavailable(format!("system clock before epoch: {}", e))
            })
    }

    fn name(&self) -> &'static str {
        "system"
    }
}

struct ManualState {
    now: Timestamp,
    step: Duration,
    available: bool,
}

/// Deterministic clock for tests
///
/// Every reading advances the clock by `step` after returning, so a
/// start/end pair is exactly `step` apart unless the test advances it further.
pub struct ManualClock {
    state: Mutex<ManualState>,
}

impl ManualClock {
    /// Create a clock at zero that only moves when advanced
    pub fn new() -> Self {
        Self::with_step(Duration::ZERO)
    }

    /// Clock that auto-advances by `step` on every reading
    pub fn with_step(step: Duration) -> Self {
        ManualClock {
            state: Mutex::new(ManualState {
                now: Timestamp::ZERO,
                step,
                available: true,
            }),
        }
    }

    /// Move the clock forward
    pub fn advance(&self, d: Duration) {
        let mut state = self.state.lock();
        state.now = state.now.saturating_add(d);
    }

    /// Make subsequent readings fail (or succeed again)
    pub fn set_available(&self, available: bool) {
        self.state.lock().available = available;
    }

    /// Current reading without advancing
    pub fn peek(&self) -> Timestamp {
        self.state.lock().now
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> BigOResult<Timestamp> {
        let mut state = self.state.lock();
        if !state.available {
            return Err(BigOError::MeasurementUnavailable(
                "manual clock disabled".to_string(),
            ));
        }
        let reading = state.now;
        state.now = state.now.saturating_add(state.step);
        Ok(reading)
    }

    fn name(&self) -> &'static str {
        "manual"
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> BigOResult<Timestamp> {
        (**self).now()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_monotonic_clock_advances() {
        let clock = MonotonicClock::new();

        let t1 = clock.now().unwrap();
        std::thread::sleep(Duration::from_millis(10));
        let t2 = clock.now().unwrap();

        assert!(t2 > t1);
        assert!(t2 - t1 >= Duration::from_millis(10));
    }

    #[test]
    fn test_system_clock_is_after_epoch() {
        let t = SystemClock.now().unwrap();
        assert!(t.as_secs_f64() > 0.0);
    }

    #[test]
    fn test_timestamp_sub_saturates() {
        let early = Timestamp::from_nanos(100);
        let late = Timestamp::from_nanos(400);
        assert_eq!(late - early, Duration::from_nanos(300));
        assert_eq!(early - late, Duration::ZERO);
    }

    #[test]
    fn test_manual_clock_steps() {
        let clock = ManualClock::with_step(Duration::from_micros(5));
        let a = clock.now().unwrap();
        let b = clock.now().unwrap();
        assert_eq!(b - a, Duration::from_micros(5));

        clock.advance(Duration::from_secs(1));
        assert_eq!(clock.peek() - b, Duration::from_secs(1) + Duration::from_micros(5));
    }

    proptest! {
        #[test]
        fn prop_difference_never_negative(a in any::<u64>(), b in any::<u64>()) {
            let (a, b) = (Timestamp::from_nanos(a), Timestamp::from_nanos(b));
            let d = b - a;
            if b >= a {
                prop_assert_eq!(d.as_nanos(), (b.as_nanos() - a.as_nanos()) as u128);
            } else {
                prop_assert_eq!(d, Duration::ZERO);
            }
        }

        #[test]
        fn prop_manual_step_is_elapsed(step_ns in 0u64..10_000_000_000) {
            let clock = ManualClock::with_step(Duration::from_nanos(step_ns));
            let start = clock.now().unwrap();
            let end = clock.now().unwrap();
            prop_assert_eq!(end - start, Duration::from_nanos(step_ns));
        }
    }

    #[test]
    fn test_manual_clock_unavailable() {
        let clock = ManualClock::new();
        clock.set_available(false);
        assert!(matches!(clock.now(), Err(BigOError::MeasurementUnavailable(_))));

        clock.set_available(true);
        assert!(clock.now().is_ok());
    }
}
