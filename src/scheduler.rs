//! Clocks and the fixed-cadence ticker that drives gravity
//!
//! Time is expressed as a `Duration` since an arbitrary origin so that tests
//! can step a [`ManualClock`] instead of waiting on the wall clock.

use std::time::{Duration, Instant};

/// Scheduler cadence used when nothing else is configured
pub const DEFAULT_TICK: Duration = Duration::from_millis(60);

/// A monotonic time source
pub trait Clock {
    /// Time elapsed since the clock's origin
    fn now(&self) -> Duration;
}

/// Wall-clock time since construction
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A clock that only moves when told to
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    now: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now
    }
}

/// Fires at a fixed cadence while running.
///
/// Ticks never overlap: a poll fires at most once no matter how many periods
/// were missed, and the elapsed time it reports covers the whole gap.
#[derive(Debug, Clone)]
pub struct Ticker {
    cadence: Duration,
    /// Time of the last fired tick (or of start); None while stopped
    last: Option<Duration>,
}

impl Ticker {
    /// Panics on a zero cadence.
    pub fn new(cadence: Duration) -> Self {
        assert!(!cadence.is_zero(), "ticker cadence must be non-zero");
        Self {
            cadence,
            last: None,
        }
    }

    pub fn cadence(&self) -> Duration {
        self.cadence
    }

    pub fn is_running(&self) -> bool {
        self.last.is_some()
    }

    /// Start (or re-arm) the ticker; the first tick is due one cadence after `now`
    pub fn start(&mut self, now: Duration) {
        self.last = Some(now);
    }

    pub fn stop(&mut self) {
        self.last = None;
    }

    /// Fire if a tick is due, returning the time since the previous tick
    pub fn poll(&mut self, now: Duration) -> Option<Duration> {
        let last = self.last?;
        let elapsed = now.saturating_sub(last);
        if elapsed < self.cadence {
            return None;
        }
        self.last = Some(now);
        Some(elapsed)
    }

    /// How long until the next tick is due; None while stopped
    pub fn time_until_next(&self, now: Duration) -> Option<Duration> {
        let last = self.last?;
        Some((last + self.cadence).saturating_sub(now))
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(DEFAULT_TICK)
    }
}
