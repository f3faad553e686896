use std::cell::RefCell;
use std::time::Duration;

use chrono::{DateTime, FixedOffset, Local};
use futures::future::{self, FutureExt, LocalBoxFuture};
use gloo_timers::future::TimeoutFuture;

/// Wall-clock time and timers for the simulated backend.
pub trait Clock {
    /// Current local time, offset included.
    fn now(&self) -> DateTime<FixedOffset>;

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

/// Browser time source backed by `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).boxed_local()
    }
}

/// Frozen clock whose sleeps finish immediately. Records every requested delay.
#[derive(Debug)]
pub struct FixedClock {
    now: DateTime<FixedOffset>,
    delays: RefCell<Vec<Duration>>,
}

impl FixedClock {
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self {
            now,
            delays: RefCell::new(Vec::new()),
        }
    }

    pub fn delays(&self) -> Vec<Duration> {
        self.delays.borrow().clone()
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.now
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        self.delays.borrow_mut().push(duration);
        future::ready(()).boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_records_delays() {
        let now = FixedOffset::east_opt(8 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 1, 7, 30, 0)
            .unwrap();
        let clock = FixedClock::new(now);

        futures::executor::block_on(clock.sleep(Duration::from_millis(500)));
        futures::executor::block_on(clock.sleep(Duration::from_millis(300)));

        assert_eq!(clock.now(), now);
        assert_eq!(
            clock.delays(),
            vec![Duration::from_millis(500), Duration::from_millis(300)]
        );
    }
}
