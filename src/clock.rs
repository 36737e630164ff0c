use std::time::{Duration, Instant};

/// Time source for the backend polling loop. Injected so tests drive the
/// loop with a fake clock instead of sleeping for real.
pub trait Clock {
    fn now(&self) -> Instant;
    fn sleep(&self, dur: Duration);
}

/// Wall-clock time and real sleeping.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, dur: Duration) {
        std::thread::sleep(dur);
    }
}
