//! Elapsed-time check with re-arm

use systick::Ticks;

/// Fires once every `period` ticks when polled.
///
/// On expiry the reference time moves to the poll time, not to the ideal
/// deadline, so a late poll delays every later expiry by the same amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Periodic {
    period: u64,
    start: Ticks,
}

impl Periodic {
    pub const fn new(period: u64, now: Ticks) -> Self {
        Self { period, start: now }
    }

    pub const fn period(&self) -> u64 {
        self.period
    }

    /// Reference time of the current period
    pub const fn start(&self) -> Ticks {
        self.start
    }

    /// Restart the current period at `now`
    pub fn reset(&mut self, now: Ticks) {
        self.start = now;
    }

    /// `true` if at least `period` ticks passed since the reference time,
    /// in which case the reference time becomes `now`.
    pub fn poll(&mut self, now: Ticks) -> bool {
        if now.elapsed_since(self.start) >= self.period {
            self.start = now;
            true
        } else {
            false
        }
    }
}
