//! Tick time and the interrupt-shared counter

use core::cell::Cell;
use core::fmt;

use critical_section::Mutex;

/// A point in tick time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticks(u64);

impl Ticks {
    /// Zero tick (power-on value)
    pub const ZERO: Self = Self(0);

    /// Maximum tick value
    pub const MAX: Self = Self(u64::MAX);

    /// Create a new tick count
    pub const fn new(ticks: u64) -> Self {
        Self(ticks)
    }

    /// Get the raw tick value
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Ticks elapsed since `previous`, correct across one wraparound
    pub const fn elapsed_since(self, previous: Ticks) -> u64 {
        self.0.wrapping_sub(previous.0)
    }

    /// This tick advanced by `ticks`, wrapping at the integer width
    pub const fn wrapping_add(self, ticks: u64) -> Self {
        Self(self.0.wrapping_add(ticks))
    }
}

impl fmt::Display for Ticks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tick:{}", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Ticks {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "tick:{}", self.0);
    }
}

/// Free-running counter shared between one interrupt handler and the
/// mainline.
///
/// Both [`increment`](Self::increment) and [`get`](Self::get) run inside a
/// critical section, so a read concurrent with an increment returns either
/// the old or the new count and nothing in between.
pub struct TickCounter {
    ticks: Mutex<Cell<u64>>,
}

impl TickCounter {
    /// A counter at zero.
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    /// A counter preset to `ticks`; useful to exercise wraparound.
    pub const fn starting_at(ticks: u64) -> Self {
        Self {
            ticks: Mutex::new(Cell::new(ticks)),
        }
    }

    /// Advance by one, wrapping at `u64::MAX`.
    #[inline]
    pub fn increment(&self) {
        critical_section::with(|cs| {
            let ticks = self.ticks.borrow(cs);
            ticks.set(ticks.get().wrapping_add(1));
        });
    }

    /// Snapshot of the current count.
    #[inline]
    pub fn get(&self) -> Ticks {
        critical_section::with(|cs| Ticks(self.ticks.borrow(cs).get()))
    }
}

impl Default for TickCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TickCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TickCounter").field(&self.get().raw()).finish()
    }
}
