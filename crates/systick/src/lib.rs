#![no_std]
#![forbid(unsafe_code)]

//! # systick
//!
//! A free-running tick counter advanced by a fixed-period hardware interrupt.
//!
//! The counter is 64 bits wide, wider than the native atomic width of the
//! Cortex-M cores this targets, so every access goes through a
//! [`critical_section`]. A reader can never observe a half-updated value.
//!
//! ```ignore
//! let config = TickConfig::new(84_000_000, 1_000)?;
//! systick::setup(&mut board_systick, &config)?;
//!
//! #[exception]
//! fn SysTick() {
//!     systick::on_tick_interrupt();
//! }
//! ```

pub mod config;
pub mod counter;

pub use config::{TickConfig, FREQUENCY_TOLERANCE_PPM, MAX_RELOAD};
pub use counter::{TickCounter, Ticks};

use hal::{HalResult, TickSource};

#[cfg(test)]
extern crate std;

#[cfg(test)]
mod tests;

/// Process-wide counter advanced by [`on_tick_interrupt`].
pub static TICKS: TickCounter = TickCounter::new();

/// Programs `source` to interrupt at `config`'s tick rate, unmasks the
/// interrupt and starts the counter.
///
/// Ticks only accumulate once interrupts are globally enabled, which is the
/// caller's job.
pub fn setup<S: TickSource>(source: &mut S, config: &TickConfig) -> HalResult<()> {
    source.set_reload(config.reload())?;
    source.enable_interrupt()?;
    source.enable_counter()?;

    log::debug!(
        "tick source running: {} Hz from {} Hz core clock (reload {})",
        config.actual_tick_hz(),
        config.core_clock_hz(),
        config.reload()
    );
    Ok(())
}

/// Interrupt-time callback; advances [`TICKS`] by exactly one.
#[inline]
pub fn on_tick_interrupt() {
    TICKS.increment();
}

/// Current value of [`TICKS`].
#[inline]
pub fn get_ticks() -> Ticks {
    TICKS.get()
}
