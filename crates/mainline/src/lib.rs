#![no_std]
#![forbid(unsafe_code)]

//! # mainline
//!
//! Building blocks for a polling super-loop that does time-sliced work off
//! the tick counter instead of busy-waiting:
//!
//! ```ignore
//! let period = tick_config.ticks_for_millis(BLINK_PERIOD_MS);
//! let mut blink = Blinker::new(led, period, systick::get_ticks())?;
//! loop {
//!     blink.poll(systick::get_ticks())?;
//! }
//! ```
//!
//! Every helper takes the current time as an argument, so the same code runs
//! against the hardware counter or a simulated clock.

pub mod blink;
pub mod fade;
pub mod periodic;
pub mod reference;

pub use blink::Blinker;
pub use fade::FadeRamp;
pub use periodic::Periodic;

#[cfg(test)]
mod tests;
