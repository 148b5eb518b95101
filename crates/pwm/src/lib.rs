#![no_std]
#![forbid(unsafe_code)]

//! # pwm
//!
//! Drives one timer channel as an edge-aligned, up-counting PWM output.
//!
//! The carrier is fixed at setup by a validated [`PwmConfig`]:
//! `carrier = input_clock / (prescaler * period)`. The duty cycle is the only
//! runtime knob; each [`PwmDriver::set_duty_cycle`] call recomputes the
//! compare threshold as `round(period * percent / 100)`.
//!
//! With the counter running `0..=period - 1` and the channel in PWM mode 1,
//! 0% writes a compare of 0 (never active) and 100% writes a compare of
//! `period` (always active, no one-count gap).

pub mod config;
pub mod driver;
pub mod duty;

pub use config::{PwmConfig, FREQUENCY_TOLERANCE_PPM, MAX_PRESCALER};
pub use driver::PwmDriver;
pub use duty::DutyCycle;

#[cfg(test)]
extern crate std;

#[cfg(test)]
mod tests;
