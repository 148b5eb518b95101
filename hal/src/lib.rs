//! Hardware Abstraction Layer (HAL) for the tick and PWM drivers
//!
//! This crate provides the vendor-agnostic traits the drivers are written
//! against. A board crate supplies one implementation per chip family; the
//! `mock` feature supplies in-memory peripherals so the frequency and
//! duty-cycle math can be exercised on the host.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod gpio;
pub mod timer;

#[cfg(feature = "mock")]
pub mod mock;

// Re-export commonly used types
pub use error::{ConfigError, HalError, HalResult};
pub use gpio::{GpioPin, Level, PinMode};
pub use timer::{CounterMode, OutputCompareMode, PwmTimer, TickSource};
