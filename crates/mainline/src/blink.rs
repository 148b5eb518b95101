//! Tick-driven LED toggling

use hal::{GpioPin, HalResult, PinMode};
use systick::Ticks;

use crate::periodic::Periodic;

/// Toggles a push-pull output once per period.
#[derive(Debug)]
pub struct Blinker<P: GpioPin> {
    pin: P,
    timer: Periodic,
}

impl<P: GpioPin> Blinker<P> {
    /// Switches `pin` to output mode and arms the first period at `now`.
    pub fn new(mut pin: P, period: u64, now: Ticks) -> HalResult<Self> {
        pin.set_mode(PinMode::Output)?;
        Ok(Self {
            pin,
            timer: Periodic::new(period, now),
        })
    }

    /// Toggles the pin if the period expired. Returns whether it did.
    pub fn poll(&mut self, now: Ticks) -> HalResult<bool> {
        if !self.timer.poll(now) {
            return Ok(false);
        }
        self.pin.toggle()?;
        Ok(true)
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }

    pub fn free(self) -> P {
        self.pin
    }
}
