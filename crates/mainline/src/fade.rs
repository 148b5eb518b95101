//! Brightness ramp on a PWM channel

use hal::{HalResult, PwmTimer};
use pwm::PwmDriver;
use systick::Ticks;

use crate::periodic::Periodic;

/// Ramps the duty cycle up by a fixed step each period, wrapping from
/// above 100% back to 0%.
#[derive(Debug)]
pub struct FadeRamp<T: PwmTimer> {
    driver: PwmDriver<T>,
    timer: Periodic,
    step: f32,
    duty: f32,
}

impl<T: PwmTimer> FadeRamp<T> {
    /// Starts the ramp at 0% and writes that to the driver.
    pub fn new(mut driver: PwmDriver<T>, step: f32, period: u64, now: Ticks) -> HalResult<Self> {
        driver.set_duty_cycle(0.0)?;
        Ok(Self {
            driver,
            timer: Periodic::new(period, now),
            step,
            duty: 0.0,
        })
    }

    /// Advances the ramp if the period expired. Returns whether it did.
    pub fn poll(&mut self, now: Ticks) -> HalResult<bool> {
        if !self.timer.poll(now) {
            return Ok(false);
        }

        self.duty += self.step;
        if self.duty > 100.0 {
            log::debug!("fade ramp wrapped back to 0%");
            self.duty = 0.0;
        }
        self.driver.set_duty_cycle(self.duty)?;
        Ok(true)
    }

    /// Duty cycle most recently written, in percent
    pub fn duty(&self) -> f32 {
        self.duty
    }

    pub fn driver(&self) -> &PwmDriver<T> {
        &self.driver
    }

    pub fn free(self) -> PwmDriver<T> {
        self.driver
    }
}
