//! PWM timer driver

use embedded_hal::pwm::{ErrorType, SetDutyCycle};
use hal::{CounterMode, HalError, HalResult, OutputCompareMode, PwmTimer};

use crate::config::PwmConfig;
use crate::duty::DutyCycle;

/// One PWM channel on a timer configured for a fixed carrier.
#[derive(Debug)]
pub struct PwmDriver<T: PwmTimer> {
    timer: T,
    config: PwmConfig,
    compare: u32,
}

impl<T: PwmTimer> PwmDriver<T> {
    /// Puts `timer` into edge-aligned up-counting PWM mode 1, starts it and
    /// programs the carrier described by `config`.
    ///
    /// The output is routed to the pin only once the board has selected the
    /// timer's alternate function for it.
    pub fn setup(mut timer: T, config: PwmConfig) -> HalResult<Self> {
        timer.set_counter_mode(CounterMode::EdgeAlignedUp)?;
        timer.set_output_compare_mode(OutputCompareMode::PwmMode1)?;
        timer.enable_counter()?;
        timer.enable_output()?;
        timer.set_prescaler(config.prescaler_register())?;
        timer.set_auto_reload(config.auto_reload_register())?;

        log::debug!(
            "pwm carrier {} Hz (psc {}, arr {})",
            config.carrier_hz(),
            config.prescaler_register(),
            config.auto_reload_register()
        );

        Ok(Self {
            timer,
            config,
            compare: 0,
        })
    }

    /// Sets the duty cycle in percent.
    ///
    /// Inputs outside `[0, 100]` saturate to the nearest bound and NaN is
    /// treated as 0%. The new threshold takes effect at the next carrier
    /// period boundary.
    pub fn set_duty_cycle(&mut self, percent: f32) -> HalResult<()> {
        let duty = match DutyCycle::new(percent) {
            Some(duty) => duty,
            None => {
                let saturated = DutyCycle::from_percent(percent);
                log::warn!("duty cycle {} out of range, using {}", percent, saturated);
                saturated
            }
        };
        self.write_compare(duty.compare_for(self.config.period()))
    }

    /// The carrier configuration programmed at setup
    pub fn config(&self) -> &PwmConfig {
        &self.config
    }

    /// The compare value most recently written
    pub fn compare(&self) -> u32 {
        self.compare
    }

    /// Releases the timer
    pub fn free(self) -> T {
        self.timer
    }

    fn write_compare(&mut self, compare: u32) -> HalResult<()> {
        self.timer.set_compare(compare)?;
        self.compare = compare;
        log::trace!("pwm compare <- {}", compare);
        Ok(())
    }
}

impl<T: PwmTimer> ErrorType for PwmDriver<T> {
    type Error = HalError;
}

impl<T: PwmTimer> SetDutyCycle for PwmDriver<T> {
    fn max_duty_cycle(&self) -> u16 {
        u16::try_from(self.config.period()).unwrap_or(u16::MAX)
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        let max = self.max_duty_cycle();
        if duty > max {
            return Err(HalError::InvalidParameter);
        }
        let period = u64::from(self.config.period());
        let compare = u64::from(duty) * period / u64::from(max);
        // compare <= period, which is a u32
        self.write_compare(compare as u32)
    }
}
