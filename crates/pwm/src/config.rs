//! PWM carrier configuration

use core::fmt;

use hal::ConfigError;

/// Largest prescaler the 16-bit prescaler register can express
pub const MAX_PRESCALER: u32 = 1 << 16;

/// Largest accepted deviation between requested and achieved carrier, in
/// parts per million
pub const FREQUENCY_TOLERANCE_PPM: u64 = 1_000;

/// Validated carrier configuration.
///
/// `prescaler` and `period` are divider values, not register values; the
/// registers receive each minus one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PwmConfig {
    input_clock_hz: u32,
    prescaler: u32,
    period: u32,
}

impl PwmConfig {
    /// Checks an explicit prescaler/period pair against `input_clock_hz`.
    pub const fn new(input_clock_hz: u32, prescaler: u32, period: u32) -> Result<Self, ConfigError> {
        if input_clock_hz == 0 {
            return Err(ConfigError::ZeroFrequency);
        }
        if prescaler == 0 || prescaler > MAX_PRESCALER {
            return Err(ConfigError::PrescalerOutOfRange { prescaler });
        }
        if period == 0 {
            return Err(ConfigError::ZeroPeriod);
        }
        if prescaler as u64 * period as u64 > input_clock_hz as u64 {
            return Err(ConfigError::CarrierBelowOneHertz);
        }

        Ok(Self {
            input_clock_hz,
            prescaler,
            period,
        })
    }

    /// Picks the prescaler that yields `carrier_hz` with `resolution` counts
    /// per period, rejecting it if the achievable carrier is off by more
    /// than [`FREQUENCY_TOLERANCE_PPM`].
    pub const fn from_frequency(
        input_clock_hz: u32,
        carrier_hz: u32,
        resolution: u32,
    ) -> Result<Self, ConfigError> {
        if input_clock_hz == 0 || carrier_hz == 0 {
            return Err(ConfigError::ZeroFrequency);
        }
        if resolution == 0 {
            return Err(ConfigError::ZeroPeriod);
        }

        let counts_per_second = carrier_hz as u64 * resolution as u64;
        if counts_per_second > input_clock_hz as u64 {
            return Err(ConfigError::CarrierBelowOneHertz);
        }

        // Round to the nearest divider; truncation would always run fast
        let clock = input_clock_hz as u64;
        let prescaler = (clock + counts_per_second / 2) / counts_per_second;
        if prescaler > MAX_PRESCALER as u64 {
            return Err(ConfigError::PrescalerOutOfRange {
                prescaler: if prescaler > u32::MAX as u64 {
                    u32::MAX
                } else {
                    prescaler as u32
                },
            });
        }

        let achieved_counts = prescaler * resolution as u64;
        let deviation = clock.abs_diff(carrier_hz as u64 * achieved_counts);
        if deviation * 1_000_000 > clock * FREQUENCY_TOLERANCE_PPM {
            return Err(ConfigError::FrequencyOutOfTolerance {
                requested_hz: carrier_hz,
                actual_hz: (clock / achieved_counts) as u32,
            });
        }

        Self::new(input_clock_hz, prescaler as u32, resolution)
    }

    pub const fn input_clock_hz(&self) -> u32 {
        self.input_clock_hz
    }

    pub const fn prescaler(&self) -> u32 {
        self.prescaler
    }

    /// Counts per carrier period
    pub const fn period(&self) -> u32 {
        self.period
    }

    /// Value for the prescaler register
    pub const fn prescaler_register(&self) -> u32 {
        self.prescaler - 1
    }

    /// Value for the auto-reload register
    pub const fn auto_reload_register(&self) -> u32 {
        self.period - 1
    }

    /// Carrier frequency the timer produces (truncated to whole hertz)
    pub const fn carrier_hz(&self) -> u32 {
        (self.input_clock_hz as u64 / (self.prescaler as u64 * self.period as u64)) as u32
    }

    /// Duty-cycle granularity in percent (0.1 for a 1000-count period)
    pub fn resolution_percent(&self) -> f32 {
        100.0 / self.period as f32
    }
}

impl fmt::Display for PwmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}Hz carrier ({}Hz / {} / {})",
            self.carrier_hz(),
            self.input_clock_hz,
            self.prescaler,
            self.period
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PwmConfig {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "{}Hz carrier ({}Hz / {} / {})",
            self.carrier_hz(),
            self.input_clock_hz,
            self.prescaler,
            self.period
        );
    }
}
