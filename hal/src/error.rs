//! Common error types for HAL operations

use core::fmt;

/// HAL operation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalError {
    /// Invalid parameter provided
    InvalidParameter,
    /// Operation not supported by this implementation
    NotSupported,
    /// Hardware error occurred
    HardwareError,
    /// Configuration error
    ConfigurationError,
}

impl fmt::Display for HalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter => write!(f, "invalid parameter"),
            Self::NotSupported => write!(f, "operation not supported"),
            Self::HardwareError => write!(f, "hardware error"),
            Self::ConfigurationError => write!(f, "configuration error"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HalError {}

#[cfg(feature = "defmt")]
impl defmt::Format for HalError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidParameter => defmt::write!(fmt, "InvalidParameter"),
            Self::NotSupported => defmt::write!(fmt, "NotSupported"),
            Self::HardwareError => defmt::write!(fmt, "HardwareError"),
            Self::ConfigurationError => defmt::write!(fmt, "ConfigurationError"),
        }
    }
}

impl embedded_hal::pwm::Error for HalError {
    fn kind(&self) -> embedded_hal::pwm::ErrorKind {
        embedded_hal::pwm::ErrorKind::Other
    }
}

/// Result type for HAL operations
pub type HalResult<T> = Result<T, HalError>;

/// Rejections raised while validating clock-derived configuration.
///
/// These are produced once, at construction time; nothing at runtime
/// re-checks a configuration that was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A clock or requested frequency was zero
    ZeroFrequency,
    /// Requested tick rate is higher than the clock feeding it
    TickFasterThanClock,
    /// Reload value does not fit the tick source's reload register
    ReloadOutOfRange { reload: u32 },
    /// Prescaler outside `1..=65536`
    PrescalerOutOfRange { prescaler: u32 },
    /// PWM period of zero counts
    ZeroPeriod,
    /// `prescaler * period` exceeds the input clock
    CarrierBelowOneHertz,
    /// Achievable frequency is too far from the requested one
    FrequencyOutOfTolerance { requested_hz: u32, actual_hz: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroFrequency => write!(f, "frequency must be non-zero"),
            Self::TickFasterThanClock => write!(f, "tick frequency exceeds core clock"),
            Self::ReloadOutOfRange { reload } => {
                write!(f, "reload value {} out of range", reload)
            }
            Self::PrescalerOutOfRange { prescaler } => {
                write!(f, "prescaler {} out of range", prescaler)
            }
            Self::ZeroPeriod => write!(f, "period must be non-zero"),
            Self::CarrierBelowOneHertz => write!(f, "carrier frequency below 1 Hz"),
            Self::FrequencyOutOfTolerance {
                requested_hz,
                actual_hz,
            } => write!(
                f,
                "requested {} Hz but configuration yields {} Hz",
                requested_hz, actual_hz
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::ZeroFrequency => defmt::write!(fmt, "ZeroFrequency"),
            Self::TickFasterThanClock => defmt::write!(fmt, "TickFasterThanClock"),
            Self::ReloadOutOfRange { reload } => {
                defmt::write!(fmt, "ReloadOutOfRange({})", reload)
            }
            Self::PrescalerOutOfRange { prescaler } => {
                defmt::write!(fmt, "PrescalerOutOfRange({})", prescaler)
            }
            Self::ZeroPeriod => defmt::write!(fmt, "ZeroPeriod"),
            Self::CarrierBelowOneHertz => defmt::write!(fmt, "CarrierBelowOneHertz"),
            Self::FrequencyOutOfTolerance {
                requested_hz,
                actual_hz,
            } => defmt::write!(
                fmt,
                "FrequencyOutOfTolerance({} -> {})",
                requested_hz,
                actual_hz
            ),
        }
    }
}

impl From<ConfigError> for HalError {
    fn from(_: ConfigError) -> Self {
        Self::ConfigurationError
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_collapse_to_configuration_error() {
        let err: HalError = ConfigError::ZeroPeriod.into();
        assert_eq!(err, HalError::ConfigurationError);

        let err: HalError = ConfigError::ReloadOutOfRange { reload: 1 << 24 }.into();
        assert_eq!(err, HalError::ConfigurationError);
    }

    #[test]
    fn pwm_error_kind_is_other() {
        use embedded_hal::pwm::{Error, ErrorKind};
        assert_eq!(HalError::HardwareError.kind(), ErrorKind::Other);
    }
}
