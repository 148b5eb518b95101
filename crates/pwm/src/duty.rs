//! Duty-cycle percentage and its mapping onto a compare threshold

use core::fmt;

/// Fraction of each carrier period the output is active, in percent.
///
/// Always within `[0, 100]`; construction either checks or saturates.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DutyCycle(f32);

impl DutyCycle {
    /// Output never active
    pub const ZERO: Self = Self(0.0);

    /// Output always active
    pub const FULL: Self = Self(100.0);

    /// `Some` if `percent` is within `[0, 100]`.
    pub fn new(percent: f32) -> Option<Self> {
        if (0.0..=100.0).contains(&percent) {
            Some(Self(percent))
        } else {
            None
        }
    }

    /// Saturating constructor: below 0 (and NaN) becomes 0%, above 100
    /// becomes 100%.
    pub fn from_percent(percent: f32) -> Self {
        if percent.is_nan() || percent <= 0.0 {
            Self::ZERO
        } else if percent >= 100.0 {
            Self::FULL
        } else {
            Self(percent)
        }
    }

    pub fn percent(self) -> f32 {
        self.0
    }

    /// Compare threshold for a timer with `period` counts per carrier
    /// period: `round(period * percent / 100)`, halves rounding up.
    ///
    /// The result is always within `[0, period]`.
    pub fn compare_for(self, period: u32) -> u32 {
        let exact = f64::from(period) * f64::from(self.0) / 100.0;
        // exact >= 0, so adding one half and truncating rounds to nearest
        let rounded = (exact + 0.5) as u32;
        rounded.min(period)
    }
}

impl Default for DutyCycle {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for DutyCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DutyCycle {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}%", self.0);
    }
}
