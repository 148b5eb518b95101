//! Tick source and PWM timer abstraction
//!
//! Both traits take raw register values. Frequency math lives in the driver
//! crates so that every back-end sees exactly the numbers the driver
//! computed.

use crate::error::HalResult;

/// Counting direction and alignment of a general-purpose timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterMode {
    /// Edge-aligned, counting up from 0 to the auto-reload value
    EdgeAlignedUp,
    /// Edge-aligned, counting down from the auto-reload value to 0
    EdgeAlignedDown,
    /// Center-aligned (up then down)
    CenterAligned,
}

/// Output compare behaviour of a timer channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputCompareMode {
    /// Compare match has no effect on the output
    Frozen,
    /// Active while `count < compare`, inactive otherwise (up-counting)
    PwmMode1,
    /// Inactive while `count < compare`, active otherwise (up-counting)
    PwmMode2,
}

#[cfg(feature = "defmt")]
impl defmt::Format for CounterMode {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::EdgeAlignedUp => defmt::write!(fmt, "EdgeAlignedUp"),
            Self::EdgeAlignedDown => defmt::write!(fmt, "EdgeAlignedDown"),
            Self::CenterAligned => defmt::write!(fmt, "CenterAligned"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for OutputCompareMode {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Frozen => defmt::write!(fmt, "Frozen"),
            Self::PwmMode1 => defmt::write!(fmt, "PwmMode1"),
            Self::PwmMode2 => defmt::write!(fmt, "PwmMode2"),
        }
    }
}

/// Fixed-period interrupt source driving the tick counter (e.g. SysTick)
pub trait TickSource {
    /// Program the reload register; the interrupt fires every `reload + 1`
    /// source clock cycles
    fn set_reload(&mut self, reload: u32) -> HalResult<()>;

    /// Enable the interrupt raised when the counter wraps
    fn enable_interrupt(&mut self) -> HalResult<()>;

    /// Start counting
    fn enable_counter(&mut self) -> HalResult<()>;
}

/// Single-channel PWM timer
pub trait PwmTimer {
    /// Select counting direction and alignment
    fn set_counter_mode(&mut self, mode: CounterMode) -> HalResult<()>;

    /// Select the compare output behaviour of the channel
    fn set_output_compare_mode(&mut self, mode: OutputCompareMode) -> HalResult<()>;

    /// Start the counter
    fn enable_counter(&mut self) -> HalResult<()>;

    /// Route the compare result to the output pin
    fn enable_output(&mut self) -> HalResult<()>;

    /// Write the prescaler register (divider minus one)
    fn set_prescaler(&mut self, value: u32) -> HalResult<()>;

    /// Write the auto-reload register (period minus one)
    fn set_auto_reload(&mut self, value: u32) -> HalResult<()>;

    /// Write the compare register. Takes effect at the next update event.
    fn set_compare(&mut self, value: u32) -> HalResult<()>;
}
