//! In-memory peripherals for host-side tests and simulation
//!
//! The mocks model just enough silicon behaviour to check driver math: the
//! tick source fires once per `reload + 1` clock cycles, and the PWM timer
//! prescales, counts up, and latches its compare register only at the
//! update event.

use heapless::{HistoryBuffer, Vec};

use crate::error::{HalError, HalResult};
use crate::gpio::{GpioPin, Level, PinMode};
use crate::timer::{CounterMode, OutputCompareMode, PwmTimer, TickSource};

/// Number of compare writes remembered by [`MockPwmTimer`]
pub const COMPARE_LOG_CAPACITY: usize = 32;

/// Fake fixed-period interrupt source
#[derive(Debug, Default)]
pub struct MockTickSource {
    reload: Option<u32>,
    interrupt_enabled: bool,
    counter_enabled: bool,
    phase: u64,
}

impl MockTickSource {
    /// Creates a source in its reset state (stopped, interrupt masked).
    pub const fn new() -> Self {
        Self {
            reload: None,
            interrupt_enabled: false,
            counter_enabled: false,
            phase: 0,
        }
    }

    pub fn reload(&self) -> Option<u32> {
        self.reload
    }

    pub fn interrupt_enabled(&self) -> bool {
        self.interrupt_enabled
    }

    pub fn counter_enabled(&self) -> bool {
        self.counter_enabled
    }

    /// Runs the source clock for `cycles` cycles, invoking `on_tick` for
    /// every interrupt that would have fired. Returns the number delivered.
    ///
    /// Partial periods carry over to the next call.
    pub fn advance_cycles<F: FnMut()>(&mut self, cycles: u64, mut on_tick: F) -> u64 {
        let reload = match self.reload {
            Some(reload) if self.counter_enabled && reload > 0 => reload,
            _ => return 0,
        };

        let period = u64::from(reload) + 1;
        let total = self.phase + cycles;
        let wraps = total / period;
        self.phase = total % period;

        if !self.interrupt_enabled {
            return 0;
        }
        for _ in 0..wraps {
            on_tick();
        }
        wraps
    }
}

impl TickSource for MockTickSource {
    fn set_reload(&mut self, reload: u32) -> HalResult<()> {
        self.reload = Some(reload);
        self.phase = 0;
        Ok(())
    }

    fn enable_interrupt(&mut self) -> HalResult<()> {
        self.interrupt_enabled = true;
        Ok(())
    }

    fn enable_counter(&mut self) -> HalResult<()> {
        self.counter_enabled = true;
        Ok(())
    }
}

/// Fake up-counting timer with one preloaded compare channel
#[derive(Debug)]
pub struct MockPwmTimer {
    counter_mode: Option<CounterMode>,
    oc_mode: Option<OutputCompareMode>,
    counter_enabled: bool,
    output_enabled: bool,
    prescaler: u32,
    auto_reload: u32,
    compare_preload: u32,
    compare_active: u32,
    count: u32,
    prescale_phase: u32,
    update_events: u64,
    compare_writes: HistoryBuffer<u32, COMPARE_LOG_CAPACITY>,
}

impl Default for MockPwmTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPwmTimer {
    /// Creates a timer with reset register values (ARR = `u32::MAX`).
    pub const fn new() -> Self {
        Self {
            counter_mode: None,
            oc_mode: None,
            counter_enabled: false,
            output_enabled: false,
            prescaler: 0,
            auto_reload: u32::MAX,
            compare_preload: 0,
            compare_active: 0,
            count: 0,
            prescale_phase: 0,
            update_events: 0,
            compare_writes: HistoryBuffer::new(),
        }
    }

    pub fn counter_mode(&self) -> Option<CounterMode> {
        self.counter_mode
    }

    pub fn output_compare_mode(&self) -> Option<OutputCompareMode> {
        self.oc_mode
    }

    pub fn counter_enabled(&self) -> bool {
        self.counter_enabled
    }

    pub fn output_enabled(&self) -> bool {
        self.output_enabled
    }

    /// Raw prescaler register (divider minus one)
    pub fn prescaler(&self) -> u32 {
        self.prescaler
    }

    /// Raw auto-reload register (period minus one)
    pub fn auto_reload(&self) -> u32 {
        self.auto_reload
    }

    /// Compare value most recently written (preload register)
    pub fn compare(&self) -> u32 {
        self.compare_preload
    }

    /// Compare value the output stage is currently using
    pub fn active_compare(&self) -> u32 {
        self.compare_active
    }

    /// Live counter value
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Number of rollovers since the timer was created
    pub fn update_events(&self) -> u64 {
        self.update_events
    }

    /// The most recent compare writes, oldest first
    pub fn compare_writes(&self) -> Vec<u32, COMPARE_LOG_CAPACITY> {
        self.compare_writes.oldest_ordered().copied().collect()
    }

    /// Runs the timer's input clock for `cycles` cycles.
    pub fn step(&mut self, cycles: u64) {
        if !self.counter_enabled {
            return;
        }

        let divider = u64::from(self.prescaler) + 1;
        let mut remaining = cycles;
        while remaining > 0 {
            let needed = divider - u64::from(self.prescale_phase);
            if remaining < needed {
                // remaining < divider <= 2^32, so this fits
                self.prescale_phase += remaining as u32;
                break;
            }
            remaining -= needed;
            self.prescale_phase = 0;
            self.count_once();
        }
    }

    /// Level of the compare output at the current count.
    pub fn output_high(&self) -> bool {
        self.output_enabled && self.is_active_at(self.count)
    }

    /// Number of counts in one full period during which the output is
    /// active, using the currently latched compare value.
    pub fn active_counts_per_period(&self) -> u64 {
        if !self.output_enabled {
            return 0;
        }
        let counts = u64::from(self.auto_reload) + 1;
        let below_compare = u64::from(self.compare_active).min(counts);
        match self.oc_mode {
            Some(OutputCompareMode::PwmMode1) => below_compare,
            Some(OutputCompareMode::PwmMode2) => counts - below_compare,
            Some(OutputCompareMode::Frozen) | None => 0,
        }
    }

    fn is_active_at(&self, count: u32) -> bool {
        match self.oc_mode {
            Some(OutputCompareMode::PwmMode1) => count < self.compare_active,
            Some(OutputCompareMode::PwmMode2) => count >= self.compare_active,
            Some(OutputCompareMode::Frozen) | None => false,
        }
    }

    fn count_once(&mut self) {
        if self.count >= self.auto_reload {
            self.count = 0;
            self.compare_active = self.compare_preload;
            self.update_events += 1;
        } else {
            self.count += 1;
        }
    }
}

impl PwmTimer for MockPwmTimer {
    fn set_counter_mode(&mut self, mode: CounterMode) -> HalResult<()> {
        match mode {
            CounterMode::EdgeAlignedUp => {
                self.counter_mode = Some(mode);
                Ok(())
            }
            CounterMode::EdgeAlignedDown | CounterMode::CenterAligned => {
                Err(HalError::NotSupported)
            }
        }
    }

    fn set_output_compare_mode(&mut self, mode: OutputCompareMode) -> HalResult<()> {
        self.oc_mode = Some(mode);
        Ok(())
    }

    fn enable_counter(&mut self) -> HalResult<()> {
        self.counter_enabled = true;
        Ok(())
    }

    fn enable_output(&mut self) -> HalResult<()> {
        self.output_enabled = true;
        Ok(())
    }

    fn set_prescaler(&mut self, value: u32) -> HalResult<()> {
        if value > u32::from(u16::MAX) {
            return Err(HalError::InvalidParameter);
        }
        self.prescaler = value;
        Ok(())
    }

    fn set_auto_reload(&mut self, value: u32) -> HalResult<()> {
        self.auto_reload = value;
        Ok(())
    }

    fn set_compare(&mut self, value: u32) -> HalResult<()> {
        self.compare_preload = value;
        self.compare_writes.write(value);
        Ok(())
    }
}

/// In-memory GPIO pin
#[derive(Debug)]
pub struct MockPin {
    number: u32,
    mode: PinMode,
    level: Level,
    transitions: u32,
}

impl MockPin {
    /// Creates a floating input pin driven low.
    pub const fn new(number: u32) -> Self {
        Self {
            number,
            mode: PinMode::Input,
            level: Level::Low,
            transitions: 0,
        }
    }

    pub fn mode(&self) -> PinMode {
        self.mode
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Number of writes that changed the pin level
    pub fn transitions(&self) -> u32 {
        self.transitions
    }
}

impl GpioPin for MockPin {
    fn set_mode(&mut self, mode: PinMode) -> HalResult<()> {
        self.mode = mode;
        Ok(())
    }

    fn read(&self) -> HalResult<Level> {
        Ok(self.level)
    }

    fn write(&mut self, level: Level) -> HalResult<()> {
        if self.mode != PinMode::Output {
            return Err(HalError::InvalidParameter);
        }
        if level != self.level {
            self.transitions += 1;
        }
        self.level = level;
        Ok(())
    }

    fn pin_number(&self) -> u32 {
        self.number
    }
}
