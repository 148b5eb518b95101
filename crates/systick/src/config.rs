//! Tick frequency configuration

use core::fmt;

use hal::ConfigError;

/// Largest value the SysTick reload register accepts (24 bits)
pub const MAX_RELOAD: u32 = 0x00FF_FFFF;

/// Largest accepted deviation between requested and achieved rate, in
/// parts per million
pub const FREQUENCY_TOLERANCE_PPM: u64 = 1_000;

/// Validated tick-rate configuration.
///
/// The tick source interrupts once every `reload + 1` core clock cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickConfig {
    core_clock_hz: u32,
    tick_hz: u32,
    reload: u32,
}

impl TickConfig {
    /// Derives the reload value for `tick_hz` interrupts per second from a
    /// `core_clock_hz` source clock.
    pub const fn new(core_clock_hz: u32, tick_hz: u32) -> Result<Self, ConfigError> {
        if core_clock_hz == 0 || tick_hz == 0 {
            return Err(ConfigError::ZeroFrequency);
        }

        let cycles = core_clock_hz / tick_hz;
        if cycles == 0 {
            return Err(ConfigError::TickFasterThanClock);
        }

        let reload = cycles - 1;
        // A zero reload stops SysTick instead of interrupting every cycle
        if reload == 0 || reload > MAX_RELOAD {
            return Err(ConfigError::ReloadOutOfRange { reload });
        }

        let actual_hz = core_clock_hz / cycles;
        let deviation = (core_clock_hz as u64).abs_diff(tick_hz as u64 * cycles as u64);
        if deviation * 1_000_000 > core_clock_hz as u64 * FREQUENCY_TOLERANCE_PPM {
            return Err(ConfigError::FrequencyOutOfTolerance {
                requested_hz: tick_hz,
                actual_hz,
            });
        }

        Ok(Self {
            core_clock_hz,
            tick_hz,
            reload,
        })
    }

    pub const fn core_clock_hz(&self) -> u32 {
        self.core_clock_hz
    }

    /// The requested tick rate
    pub const fn tick_hz(&self) -> u32 {
        self.tick_hz
    }

    /// Value for the tick source's reload register
    pub const fn reload(&self) -> u32 {
        self.reload
    }

    /// Core clock cycles between two ticks
    pub const fn cycles_per_tick(&self) -> u32 {
        self.reload + 1
    }

    /// The tick rate the hardware will actually produce (truncated)
    pub const fn actual_tick_hz(&self) -> u32 {
        self.core_clock_hz / self.cycles_per_tick()
    }

    /// Number of ticks spanning `ms` milliseconds, rounded down but never
    /// below one tick for a non-zero duration.
    pub const fn ticks_for_millis(&self, ms: u32) -> u64 {
        if ms == 0 {
            return 0;
        }
        let ticks = ms as u64 * self.tick_hz as u64 / 1_000;
        if ticks == 0 {
            1
        } else {
            ticks
        }
    }
}

impl fmt::Display for TickConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}Hz tick from {}Hz clock (reload {})",
            self.tick_hz, self.core_clock_hz, self.reload
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TickConfig {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "{}Hz tick from {}Hz clock (reload {})",
            self.tick_hz,
            self.core_clock_hz,
            self.reload
        );
    }
}
