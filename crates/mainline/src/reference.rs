//! Reference board timing: 84 MHz core, 1 kHz tick, 1 kHz PWM carrier with
//! 1000 duty steps.

use hal::ConfigError;
use pwm::PwmConfig;
use systick::TickConfig;

pub const CPU_FREQ_HZ: u32 = 84_000_000;
pub const SYSTICK_FREQ_HZ: u32 = 1_000;

pub const BLINK_PERIOD_MS: u32 = 20;

/// Timer input clock (APB1 timer clock equals the core clock here)
pub const PWM_INPUT_CLOCK_HZ: u32 = CPU_FREQ_HZ;
pub const PWM_PRESCALER: u32 = 84;
pub const PWM_PERIOD: u32 = 1_000;

pub const FADE_STEP_PERCENT: f32 = 1.0;
pub const FADE_PERIOD_MS: u32 = 10;

pub const fn tick_config() -> Result<TickConfig, ConfigError> {
    TickConfig::new(CPU_FREQ_HZ, SYSTICK_FREQ_HZ)
}

pub const fn pwm_config() -> Result<PwmConfig, ConfigError> {
    PwmConfig::new(PWM_INPUT_CLOCK_HZ, PWM_PRESCALER, PWM_PERIOD)
}
