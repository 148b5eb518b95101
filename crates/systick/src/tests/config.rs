use hal::ConfigError;

use crate::{TickConfig, MAX_RELOAD};

#[test]
fn reference_configuration_is_one_millisecond() {
    let config = TickConfig::new(84_000_000, 1_000).unwrap();
    assert_eq!(config.reload(), 83_999);
    assert_eq!(config.cycles_per_tick(), 84_000);
    assert_eq!(config.actual_tick_hz(), 1_000);
    assert_eq!(config.ticks_for_millis(20), 20);
}

#[test]
fn rejects_zero_frequencies() {
    assert_eq!(TickConfig::new(0, 1_000), Err(ConfigError::ZeroFrequency));
    assert_eq!(TickConfig::new(84_000_000, 0), Err(ConfigError::ZeroFrequency));
}

#[test]
fn rejects_tick_faster_than_clock() {
    assert_eq!(TickConfig::new(1_000, 2_000), Err(ConfigError::TickFasterThanClock));
    // One cycle per tick would need a zero reload
    assert_eq!(
        TickConfig::new(1_000, 1_000),
        Err(ConfigError::ReloadOutOfRange { reload: 0 })
    );
}

#[test]
fn rejects_reload_wider_than_24_bits() {
    // 84 MHz at 1 Hz needs 84 million cycles per tick
    assert_eq!(
        TickConfig::new(84_000_000, 1),
        Err(ConfigError::ReloadOutOfRange { reload: 83_999_999 })
    );
    let widest = TickConfig::new(MAX_RELOAD + 1, 1).unwrap();
    assert_eq!(widest.reload(), MAX_RELOAD);
}

#[test]
fn rejects_inexact_rates_outside_tolerance() {
    // 100 Hz clock, 40 Hz tick: 2 cycles per tick gives 50 Hz
    assert_eq!(
        TickConfig::new(100, 40),
        Err(ConfigError::FrequencyOutOfTolerance {
            requested_hz: 40,
            actual_hz: 50,
        })
    );

    // 16 MHz / 3 Hz truncates by one cycle in 16 million: well within 0.1%
    let config = TickConfig::new(16_000_000, 3).unwrap();
    assert_eq!(config.reload(), 5_333_332);
}

#[test]
fn ticks_for_millis_scales_with_tick_rate() {
    let fast = TickConfig::new(84_000_000, 10_000).unwrap();
    assert_eq!(fast.ticks_for_millis(20), 200);

    let slow = TickConfig::new(84_000_000, 100).unwrap();
    assert_eq!(slow.ticks_for_millis(20), 2);
    assert_eq!(slow.ticks_for_millis(1), 1);
    assert_eq!(slow.ticks_for_millis(0), 0);
}
