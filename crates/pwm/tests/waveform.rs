//! Waveform-level checks: drive the simulated timer and look at its output.

use hal::mock::MockPwmTimer;
use pwm::{PwmConfig, PwmDriver};

/// Input clock cycles in one carrier period of the reference setup
const CYCLES_PER_PERIOD: u64 = 84 * 1_000;

fn reference_driver() -> PwmDriver<MockPwmTimer> {
    let config = PwmConfig::new(84_000_000, 84, 1_000).unwrap();
    PwmDriver::setup(MockPwmTimer::new(), config).unwrap()
}

#[test]
fn carrier_is_one_kilohertz() {
    let mut timer = reference_driver().free();

    // One simulated second of input clock
    timer.step(84_000_000);
    assert_eq!(timer.update_events(), 1_000);
}

#[test]
fn duty_change_applies_at_next_period_boundary() {
    let mut pwm = reference_driver();
    pwm.set_duty_cycle(37.5).unwrap();
    let mut timer = pwm.free();

    // Mid-period the old (reset) threshold is still in use
    timer.step(CYCLES_PER_PERIOD / 2);
    assert_eq!(timer.compare(), 375);
    assert_eq!(timer.active_compare(), 0);
    assert!(!timer.output_high());

    timer.step(CYCLES_PER_PERIOD / 2);
    assert_eq!(timer.update_events(), 1);
    assert_eq!(timer.active_compare(), 375);
    assert_eq!(timer.active_counts_per_period(), 375);
}

#[test]
fn output_is_high_until_compare_then_low() {
    let mut pwm = reference_driver();
    pwm.set_duty_cycle(25.0).unwrap();
    let mut timer = pwm.free();
    timer.step(CYCLES_PER_PERIOD);

    // count 0 .. 249 active
    assert!(timer.output_high());
    timer.step(84 * 249);
    assert_eq!(timer.count(), 249);
    assert!(timer.output_high());
    timer.step(84);
    assert_eq!(timer.count(), 250);
    assert!(!timer.output_high());
}

#[test]
fn full_duty_is_always_on_and_zero_is_always_off() {
    let mut pwm = reference_driver();
    pwm.set_duty_cycle(100.0).unwrap();
    let mut timer = pwm.free();
    timer.step(CYCLES_PER_PERIOD);
    assert_eq!(timer.active_counts_per_period(), 1_000);

    let mut pwm = reference_driver();
    pwm.set_duty_cycle(0.0).unwrap();
    let mut timer = pwm.free();
    timer.step(CYCLES_PER_PERIOD);
    assert_eq!(timer.active_counts_per_period(), 0);
}

#[test]
fn active_fraction_tracks_requested_duty() {
    for tenths in (0..=1_000u32).step_by(37) {
        let percent = tenths as f32 / 10.0;
        let mut pwm = reference_driver();
        pwm.set_duty_cycle(percent).unwrap();
        let mut timer = pwm.free();
        timer.step(CYCLES_PER_PERIOD);

        assert_eq!(
            timer.active_counts_per_period(),
            u64::from(tenths),
            "duty {percent}%"
        );
    }
}
