//! Ramps the user LED's brightness through TIM2 channel 1: one percent every
//! 10 ms on a 1 kHz carrier with 0.1% resolution.

#![no_std]
#![no_main]

use cortex_m_rt::{entry, exception};
use defmt_rtt as _;
use panic_halt as _;

use mainline::reference::{
    FADE_PERIOD_MS, FADE_STEP_PERCENT, PWM_PERIOD, SYSTICK_FREQ_HZ,
};
use mainline::FadeRamp;
use nucleo_f446re::Stm32Tim2Pwm;
use pwm::{PwmConfig, PwmDriver};
use systick::TickConfig;

/// PWM carrier frequency
const CARRIER_HZ: u32 = 1_000;

#[entry]
fn main() -> ! {
    let mut board = nucleo_f446re::init();

    let tick_config = TickConfig::new(board.clocks.sysclk().raw(), SYSTICK_FREQ_HZ)
        .expect("SYSCLK cannot produce the tick rate");
    systick::setup(&mut board.systick, &tick_config).expect("SysTick setup failed");

    // Route PA5 to TIM2_CH1 before the timer starts driving it
    let _pwm_pin = board.led.into_alternate::<1>();

    let pwm_config = PwmConfig::from_frequency(board.clocks.timclk1().raw(), CARRIER_HZ, PWM_PERIOD)
        .expect("timer clock cannot produce the PWM carrier");
    let driver = PwmDriver::setup(Stm32Tim2Pwm::new(board.tim2), pwm_config)
        .expect("TIM2 setup failed");
    defmt::info!("pwm: {}", pwm_config);

    let period = tick_config.ticks_for_millis(FADE_PERIOD_MS);
    let mut fade = FadeRamp::new(driver, FADE_STEP_PERCENT, period, systick::get_ticks())
        .expect("initial duty write failed");

    unsafe { cortex_m::interrupt::enable() };

    loop {
        if let Err(err) = fade.poll(systick::get_ticks()) {
            defmt::error!("fade failed: {}", err);
        }
    }
}

#[exception]
fn SysTick() {
    systick::on_tick_interrupt();
}
