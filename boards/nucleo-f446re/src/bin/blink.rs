//! Toggles the user LED every 20 ms off a 1 kHz SysTick, without
//! busy-waiting.

#![no_std]
#![no_main]

use cortex_m_rt::{entry, exception};
use defmt_rtt as _;
use panic_halt as _;

use mainline::reference::{BLINK_PERIOD_MS, SYSTICK_FREQ_HZ};
use mainline::Blinker;
use nucleo_f446re::LedPin;
use systick::TickConfig;

#[entry]
fn main() -> ! {
    let mut board = nucleo_f446re::init();

    let tick_config = TickConfig::new(board.clocks.sysclk().raw(), SYSTICK_FREQ_HZ)
        .expect("SYSCLK cannot produce the tick rate");
    systick::setup(&mut board.systick, &tick_config).expect("SysTick setup failed");
    defmt::info!("systick: {}", tick_config);

    let led = LedPin::new(board.led);
    let period = tick_config.ticks_for_millis(BLINK_PERIOD_MS);
    let mut blink = Blinker::new(led, period, systick::get_ticks()).expect("LED setup failed");

    // Ticks start accumulating from here
    unsafe { cortex_m::interrupt::enable() };

    loop {
        if let Err(err) = blink.poll(systick::get_ticks()) {
            defmt::error!("blink failed: {}", err);
        }
    }
}

#[exception]
fn SysTick() {
    systick::on_tick_interrupt();
}
