#![no_std]

//! NUCLEO-F446RE board support
//!
//! Brings up the clock tree (84 MHz SYSCLK from the HSI through the PLL,
//! APB1 at 42 MHz so the timer clock is 84 MHz) and provides the concrete
//! peripherals behind the `hal` traits:
//! - [`Stm32SysTick`]: the Cortex-M SysTick as a [`TickSource`]
//! - [`Stm32Tim2Pwm`]: TIM2 channel 1 as a [`PwmTimer`]
//! - [`LedPin`]: the user LED (PA5) as a [`GpioPin`]
//!
//! [`init`] also installs a `log` backend so the drivers' records reach RTT.
//!
//! PA5 doubles as TIM2_CH1 (AF1), so a firmware image uses the LED either as
//! a plain output or as the PWM output, never both.

use cortex_m::peripheral::syst::SystClkSource;
use cortex_m::peripheral::SYST;
use hal::{
    CounterMode, GpioPin, HalError, HalResult, Level, OutputCompareMode, PinMode, PwmTimer,
    TickSource,
};
use stm32f4xx_hal::gpio::{self, Output, PushPull};
use stm32f4xx_hal::pac;
use stm32f4xx_hal::prelude::*;
use stm32f4xx_hal::rcc::Clocks;

pub mod logger;

/// Peripherals left over after clock-tree bring-up
pub struct Board {
    pub systick: Stm32SysTick,
    pub tim2: pac::TIM2,
    pub led: gpio::PA5,
    pub clocks: Clocks,
}

/// Takes the device peripherals and configures the clock tree.
///
/// Runs once, before any driver `setup`. Interrupts stay masked until the
/// caller enables them.
pub fn init() -> Board {
    cortex_m::interrupt::disable();
    logger::init(log::LevelFilter::Debug);

    let cp = cortex_m::Peripherals::take().expect("core peripherals already taken");
    let dp = pac::Peripherals::take().expect("device peripherals already taken");

    dp.RCC.apb1enr.modify(|_, w| w.tim2en().enabled());

    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.sysclk(84.MHz()).pclk1(42.MHz()).freeze();

    let gpioa = dp.GPIOA.split();

    Board {
        systick: Stm32SysTick::new(cp.SYST),
        tim2: dp.TIM2,
        led: gpioa.pa5,
        clocks,
    }
}

/// SysTick driven from the core clock
pub struct Stm32SysTick {
    syst: SYST,
}

impl Stm32SysTick {
    pub fn new(mut syst: SYST) -> Self {
        syst.disable_counter();
        syst.disable_interrupt();
        syst.set_clock_source(SystClkSource::Core);
        Self { syst }
    }
}

impl TickSource for Stm32SysTick {
    fn set_reload(&mut self, reload: u32) -> HalResult<()> {
        if reload == 0 || reload > systick::MAX_RELOAD {
            return Err(HalError::InvalidParameter);
        }
        self.syst.set_reload(reload);
        self.syst.clear_current();
        Ok(())
    }

    fn enable_interrupt(&mut self) -> HalResult<()> {
        self.syst.enable_interrupt();
        Ok(())
    }

    fn enable_counter(&mut self) -> HalResult<()> {
        self.syst.enable_counter();
        Ok(())
    }
}

/// TIM2 channel 1 (PA5, AF1)
pub struct Stm32Tim2Pwm {
    tim: pac::TIM2,
}

impl Stm32Tim2Pwm {
    /// Wraps TIM2; its bus clock must already be enabled (see [`init`]).
    pub fn new(tim: pac::TIM2) -> Self {
        Self { tim }
    }
}

impl PwmTimer for Stm32Tim2Pwm {
    fn set_counter_mode(&mut self, mode: CounterMode) -> HalResult<()> {
        self.tim.cr1.modify(|_, w| {
            let w = w.ckd().div1().arpe().enabled();
            match mode {
                CounterMode::EdgeAlignedUp => w.cms().edge_aligned().dir().up(),
                CounterMode::EdgeAlignedDown => w.cms().edge_aligned().dir().down(),
                CounterMode::CenterAligned => w.cms().center_aligned1(),
            }
        });
        Ok(())
    }

    fn set_output_compare_mode(&mut self, mode: OutputCompareMode) -> HalResult<()> {
        // OC1PE: compare writes land in the preload register and are
        // copied over at the update event
        self.tim.ccmr1_output().modify(|_, w| {
            let w = w.oc1pe().enabled();
            match mode {
                OutputCompareMode::Frozen => w.oc1m().frozen(),
                OutputCompareMode::PwmMode1 => w.oc1m().pwm_mode1(),
                OutputCompareMode::PwmMode2 => w.oc1m().pwm_mode2(),
            }
        });
        Ok(())
    }

    fn enable_counter(&mut self) -> HalResult<()> {
        self.tim.cr1.modify(|_, w| w.cen().enabled());
        Ok(())
    }

    fn enable_output(&mut self) -> HalResult<()> {
        self.tim.ccer.modify(|_, w| w.cc1e().set_bit().cc1p().clear_bit());
        Ok(())
    }

    fn set_prescaler(&mut self, value: u32) -> HalResult<()> {
        let value = u16::try_from(value).map_err(|_| HalError::InvalidParameter)?;
        self.tim.psc.write(|w| w.psc().bits(value));
        Ok(())
    }

    fn set_auto_reload(&mut self, value: u32) -> HalResult<()> {
        // TIM2 is a 32-bit timer
        self.tim.arr.write(|w| unsafe { w.bits(value) });
        // Generate an update event so the prescaler and auto-reload
        // preloads take effect now rather than after the first overflow
        self.tim.egr.write(|w| w.ug().set_bit());
        Ok(())
    }

    fn set_compare(&mut self, value: u32) -> HalResult<()> {
        self.tim.ccr1.write(|w| unsafe { w.bits(value) });
        Ok(())
    }
}

/// The user LED (LD2) on PA5, as a push-pull output
pub struct LedPin {
    pin: gpio::PA5<Output<PushPull>>,
}

impl LedPin {
    pub fn new(pin: gpio::PA5) -> Self {
        Self {
            pin: pin.into_push_pull_output(),
        }
    }
}

impl GpioPin for LedPin {
    fn set_mode(&mut self, mode: PinMode) -> HalResult<()> {
        match mode {
            PinMode::Output => Ok(()),
            _ => Err(HalError::NotSupported),
        }
    }

    fn read(&self) -> HalResult<Level> {
        Ok(if self.pin.is_set_high() {
            Level::High
        } else {
            Level::Low
        })
    }

    fn write(&mut self, level: Level) -> HalResult<()> {
        match level {
            Level::High => self.pin.set_high(),
            Level::Low => self.pin.set_low(),
        }
        Ok(())
    }

    fn pin_number(&self) -> u32 {
        5
    }
}
