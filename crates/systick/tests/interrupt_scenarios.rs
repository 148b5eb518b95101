//! Tick counter scenarios against the fake tick source.
//! The process-wide counter is shared, so everything touching it lives in a
//! single test.

use hal::mock::MockTickSource;
use systick::{get_ticks, on_tick_interrupt, setup, TickConfig, TickCounter};

#[test]
fn reference_configuration_counts_milliseconds() {
    let config = TickConfig::new(84_000_000, 1_000).unwrap();
    let mut source = MockTickSource::new();
    setup(&mut source, &config).unwrap();

    assert_eq!(source.reload(), Some(83_999));
    assert!(source.interrupt_enabled());
    assert!(source.counter_enabled());

    let start = get_ticks();

    // 1000 interrupt firings
    for _ in 0..1_000 {
        on_tick_interrupt();
    }
    assert_eq!(get_ticks().elapsed_since(start), 1_000);

    // One simulated second of core clock is another 1000 interrupts
    let fired = source.advance_cycles(84_000_000, on_tick_interrupt);
    assert_eq!(fired, 1_000);
    assert_eq!(get_ticks().elapsed_since(start), 2_000);
}

#[test]
fn partial_periods_do_not_tick() {
    let config = TickConfig::new(84_000_000, 1_000).unwrap();
    let mut source = MockTickSource::new();
    setup(&mut source, &config).unwrap();

    let counter = TickCounter::new();
    source.advance_cycles(83_999, || counter.increment());
    assert_eq!(counter.get().raw(), 0);

    source.advance_cycles(1, || counter.increment());
    assert_eq!(counter.get().raw(), 1);

    // Half a millisecond more does nothing; the rest of it completes a tick
    source.advance_cycles(42_000, || counter.increment());
    assert_eq!(counter.get().raw(), 1);
    source.advance_cycles(42_000, || counter.increment());
    assert_eq!(counter.get().raw(), 2);
}

#[test]
fn no_ticks_without_setup() {
    let mut source = MockTickSource::new();
    let counter = TickCounter::new();
    assert_eq!(source.advance_cycles(1_000_000, || counter.increment()), 0);
    assert_eq!(counter.get().raw(), 0);
}
