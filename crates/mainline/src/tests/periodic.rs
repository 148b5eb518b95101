use systick::Ticks;

use crate::Periodic;

#[test]
fn fires_once_period_has_elapsed() {
    let mut timer = Periodic::new(20, Ticks::new(100));

    assert!(!timer.poll(Ticks::new(100)));
    assert!(!timer.poll(Ticks::new(119)));
    assert!(timer.poll(Ticks::new(120)));
    assert_eq!(timer.start(), Ticks::new(120));

    assert!(!timer.poll(Ticks::new(139)));
    assert!(timer.poll(Ticks::new(140)));
}

#[test]
fn late_poll_rearms_from_poll_time() {
    let mut timer = Periodic::new(20, Ticks::ZERO);

    assert!(timer.poll(Ticks::new(35)));
    assert_eq!(timer.start(), Ticks::new(35));
    assert!(!timer.poll(Ticks::new(54)));
    assert!(timer.poll(Ticks::new(55)));
}

#[test]
fn survives_counter_wraparound() {
    let mut timer = Periodic::new(10, Ticks::new(u64::MAX - 4));

    assert!(!timer.poll(Ticks::new(4)));
    assert!(timer.poll(Ticks::new(5)));
}

#[test]
fn reset_restarts_the_period() {
    let mut timer = Periodic::new(10, Ticks::ZERO);
    timer.reset(Ticks::new(8));
    assert!(!timer.poll(Ticks::new(10)));
    assert!(timer.poll(Ticks::new(18)));
    assert_eq!(timer.period(), 10);
}

#[test]
fn zero_period_fires_every_poll() {
    let mut timer = Periodic::new(0, Ticks::new(7));
    assert!(timer.poll(Ticks::new(7)));
    assert!(timer.poll(Ticks::new(7)));
}
