use crate::DutyCycle;

#[test]
fn bounds_map_to_zero_and_full_period() {
    assert_eq!(DutyCycle::ZERO.compare_for(1_000), 0);
    assert_eq!(DutyCycle::FULL.compare_for(1_000), 1_000);
    assert_eq!(DutyCycle::FULL.compare_for(u32::MAX), u32::MAX);
}

#[test]
fn compare_is_rounded_product() {
    let cases: &[(f32, u32)] = &[
        (37.5, 375),
        (50.0, 500),
        (0.1, 1),
        (0.04, 0),
        (0.05, 1),
        (33.3, 333),
        (99.96, 1_000),
    ];
    for &(percent, expected) in cases {
        let duty = DutyCycle::new(percent).unwrap();
        assert_eq!(duty.compare_for(1_000), expected, "duty {percent}%");
    }
}

#[test]
fn compare_stays_within_period_for_all_steps() {
    for period in [1u32, 7, 255, 1_000, 65_535] {
        for tenths in 0..=1_000u32 {
            let duty = DutyCycle::new(tenths as f32 / 10.0).unwrap();
            let compare = duty.compare_for(period);
            assert!(compare <= period, "{compare} > {period}");
        }
    }
}

#[test]
fn checked_constructor_rejects_out_of_range() {
    assert!(DutyCycle::new(-0.01).is_none());
    assert!(DutyCycle::new(100.01).is_none());
    assert!(DutyCycle::new(f32::NAN).is_none());
    assert_eq!(DutyCycle::new(100.0), Some(DutyCycle::FULL));
}

#[test]
fn saturating_constructor_clamps() {
    assert_eq!(DutyCycle::from_percent(-20.0), DutyCycle::ZERO);
    assert_eq!(DutyCycle::from_percent(250.0), DutyCycle::FULL);
    assert_eq!(DutyCycle::from_percent(f32::NAN), DutyCycle::ZERO);
    assert_eq!(DutyCycle::from_percent(f32::INFINITY), DutyCycle::FULL);
    assert_eq!(DutyCycle::from_percent(12.5).percent(), 12.5);
}
