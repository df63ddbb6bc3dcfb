use approx::assert_abs_diff_eq;
use skyframe_core::angle::{
    decimal_to_dms, decimal_to_hms, dms_to_decimal, hms_to_decimal, SexagesimalKind,
};
use skyframe_core::{Angle, AngleError};

fn sample_degrees(lo: f64, hi: f64, step: f64) -> Vec<f64> {
    let mut out = Vec::new();
    let mut d = lo;
    while d < hi {
        out.push(d);
        d += step;
    }
    out
}

#[test]
fn dms_round_trip_over_full_range() {
    for d in sample_degrees(-359.999, 360.0, 0.7373) {
        let text = decimal_to_dms(d).unwrap();
        let back = dms_to_decimal(&text).unwrap();
        assert_abs_diff_eq!(back, d, epsilon = 1e-4);
    }
}

#[test]
fn dms_round_trip_small_negatives_keep_sign() {
    for d in [-0.9, -0.5, -0.01, -1.0 / 3600.0] {
        let text = decimal_to_dms(d).unwrap();
        assert!(text.starts_with("-0:"), "{d} -> {text}");
        assert_abs_diff_eq!(dms_to_decimal(&text).unwrap(), d, epsilon = 1e-6);
    }
}

#[test]
fn hms_round_trip_over_full_circle() {
    for d in sample_degrees(0.0, 360.0, 0.4219) {
        let text = decimal_to_hms(d).unwrap();
        let back = hms_to_decimal(&text).unwrap();
        assert_abs_diff_eq!(back, d, epsilon = 1e-4);
    }
}

#[test]
fn seconds_field_never_reaches_sixty() {
    for whole in [0.0, 1.0, 45.0, 179.0] {
        for minutes in [0.0, 29.0, 59.0] {
            let d = whole + minutes / 60.0 + 59.99999 / 3600.0;
            for value in [d, -d] {
                let text = decimal_to_dms(value).unwrap();
                let seconds = text.rsplit(':').next().unwrap();
                let minutes_field = text.split(':').nth(1).unwrap();
                assert_ne!(seconds, "60", "{value} -> {text}");
                assert_ne!(minutes_field, "60", "{value} -> {text}");
                assert_abs_diff_eq!(dms_to_decimal(&text).unwrap(), value, epsilon = 1e-6);
            }
        }
    }
}

#[test]
fn known_values() {
    assert_eq!(decimal_to_dms(23.43927944).unwrap(), "23:26:21.406");
    assert_eq!(decimal_to_hms(279.23473479).unwrap(), "18:36:56.3363");
    assert_abs_diff_eq!(
        dms_to_decimal("38:47:1.28").unwrap(),
        38.78368889,
        epsilon = 1e-8
    );
}

#[test]
fn angle_renders_through_the_same_algorithm() {
    let angle = Angle::from_degrees(10.2625);
    assert_eq!(angle.to_dms().unwrap(), decimal_to_dms(10.2625).unwrap());
    assert_eq!(angle.to_hms().unwrap(), "0:41:3");
}

#[test]
fn negative_hour_angles_are_rejected() {
    assert!(matches!(
        decimal_to_hms(-0.001),
        Err(AngleError::NegativeHourAngle { .. })
    ));
    assert!(matches!(
        hms_to_decimal("-2:0:0"),
        Err(AngleError::NegativeHourAngle { .. })
    ));
}

#[test]
fn full_turn_quantities_never_print_a_full_turn() {
    for step in 1..=20 {
        let degrees = 360.0 - f64::from(step) * 1e-10;
        assert_eq!(SexagesimalKind::Hms.format_turn(degrees).unwrap(), "0:0:0");
        assert_eq!(SexagesimalKind::Dms.format_turn(degrees).unwrap(), "0:0:0");
    }
    assert_eq!(SexagesimalKind::Hms.format_turn(359.75).unwrap(), "23:59:0");
}
