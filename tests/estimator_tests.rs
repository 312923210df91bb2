use rlessongap::core::calculator::distance::distance_km;
use rlessongap::core::calculator::gaps::{GapStatus, classify_gap, classify_gap_with_margin};
use rlessongap::core::calculator::travel::{TravelPolicy, estimate_travel_minutes};
use rlessongap::utils::formatting::{format_distance, format_km, format_margin};
use rlessongap::utils::format_travel_time;

mod common;
use common::point;

#[test]
fn test_distance_is_zero_for_identical_points() {
    let p = point(-23.55, -46.63);
    assert_eq!(distance_km(&p, &p), 0.0);
}

#[test]
fn test_distance_is_symmetric() {
    let a = point(-23.55, -46.63);
    let b = point(-22.90, -43.17);
    assert!((distance_km(&a, &b) - distance_km(&b, &a)).abs() < 1e-9);
}

#[test]
fn test_distance_one_degree_of_latitude() {
    // 6371 * π / 180
    let d = distance_km(&point(0.0, 0.0), &point(1.0, 0.0));
    assert!((d - 111.195).abs() < 0.01, "got {d}");
}

#[test]
fn test_distance_one_degree_of_longitude_at_the_equator() {
    let d = distance_km(&point(0.0, 0.0), &point(0.0, 1.0));
    assert!((d - 111.19).abs() < 0.5, "got {d}");
}

#[test]
fn test_distance_antipodal_points_is_finite() {
    let d = distance_km(&point(0.0, 0.0), &point(0.0, 180.0));
    assert!(d.is_finite());
    assert!((d - 20015.09).abs() < 0.1, "got {d}");
}

#[test]
fn test_distance_city_blocks() {
    let d = distance_km(&point(-23.55, -46.63), &point(-23.56, -46.65));
    assert!((d - 2.32).abs() < 0.01, "got {d}");
}

#[test]
fn test_estimate_five_km_rounds_to_twenty_minutes() {
    // ~5.004 km → 12.01 min → 15 → +5
    let a = point(0.0, 0.0);
    let b = point(0.0, 0.045);
    assert_eq!(estimate_travel_minutes(Some(&a), Some(&b)), 20);
}

#[test]
fn test_estimate_same_point_is_only_the_buffer() {
    let p = point(45.46, 9.19);
    assert_eq!(estimate_travel_minutes(Some(&p), Some(&p)), 5);
}

#[test]
fn test_estimate_city_blocks() {
    let a = point(-23.55, -46.63);
    let b = point(-23.56, -46.65);
    assert_eq!(estimate_travel_minutes(Some(&a), Some(&b)), 15);
}

#[test]
fn test_estimate_defaults_when_a_point_is_missing() {
    let p = point(-23.55, -46.63);
    assert_eq!(estimate_travel_minutes(Some(&p), None), 15);
    assert_eq!(estimate_travel_minutes(None, Some(&p)), 15);
    assert_eq!(estimate_travel_minutes(None, None), 15);
}

#[test]
fn test_estimate_is_a_multiple_of_five_plus_buffer() {
    let origin = point(41.9, 12.5);
    for i in 1..40 {
        let dest = point(41.9 + i as f64 * 0.013, 12.5 - i as f64 * 0.007);
        let minutes = estimate_travel_minutes(Some(&origin), Some(&dest));
        assert!(minutes >= 5);
        assert_eq!(minutes % 5, 0, "estimate {minutes} for step {i}");
    }
}

#[test]
fn test_estimate_never_decreases_with_distance() {
    let origin = point(-23.55, -46.63);
    let mut last = 0;
    for i in 0..400 {
        // 0 to ~44 km northwards
        let dest = point(-23.55 + i as f64 * 0.001, -46.63);
        let minutes = estimate_travel_minutes(Some(&origin), Some(&dest));
        assert!(minutes >= last, "{minutes} < {last} at step {i}");
        last = minutes;
    }
    assert!(last > 100);
}

#[test]
fn test_estimate_antipodal_is_finite_and_rounded() {
    let minutes = estimate_travel_minutes(Some(&point(0.0, 0.0)), Some(&point(0.0, 180.0)));
    assert!(minutes > 48_000);
    assert_eq!(minutes % 5, 0);
}

#[test]
fn test_policy_without_rounding_uses_whole_minutes() {
    let policy = TravelPolicy {
        rounding_step_minutes: 0,
        ..TravelPolicy::default()
    };
    // 12.01 min → 13 → +5
    let minutes = policy.estimate_travel_minutes(Some(&point(0.0, 0.0)), Some(&point(0.0, 0.045)));
    assert_eq!(minutes, 18);
}

#[test]
fn test_policy_with_zero_speed_falls_back_to_default() {
    let policy = TravelPolicy {
        urban_speed_kmh: 0.0,
        default_travel_minutes: 25,
        ..TravelPolicy::default()
    };
    let minutes = policy.estimate_travel_minutes(Some(&point(0.0, 0.0)), Some(&point(0.0, 0.045)));
    assert_eq!(minutes, 25);
}

#[test]
fn test_policy_faster_speed_shortens_the_drive() {
    let policy = TravelPolicy {
        urban_speed_kmh: 50.0,
        ..TravelPolicy::default()
    };
    // ~5.004 km at 50 km/h → 6.004 min → 10 → +5
    let minutes = policy.estimate_travel_minutes(Some(&point(0.0, 0.0)), Some(&point(0.0, 0.045)));
    assert_eq!(minutes, 15);
}

#[test]
fn test_classify_gap_bands() {
    let ok = classify_gap(20, 15);
    assert_eq!(ok.status, GapStatus::Ok);
    assert_eq!(ok.margin_minutes, 5);
    assert!(ok.is_ok());

    let tight = classify_gap(15, 15);
    assert_eq!(tight.status, GapStatus::Warning);
    assert_eq!(tight.margin_minutes, 0);

    let almost = classify_gap(19, 15);
    assert_eq!(almost.status, GapStatus::Warning);
    assert_eq!(almost.margin_minutes, 4);

    let late = classify_gap(10, 15);
    assert_eq!(late.status, GapStatus::Conflict);
    assert_eq!(late.margin_minutes, -5);
}

#[test]
fn test_classify_negative_gap_is_conflict() {
    let a = classify_gap(-30, 5);
    assert_eq!(a.status, GapStatus::Conflict);
    assert_eq!(a.margin_minutes, -35);
}

#[test]
fn test_classify_with_custom_margin() {
    assert_eq!(classify_gap_with_margin(20, 15, 10).status, GapStatus::Warning);
    assert_eq!(classify_gap_with_margin(25, 15, 10).status, GapStatus::Ok);
    assert_eq!(
        TravelPolicy {
            ok_margin_minutes: 0,
            ..TravelPolicy::default()
        }
        .classify_gap(15, 15)
        .status,
        GapStatus::Ok
    );
}

#[test]
fn test_gap_status_order_and_labels() {
    assert!(GapStatus::Ok < GapStatus::Warning);
    assert!(GapStatus::Warning < GapStatus::Conflict);
    assert_eq!(GapStatus::Warning.label(), "TIGHT");
    assert_eq!(GapStatus::Conflict.as_str(), "conflict");
    assert_eq!(GapStatus::Ok.to_string(), "OK");
}

#[test]
fn test_scan_window_is_inclusive() {
    let policy = TravelPolicy::default();
    assert!(policy.in_scan_window(0));
    assert!(policy.in_scan_window(240));
    assert!(!policy.in_scan_window(241));
    assert!(!policy.in_scan_window(-1));
}

#[test]
fn test_format_travel_time() {
    assert_eq!(format_travel_time(0), "0 min");
    assert_eq!(format_travel_time(45), "45 min");
    assert_eq!(format_travel_time(59), "59 min");
    assert_eq!(format_travel_time(60), "1h");
    assert_eq!(format_travel_time(70), "1h 10 min");
    assert_eq!(format_travel_time(125), "2h 5 min");
    assert_eq!(format_travel_time(180), "3h");
}

#[test]
fn test_format_km() {
    assert_eq!(format_km(0.0), "0 m");
    assert_eq!(format_km(0.85), "850 m");
    assert_eq!(format_km(1.0), "1.0 km");
    assert_eq!(format_km(2.3222), "2.3 km");
    assert_eq!(format_km(12.96), "13.0 km");
}

#[test]
fn test_format_distance() {
    let a = point(-23.55, -46.63);
    let b = point(-23.56, -46.65);
    assert_eq!(format_distance(Some(&a), Some(&b)), "2.3 km");
    assert_eq!(format_distance(Some(&a), Some(&a)), "0 m");
    assert_eq!(format_distance(Some(&a), None), "");
    assert_eq!(format_distance(None, None), "");
}

#[test]
fn test_format_margin() {
    assert_eq!(format_margin(12), "+12 min");
    assert_eq!(format_margin(0), "0 min");
    assert_eq!(format_margin(-7), "-7 min");
}
