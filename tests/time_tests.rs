use walkcal::errors::AppError;
use walkcal::utils::time::{calculate_end_time, format_hour_12, parse_hour, parse_time};

#[test]
fn test_end_time_simple() {
    assert_eq!(calculate_end_time("10:00", 45).unwrap(), "10:45");
    assert_eq!(calculate_end_time("09:50", 30).unwrap(), "10:20");
    assert_eq!(calculate_end_time("14:30", 90).unwrap(), "16:00");
}

#[test]
fn test_end_time_wraps_past_midnight() {
    assert_eq!(calculate_end_time("23:50", 20).unwrap(), "00:10");
    assert_eq!(calculate_end_time("22:00", 180).unwrap(), "01:00");
}

#[test]
fn test_end_time_monotonic_without_wrap() {
    for start in ["06:00", "09:15", "12:59", "18:30"] {
        let s = parse_time(start).unwrap();
        for duration in [1u32, 15, 45, 60, 120, 300] {
            let end = calculate_end_time(start, duration).unwrap();
            let e = parse_time(&end).unwrap();
            assert!(e > s, "{start} + {duration} gave {end}");
        }
    }
}

#[test]
fn test_end_time_malformed_start() {
    match calculate_end_time("ten", 30) {
        Err(AppError::InvalidTime(v)) => assert_eq!(v, "ten"),
        other => panic!("expected InvalidTime, got {:?}", other),
    }
    assert!(calculate_end_time("25:00", 10).is_err());
}

#[test]
fn test_parse_hour() {
    assert_eq!(parse_hour("10:00"), Some(10));
    assert_eq!(parse_hour("00:30"), Some(0));
    assert_eq!(parse_hour("21:59"), Some(21));
    assert_eq!(parse_hour("9:30"), Some(9));
    assert_eq!(parse_hour("10:00:00"), Some(10));
    assert_eq!(parse_hour("11:75"), Some(11));
    assert_eq!(parse_hour("24:00"), None);
    assert_eq!(parse_hour("ten"), None);
    assert_eq!(parse_hour("xx:00"), None);
    assert_eq!(parse_hour(""), None);
}

#[test]
fn test_format_hour_12() {
    assert_eq!(format_hour_12(0), "12:00 AM");
    assert_eq!(format_hour_12(6), "6:00 AM");
    assert_eq!(format_hour_12(12), "12:00 PM");
    assert_eq!(format_hour_12(13), "1:00 PM");
    assert_eq!(format_hour_12(21), "9:00 PM");
}
