use super::*;

#[test]
fn recent_and_invalid_are_just_now() {
    assert_eq!(label_for_elapsed(0.0), "just now");
    assert_eq!(label_for_elapsed(9.9), "just now");
    assert_eq!(label_for_elapsed(-30.0), "just now");
    assert_eq!(label_for_elapsed(f64::NAN), "just now");
}

#[test]
fn seconds_and_minutes() {
    assert_eq!(label_for_elapsed(42.0), "42 seconds ago");
    assert_eq!(label_for_elapsed(60.0), "1 minute ago");
    assert_eq!(label_for_elapsed(150.0), "2 minutes ago");
}

#[test]
fn hours_days_weeks() {
    assert_eq!(label_for_elapsed(3600.0), "1 hour ago");
    assert_eq!(label_for_elapsed(5.0 * 3600.0), "5 hours ago");
    assert_eq!(label_for_elapsed(2.0 * 86_400.0), "2 days ago");
    assert_eq!(label_for_elapsed(15.0 * 86_400.0), "2 weeks ago");
}

#[test]
fn months_and_years() {
    assert_eq!(label_for_elapsed(45.0 * 86_400.0), "1 month ago");
    assert_eq!(label_for_elapsed(800.0 * 86_400.0), "2 years ago");
}

#[cfg(not(feature = "csr"))]
#[test]
fn format_created_at_passes_through_natively() {
    assert_eq!(format_created_at("2024-05-01T10:00:00Z"), "2024-05-01T10:00:00Z");
}
