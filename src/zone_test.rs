use super::*;
use time::macros::datetime;

// =============================================================================
// offset_hours_for_label
// =============================================================================

#[test]
fn known_labels_resolve() {
    assert_eq!(offset_hours_for_label("UTC-8"), -8);
    assert_eq!(offset_hours_for_label("UTC-5"), -5);
    assert_eq!(offset_hours_for_label("UTC+0"), 0);
    assert_eq!(offset_hours_for_label("UTC+9"), 9);
}

#[test]
fn unknown_label_resolves_to_zero() {
    assert_eq!(offset_hours_for_label("UTC+5:30"), 0);
    assert_eq!(offset_hours_for_label("CET"), 0);
    assert_eq!(offset_hours_for_label(""), 0);
}

#[test]
fn label_lookup_is_case_sensitive() {
    assert_eq!(offset_hours_for_label("utc-8"), 0);
}

// =============================================================================
// time_in_zone
// =============================================================================

#[test]
fn time_in_zone_matches_modular_shift() {
    let instant = datetime!(2024-03-10 02:45:30 UTC);
    for offset in [-8, -5, 0, 9] {
        let expected_secs = (instant.unix_timestamp() + i64::from(offset) * 3600).rem_euclid(86_400);
        let expected = format!("{:02}:{:02}", expected_secs / 3600, (expected_secs % 3600) / 60);
        assert_eq!(time_in_zone(instant, offset), expected, "offset {offset}");
    }
}

#[test]
fn time_in_zone_reference_noon() {
    let instant = datetime!(2024-01-01 12:00 UTC);
    assert_eq!(time_in_zone(instant, -8), "04:00");
    assert_eq!(time_in_zone(instant, -5), "07:00");
    assert_eq!(time_in_zone(instant, 0), "12:00");
    assert_eq!(time_in_zone(instant, 9), "21:00");
}

#[test]
fn time_in_zone_ignores_instant_offset() {
    let utc = datetime!(2024-01-01 12:00 UTC);
    let same_instant = datetime!(2024-01-01 21:00 +9);
    assert_eq!(time_in_zone(utc, -5), time_in_zone(same_instant, -5));
}

#[test]
fn time_in_zone_wraps_forward_without_date() {
    let instant = datetime!(2024-01-01 20:30 UTC);
    assert_eq!(time_in_zone(instant, 9), "05:30");
}

#[test]
fn time_in_zone_wraps_backward_without_date() {
    let instant = datetime!(2024-01-01 03:15 UTC);
    assert_eq!(time_in_zone(instant, -8), "19:15");
}

#[test]
fn time_in_zone_drops_seconds() {
    let instant = datetime!(2024-01-01 12:00:59 UTC);
    assert_eq!(time_in_zone(instant, 0), "12:00");
}

#[test]
fn time_in_zone_before_epoch() {
    let instant = datetime!(1969-12-31 23:30 UTC);
    assert_eq!(time_in_zone(instant, 0), "23:30");
    assert_eq!(time_in_zone(instant, 9), "08:30");
}

// =============================================================================
// TimeZoneEntry
// =============================================================================

#[test]
fn default_zones_scenario_at_noon_utc() {
    let instant = datetime!(2024-01-01 12:00 UTC);
    let times: Vec<(String, String)> =
        default_zones().iter().map(|z| (z.display_name.clone(), z.time_at(instant))).collect();
    assert_eq!(
        times,
        vec![
            ("Pacific".to_owned(), "04:00".to_owned()),
            ("Eastern".to_owned(), "07:00".to_owned()),
            ("London".to_owned(), "12:00".to_owned()),
            ("Tokyo".to_owned(), "21:00".to_owned()),
            ("Seoul".to_owned(), "21:00".to_owned()),
        ]
    );
}

#[test]
fn unknown_offset_entry_matches_utc_entry() {
    let instant = datetime!(2024-06-15 17:42 UTC);
    let unknown = TimeZoneEntry::new("ist", "India", "Mumbai", "UTC+5:30");
    let utc = TimeZoneEntry::new("gmt", "London", "London", "UTC+0");
    assert_eq!(unknown.utc_offset_hours(), 0);
    assert_eq!(unknown.time_at(instant), utc.time_at(instant));
}

#[test]
fn default_zone_ids_are_unique() {
    let zones = default_zones();
    let mut ids: Vec<&str> = zones.iter().map(|z| z.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), zones.len());
}

#[test]
fn entry_deserializes_from_widget_json_keys() {
    let json = r#"{"id":"pst","name":"Pacific","city":"San Francisco","offset":"UTC-8"}"#;
    let entry: TimeZoneEntry = serde_json::from_str(json).unwrap();
    assert_eq!(entry, TimeZoneEntry::new("pst", "Pacific", "San Francisco", "UTC-8"));
}
