#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn office_is_green() {
    let s = status_to_style(&RoomStatus::Office);
    assert_eq!(s.fill, "#bbf7d0");
    assert_eq!(s.stroke, "#16a34a");
    assert_eq!(s.stroke_width, 1.0);
}

#[test]
fn vacant_and_pending_are_outlined_with_thick_stroke() {
    for status in [RoomStatus::Vacant, RoomStatus::Pending] {
        let s = status_to_style(&status);
        assert_eq!(s.fill, "#ffffff");
        assert_eq!(s.stroke_width, 3.0);
        assert!(is_outlined(&status));
    }
    assert!(!is_outlined(&RoomStatus::Office));
}

#[test]
fn unknown_status_uses_fallback() {
    assert_eq!(status_to_style(&RoomStatus::Other("reserved".into())), FALLBACK_STYLE);
    assert_eq!(status_to_style(&RoomStatus::Other(String::new())), FALLBACK_STYLE);
}

#[test]
fn every_status_has_a_style_and_is_deterministic() {
    let statuses = [
        RoomStatus::Office,
        RoomStatus::Forecast,
        RoomStatus::Hoteling,
        RoomStatus::Vacant,
        RoomStatus::Pending,
        RoomStatus::Available,
        RoomStatus::Other("mystery".into()),
    ];
    for status in &statuses {
        let first = status_to_style(status);
        let second = status_to_style(status);
        assert_eq!(first, second);
        assert!(first.fill.starts_with('#'));
        assert!(first.stroke_width > 0.0);
    }
}

#[test]
fn recognized_statuses_never_fall_back() {
    for status in RoomStatus::LEGEND_ORDER {
        assert_ne!(status_to_style(&status), FALLBACK_STYLE);
    }
    assert_ne!(status_to_style(&RoomStatus::Available), FALLBACK_STYLE);
}

#[test]
fn svg_declarations_format() {
    let s = status_to_style(&RoomStatus::Pending);
    assert_eq!(s.svg_declarations(), "fill:#ffffff;stroke:#ea580c;stroke-width:3");
}

#[test]
fn legend_swatches_match_mapper() {
    let rows = legend_descriptors();
    assert_eq!(rows.len(), 5);
    for row in &rows {
        assert_eq!(row.swatch, status_to_style(&row.status));
    }
    assert_eq!(rows[0].label, "Office spaces");
    assert_eq!(rows[4].label, "Pending Requests");
}

#[test]
fn badge_classes() {
    assert!(badge_class(&RoomStatus::Forecast).contains("blue"));
    assert_eq!(badge_class(&RoomStatus::Other("x".into())), badge_class(&RoomStatus::Available));
}

#[test]
fn status_dot_for_reserved_is_red() {
    assert_eq!(status_dot_class(&RoomStatus::Other("reserved".into())), "bg-red-500");
    assert_eq!(status_dot_class(&RoomStatus::Pending), "bg-orange-500");
}
