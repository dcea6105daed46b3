use chrono::Duration;
use geoattend::core::analytics::sessions::{classify, summarize_days, validate_lookback};
use geoattend::core::analytics::{COMPLETE_SHIFT_HOURS, LOOKBACK_DAYS, SessionReconstructor};
use geoattend::db::store::MemoryEventStore;
use geoattend::errors::AppError;
use geoattend::export::HistoryRow;
use geoattend::models::event_kind::EventKind::{CheckIn, CheckOut};
use geoattend::models::session_summary::SessionStatus;

mod common;
use common::{at, bogota, date, ev};

fn store_with(events: Vec<geoattend::models::event::Event>) -> MemoryEventStore {
    let mut store = MemoryEventStore::new(bogota());
    store.add_employee("123");
    for e in events {
        store.push(e);
    }
    store
}

#[test]
fn test_full_day_is_complete() {
    let events = vec![
        ev(1, "123", at("2024-01-10", 8, 0), CheckIn, "Sede Norte"),
        ev(2, "123", at("2024-01-10", 17, 30), CheckOut, "Sede Norte"),
    ];

    let days = summarize_days("123", &events, &bogota());
    assert_eq!(days.len(), 1);

    let d = &days[0];
    assert_eq!(d.date, date("2024-01-10"));
    assert_eq!(d.check_in_count, 1);
    assert_eq!(d.check_out_count, 1);
    assert_eq!(d.worked_duration, Some(Duration::minutes(9 * 60 + 30)));
    assert_eq!(d.status, SessionStatus::Complete);
}

#[test]
fn test_short_day_is_partial() {
    let events = vec![
        ev(1, "123", at("2024-01-10", 8, 0), CheckIn, "Sede Norte"),
        ev(2, "123", at("2024-01-10", 11, 0), CheckOut, "Sede Norte"),
    ];

    let d = &summarize_days("123", &events, &bogota())[0];
    assert_eq!(d.worked_duration, Some(Duration::hours(3)));
    assert_eq!(d.status, SessionStatus::Partial);
}

#[test]
fn test_check_in_only_is_incomplete_without_duration() {
    let events = vec![ev(1, "123", at("2024-01-10", 8, 0), CheckIn, "Sede Norte")];

    let d = &summarize_days("123", &events, &bogota())[0];
    assert_eq!(d.check_in_count, 1);
    assert_eq!(d.check_out_count, 0);
    assert_eq!(d.worked_duration, None);
    assert_eq!(d.status, SessionStatus::Incomplete);
}

#[test]
fn test_mismatched_counts_are_incomplete() {
    let events = vec![
        ev(1, "123", at("2024-01-10", 7, 0), CheckIn, "A"),
        ev(2, "123", at("2024-01-10", 12, 0), CheckOut, "A"),
        ev(3, "123", at("2024-01-10", 13, 0), CheckIn, "B"),
    ];

    let d = &summarize_days("123", &events, &bogota())[0];
    assert_eq!(d.check_in_count, 2);
    assert_eq!(d.check_out_count, 1);
    assert_eq!(d.worked_duration, None);
    assert_eq!(d.status, SessionStatus::Incomplete);
}

#[test]
fn test_multiple_shifts_collapse_into_one_span() {
    // 07-09 and 15-17: four hours actually worked, but the span is ten.
    let events = vec![
        ev(1, "123", at("2024-01-10", 7, 0), CheckIn, "A"),
        ev(2, "123", at("2024-01-10", 9, 0), CheckOut, "A"),
        ev(3, "123", at("2024-01-10", 15, 0), CheckIn, "B"),
        ev(4, "123", at("2024-01-10", 17, 0), CheckOut, "B"),
    ];

    let d = &summarize_days("123", &events, &bogota())[0];
    assert_eq!(d.worked_duration, Some(Duration::hours(10)));
    assert_eq!(d.status, SessionStatus::Complete);
}

#[test]
fn test_check_out_before_check_in_keeps_negative_span() {
    let events = vec![
        ev(1, "123", at("2024-01-10", 8, 0), CheckOut, "A"),
        ev(2, "123", at("2024-01-10", 11, 0), CheckIn, "A"),
    ];

    let d = &summarize_days("123", &events, &bogota())[0];
    assert_eq!(d.worked_duration, Some(Duration::hours(-3)));
    assert_eq!(d.status, SessionStatus::Partial);

    let row = HistoryRow::from_summary(d, &bogota());
    assert_eq!(row.horas, "-3.0h");
    assert_eq!(row.status, "partial");
}

#[test]
fn test_exactly_eight_hours_is_complete() {
    let events = vec![
        ev(1, "123", at("2024-01-10", 8, 0), CheckIn, "A"),
        ev(2, "123", at("2024-01-10", 16, 0), CheckOut, "A"),
    ];
    let d = &summarize_days("123", &events, &bogota())[0];
    assert_eq!(d.status, SessionStatus::Complete);
}

#[test]
fn test_visited_places_keep_first_occurrence_order() {
    // Supplied out of order on purpose; places follow chronology.
    let events = vec![
        ev(3, "123", at("2024-01-10", 12, 0), CheckIn, "Bodega"),
        ev(1, "123", at("2024-01-10", 8, 0), CheckIn, "Sede Norte"),
        ev(2, "123", at("2024-01-10", 10, 0), CheckOut, "Cliente X"),
        ev(4, "123", at("2024-01-10", 16, 0), CheckOut, "Sede Norte"),
    ];

    let d = &summarize_days("123", &events, &bogota())[0];
    assert_eq!(d.visited_places, vec!["Sede Norte", "Cliente X", "Bodega"]);
    assert_eq!(d.first_event, at("2024-01-10", 8, 0));
    assert_eq!(d.last_event, at("2024-01-10", 16, 0));
}

#[test]
fn test_buckets_use_configured_offset_and_sort_descending() {
    let events = vec![
        ev(1, "123", at("2024-01-09", 8, 0), CheckIn, "A"),
        // 22:30 in Bogota is already 03:30 UTC on the 11th.
        ev(2, "123", at("2024-01-10", 22, 30), CheckIn, "A"),
        ev(3, "123", at("2024-01-12", 9, 0), CheckOut, "A"),
    ];

    let days = summarize_days("123", &events, &bogota());
    let dates: Vec<_> = days.iter().map(|d| d.date).collect();
    assert_eq!(
        dates,
        vec![date("2024-01-12"), date("2024-01-10"), date("2024-01-09")]
    );

    // Every event counted exactly once.
    let counted: usize = days
        .iter()
        .map(|d| d.check_in_count + d.check_out_count)
        .sum();
    assert_eq!(counted, events.len());
}

#[test]
fn test_status_classification_is_exhaustive() {
    let eight = Duration::hours(COMPLETE_SHIFT_HOURS);
    assert_eq!(classify(1, 1, Some(eight)), SessionStatus::Complete);
    assert_eq!(
        classify(2, 2, Some(eight - Duration::seconds(1))),
        SessionStatus::Partial
    );
    assert_eq!(classify(0, 0, None), SessionStatus::Incomplete);
    assert_eq!(classify(0, 1, None), SessionStatus::Incomplete);
    assert_eq!(classify(2, 1, Some(eight)), SessionStatus::Incomplete);
}

#[test]
fn test_lookback_bounds() {
    assert_eq!(LOOKBACK_DAYS, 1..=90);
    assert!(validate_lookback(1).is_ok());
    assert!(validate_lookback(90).is_ok());
    assert!(matches!(validate_lookback(0), Err(AppError::InvalidArgument(_))));
    assert!(matches!(validate_lookback(91), Err(AppError::InvalidArgument(_))));
    assert!(matches!(validate_lookback(-3), Err(AppError::InvalidArgument(_))));
}

#[test]
fn test_reconstruct_filters_window_and_validates() {
    let store = store_with(vec![
        ev(1, "123", at("2024-01-01", 8, 0), CheckIn, "A"),
        ev(2, "123", at("2024-01-08", 8, 0), CheckIn, "A"),
        ev(3, "123", at("2024-01-08", 17, 0), CheckOut, "A"),
        ev(4, "123", at("2024-01-10", 8, 0), CheckIn, "B"),
    ]);
    let rec = SessionReconstructor::new(&store, bogota());

    // [2024-01-03, 2024-01-10]
    let days = rec.reconstruct("123", 7, date("2024-01-10")).unwrap();
    let dates: Vec<_> = days.iter().map(|d| d.date).collect();
    assert_eq!(dates, vec![date("2024-01-10"), date("2024-01-08")]);
    assert_eq!(days[1].status, SessionStatus::Complete);

    assert!(matches!(
        rec.reconstruct("123", 0, date("2024-01-10")),
        Err(AppError::InvalidArgument(_))
    ));
    assert!(matches!(
        rec.reconstruct("999", 7, date("2024-01-10")),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn test_reconstruct_without_events_is_empty() {
    let store = store_with(vec![]);
    let rec = SessionReconstructor::new(&store, bogota());
    let days = rec.reconstruct("123", 30, date("2024-01-10")).unwrap();
    assert!(days.is_empty());
}
