//! Tests for event placement on the shared week grid

use crate::model::{Currency, EventId, PositionedEvent, SpendingEvent};
use crate::position::position_events;

fn event(id: u16, trigger_week: u32) -> SpendingEvent {
    SpendingEvent::new(EventId(id), format!("event {id}"), Currency::Coins, 100.0, trigger_week)
        .unwrap()
}

fn lab(id: u16, trigger_week: u32, duration_days: u32) -> SpendingEvent {
    event(id, trigger_week).with_duration_days(duration_days).unwrap()
}

/// No two events whose week ranges intersect may share a row.
fn assert_collision_free(positioned: &[PositionedEvent]) {
    for (i, a) in positioned.iter().enumerate() {
        for b in &positioned[i + 1..] {
            let overlap = a.start_week < b.start_week + b.span_weeks
                && b.start_week < a.start_week + a.span_weeks;
            if overlap {
                assert_ne!(
                    a.row, b.row,
                    "events {:?} and {:?} overlap weeks but share row {}",
                    a.event.event_id, b.event.event_id, a.row
                );
            }
        }
    }
}

#[test]
fn test_non_overlapping_events_share_the_top_row() {
    let events = [event(0, 0), event(1, 3), event(2, 7)];
    let positioned = position_events(&events, 12);

    assert_eq!(positioned.len(), 3);
    assert!(positioned.iter().all(|p| p.row == 0));
}

#[test]
fn test_same_week_events_stack_into_rows() {
    let events = [event(0, 2), event(1, 2), event(2, 2)];
    let positioned = position_events(&events, 12);

    let mut rows: Vec<u32> = positioned.iter().map(|p| p.row).collect();
    rows.sort_unstable();
    assert_eq!(rows, vec![0, 1, 2]);
    assert_collision_free(&positioned);
}

#[test]
fn test_priority_breaks_same_week_ties() {
    // Lower priority sorts first and therefore claims the top row.
    let events = [
        event(0, 4).with_priority(5),
        event(1, 4).with_priority(1),
    ];
    let positioned = position_events(&events, 12);

    let top = positioned.iter().find(|p| p.row == 0).unwrap();
    assert_eq!(top.event.event_id, EventId(1));
}

#[test]
fn test_multi_week_commitment_blocks_its_whole_span() {
    // A 21-day lab starting week 1 spans weeks 1..4; an event at week 3
    // must drop to the next row, one at week 4 fits back on top.
    let events = [lab(0, 1, 21), event(1, 3), event(2, 4)];
    let positioned = position_events(&events, 12);

    let by_id = |id: u16| positioned.iter().find(|p| p.event.event_id == EventId(id)).unwrap();
    assert_eq!(by_id(0).span_weeks, 3);
    assert_eq!(by_id(0).row, 0);
    assert_eq!(by_id(1).row, 1);
    assert_eq!(by_id(2).row, 0);
    assert_collision_free(&positioned);
}

#[test]
fn test_span_never_extends_past_the_horizon() {
    let events = [lab(0, 10, 28)];
    let positioned = position_events(&events, 12);

    assert_eq!(positioned[0].span_weeks, 2);
    assert!(positioned[0].start_week + positioned[0].span_weeks <= 12);
}

#[test]
fn test_event_at_horizon_is_skipped() {
    let events = [event(0, 12), event(1, 11)];
    let positioned = position_events(&events, 12);

    assert_eq!(positioned.len(), 1);
    assert_eq!(positioned[0].event.event_id, EventId(1));
}

#[test]
fn test_positioning_ignores_currency_for_row_assignment() {
    // The grid is shared across currencies; same-week events collide even
    // when they debit different currencies.
    let coins = event(0, 5);
    let gems = SpendingEvent::new(EventId(1), "crown", Currency::Gems, 500.0, 5).unwrap();
    let positioned = position_events(&[coins, gems], 12);

    assert_ne!(positioned[0].row, positioned[1].row);
}

#[test]
fn test_positioning_is_deterministic() {
    let events: Vec<SpendingEvent> = (0..20)
        .map(|i| {
            let mut e = event(i, u32::from(i) % 10);
            e.duration_days = if i % 3 == 0 { Some(14) } else { None };
            e.priority = (i % 4) as u8;
            e
        })
        .collect();

    let first = position_events(&events, 12);
    let second = position_events(&events, 12);
    assert_eq!(first, second);
    assert_collision_free(&first);
}

#[test]
fn test_dense_cluster_stays_collision_free() {
    let events: Vec<SpendingEvent> = (0..30)
        .map(|i| {
            let trigger = u32::from(i) % 6;
            let mut e = event(i, trigger);
            if i % 2 == 0 {
                e.duration_days = Some(7 * (u32::from(i % 5) + 1));
            }
            e
        })
        .collect();

    let positioned = position_events(&events, 8);
    assert_eq!(positioned.len(), 30);
    assert_collision_free(&positioned);
}
