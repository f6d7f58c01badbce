//! Event positioning for the shared timeline grid.
//!
//! Greedy first-fit interval coloring: events are sorted by
//! `(trigger_week, priority)` and each takes the first row whose occupied
//! weeks do not intersect its span. Not globally row-minimal, but
//! deterministic and stable under insertion order, which is what the grid
//! needs — collision-free layout, not minimum row count.

use crate::model::{PositionedEvent, SpendingEvent};

/// Assign every event a start week, span, and display row such that no two
/// events sharing a week share a row.
///
/// Events whose span would be empty on this horizon (trigger week at or
/// past `total_weeks`) are skipped; callers normally filter those out
/// before positioning. Pure function; occupancy state lives and dies
/// within one call.
pub fn position_events(events: &[SpendingEvent], total_weeks: u32) -> Vec<PositionedEvent> {
    debug_assert!(total_weeks < 64, "week occupancy is tracked in a u64");

    let mut ordered: Vec<&SpendingEvent> = events.iter().collect();
    ordered.sort_by_key(|e| (e.trigger_week, e.priority));

    // One occupancy word per row; bit w set means week w is taken.
    let mut rows: Vec<u64> = Vec::new();
    let mut positioned = Vec::with_capacity(ordered.len());

    for event in ordered {
        let span_weeks = event.span_weeks(total_weeks);
        if span_weeks == 0 {
            continue;
        }
        let mask = week_mask(event.trigger_week, span_weeks);

        let row = match rows.iter().position(|occupied| occupied & mask == 0) {
            Some(row) => row,
            None => {
                rows.push(0);
                rows.len() - 1
            }
        };
        rows[row] |= mask;

        positioned.push(PositionedEvent {
            event: event.clone(),
            start_week: event.trigger_week,
            span_weeks,
            row: row as u32,
        });
    }

    positioned
}

/// Bitmask covering `[start, start + span)`.
fn week_mask(start: u32, span: u32) -> u64 {
    ((1u64 << span) - 1) << start
}
