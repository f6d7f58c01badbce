//! Timeline assembly — the one entry point presentation calls.
//!
//! `assemble` is a pure function of a snapshot: the host's own state
//! management re-invokes it wholesale whenever any input changes, and every
//! invocation recomputes the full week-by-currency matrix. The horizon is
//! bounded at 52 weeks and at most four currencies exist, so there is
//! nothing worth recomputing incrementally.

use crate::config::PlannerSnapshot;
use crate::model::{CurrencyProjection, EventId, PositionedEvent, SpendingEvent, TimelineData};
use crate::position::position_events;
use crate::project::{ProjectionInput, project_currency, weekly_expenditures};
use crate::week_math::{proration_factor, week_dates};

/// Build the full timeline for one snapshot.
///
/// Events triggering at or past the horizon are dropped before
/// positioning. All surviving events are positioned once, across
/// currencies, so the grid shares one set of rows. A derivable currency
/// whose source is `Derived` projects with its cached derivation;
/// everything else uses the manual figures.
pub fn assemble(snapshot: &PlannerSnapshot) -> TimelineData {
    let total_weeks = snapshot.horizon.count();
    let week_dates = week_dates(snapshot.reference_date, total_weeks);
    let proration = proration_factor(snapshot.reference_date);

    let visible: Vec<SpendingEvent> = snapshot
        .events
        .iter()
        .filter(|e| e.trigger_week < total_weeks)
        .cloned()
        .collect();
    let positioned = position_events(&visible, total_weeks);

    let mut projections = Vec::new();
    let mut unaffordable: Vec<EventId> = Vec::new();

    for config in snapshot.configs_in_order() {
        let events: Vec<PositionedEvent> = positioned
            .iter()
            .filter(|p| p.event.currency == config.currency)
            .cloned()
            .collect();
        let expenditures = weekly_expenditures(&events, total_weeks);

        let weeks = project_currency(&ProjectionInput {
            starting_balance: config.current_balance,
            weekly_income: config.effective_weekly_income(),
            growth_rate_percent: config.effective_growth_rate(),
            proration_factor: proration,
            total_weeks,
            expenditures: &expenditures,
        });

        // An event is unaffordable when the balance is negative at its
        // trigger week and never recovers within the horizon.
        for positioned_event in &events {
            let trigger = positioned_event.start_week as usize;
            if weeks[trigger..].iter().all(|week| week.balance < 0.0) {
                unaffordable.push(positioned_event.event.event_id);
            }
        }

        projections.push(CurrencyProjection {
            currency: config.currency,
            weeks,
            events,
        });
    }

    unaffordable.sort_unstable();
    unaffordable.dedup();

    TimelineData {
        week_dates,
        projections,
        positioned_events: positioned,
        unaffordable,
    }
}
