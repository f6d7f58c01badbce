//! Tests for balance projection mechanics

use rustc_hash::FxHashMap;

use crate::model::{Currency, EventId, SpendingEvent};
use crate::position::position_events;
use crate::project::{ProjectionInput, project_currency, weekly_expenditures};

fn no_expenditures() -> FxHashMap<u32, f64> {
    FxHashMap::default()
}

fn input<'a>(
    starting_balance: f64,
    weekly_income: f64,
    growth_rate_percent: f64,
    proration_factor: f64,
    total_weeks: u32,
    expenditures: &'a FxHashMap<u32, f64>,
) -> ProjectionInput<'a> {
    ProjectionInput {
        starting_balance,
        weekly_income,
        growth_rate_percent,
        proration_factor,
        total_weeks,
        expenditures,
    }
}

#[test]
fn test_proration_scales_only_week_zero() {
    let expenditures = no_expenditures();
    let weeks = project_currency(&input(0.0, 700.0, 0.0, 0.5, 4, &expenditures));

    let incomes: Vec<f64> = weeks.iter().map(|w| w.income).collect();
    assert_eq!(incomes, vec![350.0, 700.0, 700.0, 700.0]);
}

#[test]
fn test_growth_compounds_per_elapsed_week() {
    let expenditures = no_expenditures();
    let weeks = project_currency(&input(0.0, 1000.0, 10.0, 1.0, 4, &expenditures));

    assert_eq!(weeks[0].income, 1000.0);
    assert!((weeks[1].income - 1100.0).abs() < 1e-9);
    assert!((weeks[2].income - 1210.0).abs() < 1e-9);
    assert!((weeks[3].income - 1331.0).abs() < 1e-9);
}

#[test]
fn test_negative_growth_decays_income() {
    let expenditures = no_expenditures();
    let weeks = project_currency(&input(0.0, 1000.0, -50.0, 1.0, 3, &expenditures));

    assert_eq!(weeks[1].income, 500.0);
    assert_eq!(weeks[2].income, 250.0);
}

#[test]
fn test_prorated_week_then_expenditure() {
    // Starting balance 255, weekly income 500, proration 0.26: week 0 ends
    // at 385. Week 1 adds 500 and spends 672, ending at 213.
    let mut expenditures = no_expenditures();
    expenditures.insert(1, 672.0);
    let weeks = project_currency(&input(255.0, 500.0, 0.0, 0.26, 2, &expenditures));

    assert!((weeks[0].balance - 385.0).abs() < 1e-9);
    assert_eq!(weeks[1].prior_balance, weeks[0].balance);
    assert!((weeks[1].balance - 213.0).abs() < 1e-9);
}

#[test]
fn test_balance_identity_and_chaining_hold_everywhere() {
    let mut expenditures = no_expenditures();
    expenditures.insert(2, 400.0);
    expenditures.insert(5, 1250.0);
    expenditures.insert(6, 80.0);
    let weeks = project_currency(&input(320.0, 450.0, 3.5, 4.0 / 7.0, 12, &expenditures));

    assert_eq!(weeks.len(), 12);
    for (index, week) in weeks.iter().enumerate() {
        let identity = week.prior_balance + week.income - week.expenditure;
        assert!(
            (week.balance - identity).abs() < 1e-9,
            "balance identity broken at week {index}"
        );
        if index > 0 {
            assert_eq!(week.prior_balance, weeks[index - 1].balance);
        }
    }
}

#[test]
fn test_negative_balances_are_preserved_not_clamped() {
    let mut expenditures = no_expenditures();
    expenditures.insert(0, 900.0);
    let weeks = project_currency(&input(100.0, 200.0, 0.0, 1.0, 4, &expenditures));

    assert_eq!(weeks[0].balance, -600.0);
    assert_eq!(weeks[1].prior_balance, -600.0);
    // Income keeps accruing; the balance climbs back without clamping.
    assert_eq!(weeks[3].balance, 0.0);
}

#[test]
fn test_weekly_expenditures_apportion_multi_week_costs() {
    // A 3-week lab costing 300 debits 100 in each covered week.
    let lab = SpendingEvent::new(EventId(0), "lab", Currency::Stones, 300.0, 2)
        .unwrap()
        .with_duration_days(21)
        .unwrap();
    let positioned = position_events(&[lab], 12);
    let by_week = weekly_expenditures(&positioned, 12);

    assert_eq!(by_week.get(&1), None);
    assert_eq!(by_week.get(&2), Some(&100.0));
    assert_eq!(by_week.get(&3), Some(&100.0));
    assert_eq!(by_week.get(&4), Some(&100.0));
    assert_eq!(by_week.get(&5), None);
}

#[test]
fn test_weekly_expenditures_sum_overlapping_events() {
    let a = SpendingEvent::new(EventId(0), "a", Currency::Coins, 140.0, 1)
        .unwrap()
        .with_duration_days(14)
        .unwrap();
    let b = SpendingEvent::new(EventId(1), "b", Currency::Coins, 30.0, 2).unwrap();
    let positioned = position_events(&[a, b], 12);
    let by_week = weekly_expenditures(&positioned, 12);

    assert_eq!(by_week.get(&1), Some(&70.0));
    assert_eq!(by_week.get(&2), Some(&100.0));
}

#[test]
fn test_zero_weeks_projects_nothing() {
    let expenditures = no_expenditures();
    let weeks = project_currency(&input(100.0, 500.0, 0.0, 1.0, 0, &expenditures));
    assert!(weeks.is_empty());
}
