//! Pricing and selection properties that must hold for any input.

use parlay::config::TicketConfig;
use parlay::strategy::{OddsConverter, SelectionConfig, SelectionOptimizer};
use parlay::{Leg, Sport, TicketController};

use crate::fixtures::{basketball_only, leg, slate};

const PROBABILITIES: &[f64] = &[0.03, 0.1, 0.27, 0.333, 0.5, 0.51, 0.64, 0.75, 0.92, 0.99, 1.0];

fn ticket_with(legs: &[Leg]) -> TicketController {
    let mut ticket = TicketController::new(TicketConfig {
        max_legs: legs.len().max(1),
        ..TicketConfig::default()
    })
    .unwrap();
    for l in legs {
        ticket.add_leg(l.clone()).unwrap();
    }
    ticket
}

#[test]
fn test_single_leg_odds_match_direct_conversion() {
    for (i, p) in PROBABILITIES.iter().enumerate() {
        let ticket = ticket_with(&[leg(&format!("p{i}"), Sport::Hockey, *p, 50)]);
        let expected = OddsConverter::decimal_to_american_odds(1.0 / p).unwrap();
        assert_eq!(ticket.snapshot().combined_american_odds, expected, "p={p}");
    }
}

#[test]
fn test_probability_is_product_regardless_of_order() {
    let legs = slate();
    let forward = ticket_with(&legs).snapshot();

    let mut reversed = legs.clone();
    reversed.reverse();
    let backward = ticket_with(&reversed).snapshot();

    let mut rotated = legs.clone();
    rotated.rotate_left(2);
    let shifted = ticket_with(&rotated).snapshot();

    let product: f64 = legs.iter().map(|l| l.win_probability).product();
    for snap in [&forward, &backward, &shifted] {
        assert!((snap.combined_probability - product).abs() < 1e-12);
        assert_eq!(snap.combined_american_odds, forward.combined_american_odds);
    }
}

#[test]
fn test_snapshot_twice_is_identical() {
    let ticket = ticket_with(&slate()[..3]);
    assert_eq!(ticket.snapshot(), ticket.snapshot());
}

#[test]
fn test_optimizer_is_deterministic() {
    let optimizer = SelectionOptimizer::new(SelectionConfig {
        cap: 3,
        diversity_preferred: true,
    });
    let pool = slate();
    let first = optimizer.select(&pool, &[]);
    let second = optimizer.select(&pool, &[]);
    assert_eq!(first, second);

    let mut a = TicketController::new(TicketConfig::default()).unwrap();
    let mut b = TicketController::new(TicketConfig::default()).unwrap();
    a.generate(&pool).unwrap();
    b.generate(&pool).unwrap();
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_single_sport_pool_returns_top_three() {
    let optimizer = SelectionOptimizer::new(SelectionConfig {
        cap: 3,
        diversity_preferred: true,
    });
    let out = optimizer.select(&basketball_only(), &[]);
    let ids: Vec<&str> = out.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["B2", "B4", "B5"]);
}

#[test]
fn test_full_ticket_rejects_every_extra_leg() {
    let mut ticket = TicketController::new(TicketConfig::default()).unwrap();
    let legs = slate();
    for l in &legs[..3] {
        ticket.add_leg(l.clone()).unwrap();
    }
    let before = ticket.snapshot();
    for l in &legs[3..] {
        assert!(ticket.add_leg(l.clone()).is_err());
    }
    assert_eq!(ticket.snapshot(), before);
}
