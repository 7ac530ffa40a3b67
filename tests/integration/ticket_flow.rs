//! End-to-end builder sessions: config → pick source → ticket → snapshot.

use rust_decimal_macros::dec;

use parlay::config::AppConfig;
use parlay::source::{PickSource, StaticPickSource};
use parlay::{ParlayError, Sport, TicketController, TicketState};

use crate::fixtures::{basketball_only, leg, slate};

fn ids(ticket: &TicketController) -> Vec<String> {
    ticket.legs().iter().map(|l| l.id.clone()).collect()
}

#[test]
fn test_manual_build_session() {
    let cfg = AppConfig::default();
    let mut ticket = TicketController::new(cfg.ticket).unwrap();

    ticket.add_leg(leg("a", Sport::Basketball, 0.72, 80)).unwrap();
    ticket.add_leg(leg("b", Sport::Football, 0.68, 70)).unwrap();
    ticket.add_leg(leg("c", Sport::Hockey, 0.65, 60)).unwrap();

    let snap = ticket.snapshot();
    assert_eq!(snap.state, TicketState::Full);
    assert_eq!(snap.american_odds, "+214");
    assert_eq!(snap.expected_payout, dec!(214));
    assert_eq!(snap.combined_probability_pct, "31.8%");

    let err = ticket.add_leg(leg("d", Sport::Baseball, 0.5, 99)).unwrap_err();
    assert_eq!(err, ParlayError::CapacityExceeded { max_legs: 3 });
    assert_eq!(ids(&ticket), vec!["a", "b", "c"]);

    ticket.remove_leg("b").unwrap();
    ticket.add_leg(leg("d", Sport::Baseball, 0.5, 99)).unwrap();
    assert_eq!(ids(&ticket), vec!["a", "c", "d"]);

    ticket.clear();
    assert_eq!(ticket.snapshot().state, TicketState::Empty);
}

#[test]
fn test_generate_from_static_source() {
    let source = StaticPickSource::new(slate()).unwrap();
    let pool = tokio_test::block_on(source.fetch_legs(None, 10)).unwrap();

    let mut ticket = TicketController::new(AppConfig::default().ticket).unwrap();
    ticket.generate(&pool).unwrap();

    // top three by confidence already span two sports, so no swap
    assert_eq!(ids(&ticket), vec!["NBA-BOS", "NFL-KC", "MLB-LAD"]);
    assert_eq!(ticket.state(), TicketState::Full);
}

#[test]
fn test_generate_single_sport_filter_gets_no_swap() {
    let source = StaticPickSource::new(slate()).unwrap();
    let pool = tokio_test::block_on(source.fetch_legs(Some(Sport::Basketball), 10)).unwrap();

    let mut ticket = TicketController::new(AppConfig::default().ticket).unwrap();
    ticket.generate(&pool).unwrap();
    assert_eq!(ids(&ticket), vec!["NBA-BOS", "NBA-DEN", "NBA-MIL"]);
}

#[test]
fn test_optimize_with_pool_adds_second_sport() {
    let mut ticket = TicketController::new(AppConfig::default().ticket).unwrap();
    ticket.add_leg(leg("B4", Sport::Basketball, 0.70, 85)).unwrap();

    let mut pool = basketball_only();
    pool.push(leg("H1", Sport::Hockey, 0.52, 40));
    ticket.optimize_with(&pool).unwrap();

    // B2 91, B4 85 kept; B5 78 (lowest) swapped for the only hockey leg
    assert_eq!(ids(&ticket), vec!["B2", "B4", "H1"]);
}

#[test]
fn test_config_file_drives_capacity_and_stake() {
    let cfg = AppConfig::from_toml(
        r#"
        [ticket]
        max_legs = 2
        default_stake = 50
        diversity_preferred = false
        "#,
    )
    .unwrap();
    let mut ticket = TicketController::new(cfg.ticket).unwrap();
    ticket.add_leg(leg("x", Sport::Football, 0.5, 50)).unwrap();
    ticket.add_leg(leg("y", Sport::Football, 0.5, 50)).unwrap();
    assert!(ticket.add_leg(leg("z", Sport::Football, 0.5, 50)).is_err());

    let snap = ticket.snapshot();
    // decimal 4.0 → net 3 × 50
    assert_eq!(snap.expected_payout, dec!(150));
    assert_eq!(snap.american_odds, "+300");
}

#[test]
fn test_snapshot_json_for_presentation() {
    let mut ticket = TicketController::new(AppConfig::default().ticket).unwrap();
    ticket.add_leg(leg("a", Sport::Hockey, 0.5, 50)).unwrap();

    let json: serde_json::Value = serde_json::from_str(&ticket.snapshot().to_json().unwrap()).unwrap();
    assert_eq!(json["state"], "BUILDING");
    assert_eq!(json["american_odds"], "+100");
    assert_eq!(json["combined_probability_pct"], "50.0%");
    assert_eq!(json["legs"][0]["sport"], "HOCKEY");
}
