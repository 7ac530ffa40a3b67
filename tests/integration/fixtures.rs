//! Deterministic legs for integration testing.
//!
//! A small slate spanning every sport with known probabilities and
//! confidence scores, so selection and pricing outcomes are predictable.

use parlay::strategy::OddsConverter;
use parlay::{Leg, Sport};

/// Build a leg whose display odds agree with its probability.
pub fn leg(id: &str, sport: Sport, win_probability: f64, confidence_score: u8) -> Leg {
    let odds = OddsConverter::probability_to_american_odds(win_probability)
        .expect("fixture probability must be priceable");
    Leg::new(
        id,
        sport,
        format!("Fixture pick {id}"),
        win_probability,
        odds.value(),
        confidence_score,
    )
    .expect("fixture leg must be valid")
}

/// Tonight's slate.
pub fn slate() -> Vec<Leg> {
    vec![
        leg("NBA-BOS", Sport::Basketball, 0.72, 88),
        leg("NBA-DEN", Sport::Basketball, 0.61, 74),
        leg("NFL-KC", Sport::Football, 0.68, 81),
        leg("NHL-COL", Sport::Hockey, 0.55, 63),
        leg("MLB-LAD", Sport::Baseball, 0.65, 79),
        leg("NBA-MIL", Sport::Basketball, 0.58, 70),
    ]
}

/// Five basketball legs and nothing else.
pub fn basketball_only() -> Vec<Leg> {
    vec![
        leg("B1", Sport::Basketball, 0.60, 72),
        leg("B2", Sport::Basketball, 0.62, 91),
        leg("B3", Sport::Basketball, 0.55, 64),
        leg("B4", Sport::Basketball, 0.70, 85),
        leg("B5", Sport::Basketball, 0.66, 78),
    ]
}
