//! Read-only ticket view for the presentation layer.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use crate::strategy::ParlayQuote;
use crate::types::{AmericanOdds, Leg, TicketState};

/// Immutable copy of a ticket plus its derived price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicketSnapshot {
    pub legs: Vec<Leg>,
    pub state: TicketState,
    pub max_legs: usize,
    /// Product of leg probabilities, or `0.0` for an empty ticket.
    pub combined_probability: f64,
    /// `combined_probability` as a percentage, e.g. `"31.8%"`.
    pub combined_probability_pct: String,
    pub combined_decimal_odds: f64,
    pub combined_american_odds: AmericanOdds,
    /// Signed display string, e.g. `"+214"`, `"-120"` or `"EVEN"`.
    pub american_odds: String,
    pub stake: Decimal,
    /// Net profit on a win for `stake`, stake excluded.
    pub expected_payout: Decimal,
}

impl TicketSnapshot {
    /// Assemble a snapshot from already-computed values.
    ///
    /// The aggregator prices an empty ticket at probability `1.0` (the
    /// identity). Shown to a user that reads as a sure thing, so the
    /// snapshot reports `0.0` instead. Odds and payout keep the
    /// aggregator's values (`EVEN`, `0`).
    pub(crate) fn new(
        legs: &[Leg],
        max_legs: usize,
        quote: &ParlayQuote,
        stake: Decimal,
        expected_payout: Decimal,
    ) -> Self {
        let combined_probability = if legs.is_empty() {
            0.0
        } else {
            quote.combined_probability
        };

        Self {
            legs: legs.to_vec(),
            state: TicketState::from_len(legs.len(), max_legs),
            max_legs,
            combined_probability,
            combined_probability_pct: format!("{:.1}%", combined_probability * 100.0),
            combined_decimal_odds: quote.combined_decimal_odds,
            combined_american_odds: quote.combined_american_odds,
            american_odds: quote.combined_american_odds.to_string(),
            stake,
            expected_payout,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// JSON rendering for UI bridges.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for TicketSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}/{} legs | P={} | {} | ${} wins ${}",
            self.state,
            self.legs.len(),
            self.max_legs,
            self.combined_probability_pct,
            self.american_odds,
            self.stake,
            self.expected_payout,
        )
    }
}
