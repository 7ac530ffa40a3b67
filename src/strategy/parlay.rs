//! Parlay aggregation.
//!
//! Combines an ordered list of legs into one probability / odds / payout
//! quote. Combination is a plain product, so leg order never matters.

use rust_decimal::prelude::*;
use serde::Serialize;
use tracing::debug;

use super::odds::OddsConverter;
use crate::types::{AmericanOdds, Leg, ParlayError};

// ---------------------------------------------------------------------------
// Quote
// ---------------------------------------------------------------------------

/// Combined price of a set of legs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParlayQuote {
    /// Product of leg probabilities; `1.0` for no legs.
    pub combined_probability: f64,
    pub combined_decimal_odds: f64,
    pub combined_american_odds: AmericanOdds,
}

impl ParlayQuote {
    /// Quote for zero legs: the multiplicative identity. Probability `1.0`,
    /// decimal `1.0`, no line, nothing to win.
    pub const EMPTY: ParlayQuote = ParlayQuote {
        combined_probability: 1.0,
        combined_decimal_odds: 1.0,
        combined_american_odds: AmericanOdds::EVEN,
    };

    /// Net profit on a winning ticket for `stake`.
    pub fn expected_payout(&self, stake: Decimal) -> Result<Decimal, ParlayError> {
        ParlayAggregator::expected_payout(self.combined_decimal_odds, stake)
    }
}

// ---------------------------------------------------------------------------
// Aggregator
// ---------------------------------------------------------------------------

/// Pure, side-effect free combination of legs.
pub struct ParlayAggregator;

impl ParlayAggregator {
    /// Price a set of legs.
    ///
    /// For an empty slice this returns [`ParlayQuote::EMPTY`] (probability
    /// `1.0`). The ticket snapshot deliberately reports `0` for an empty
    /// ticket instead; see `engine::snapshot`.
    pub fn aggregate(legs: &[Leg]) -> Result<ParlayQuote, ParlayError> {
        if legs.is_empty() {
            return Ok(ParlayQuote::EMPTY);
        }

        let combined_probability: f64 = legs.iter().map(|l| l.win_probability).product();
        let combined_decimal_odds = OddsConverter::probability_to_decimal_odds(combined_probability)?;
        let combined_american_odds = OddsConverter::decimal_to_american_odds(combined_decimal_odds)?;

        debug!(
            legs = legs.len(),
            probability = format!("{:.4}", combined_probability),
            decimal = format!("{:.4}", combined_decimal_odds),
            american = %combined_american_odds,
            "Parlay aggregated"
        );

        Ok(ParlayQuote {
            combined_probability,
            combined_decimal_odds,
            combined_american_odds,
        })
    }

    /// `round((decimal - 1) * stake)`: profit excluding the returned stake,
    /// rounded to whole units half away from zero.
    pub fn expected_payout(decimal_odds: f64, stake: Decimal) -> Result<Decimal, ParlayError> {
        let net_odds = Decimal::from_f64(decimal_odds - 1.0).ok_or_else(|| {
            ParlayError::InvalidOdds(format!("decimal odds {decimal_odds} not representable"))
        })?;
        let payout = net_odds.checked_mul(stake).ok_or_else(|| {
            ParlayError::InvalidOdds(format!("payout overflow for odds {decimal_odds} × {stake}"))
        })?;
        Ok(payout.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
