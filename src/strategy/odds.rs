//! Odds conversion.
//!
//! Pure conversions between implied probability, decimal odds and
//! American-odds notation. Rounding (half away from zero) happens once,
//! at the end of each conversion, never on intermediate values.

use crate::types::{AmericanOdds, ParlayError};

/// Stateless converter between odds notations.
pub struct OddsConverter;

impl OddsConverter {
    /// Decimal odds (stake included) for a win probability: `1 / p`.
    ///
    /// A zero probability must never reach this function; the ticket rejects
    /// such legs on insertion, so `DivisionByZero` here means a bug upstream.
    pub fn probability_to_decimal_odds(probability: f64) -> Result<f64, ParlayError> {
        if probability.is_nan() {
            return Err(ParlayError::InvalidOdds("probability is NaN".to_string()));
        }
        if probability <= 0.0 {
            return Err(ParlayError::DivisionByZero);
        }
        Ok(1.0 / probability)
    }

    /// American odds for a decimal price.
    ///
    /// `d >= 2.0` gives `+round((d - 1) * 100)`, `1 < d < 2` gives
    /// `-round(100 / (d - 1))`. At exactly `d = 1` (a certain win) there is no
    /// line; the `EVEN` sentinel (0) is returned instead of dividing by zero.
    pub fn decimal_to_american_odds(decimal: f64) -> Result<AmericanOdds, ParlayError> {
        if !decimal.is_finite() || decimal < 1.0 {
            return Err(ParlayError::InvalidOdds(format!(
                "decimal odds {decimal} must be a finite value >= 1.0"
            )));
        }
        if decimal == 1.0 {
            return Ok(AmericanOdds::EVEN);
        }

        // f64 -> i64 casts saturate, so near-certain legs clamp rather than wrap
        let american = if decimal >= 2.0 {
            ((decimal - 1.0) * 100.0).round() as i64
        } else {
            -((100.0 / (decimal - 1.0)).round() as i64)
        };
        Ok(AmericanOdds(american))
    }

    /// Win probability implied by an American price.
    ///
    /// Used to cross-check a leg's display odds against its stated
    /// probability; never part of the combination path. The `EVEN`
    /// sentinel maps back to certainty, mirroring the forward conversion.
    pub fn american_to_implied_probability(american: i64) -> f64 {
        let a = american as f64;
        if american > 0 {
            100.0 / (a + 100.0)
        } else if american < 0 {
            let abs = a.abs();
            abs / (abs + 100.0)
        } else {
            1.0
        }
    }

    /// Convenience: probability straight to American odds.
    pub fn probability_to_american_odds(probability: f64) -> Result<AmericanOdds, ParlayError> {
        let decimal = Self::probability_to_decimal_odds(probability)?;
        Self::decimal_to_american_odds(decimal)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
