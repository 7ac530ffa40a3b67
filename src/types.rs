//! Shared types for the PARLAY engine.
//!
//! These types form the data model used across all modules. Legs are
//! validated value objects; everything derived from them (combined
//! probability, odds, payout) lives in `strategy` and `engine`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::strategy::odds::OddsConverter;

// ---------------------------------------------------------------------------
// Sport
// ---------------------------------------------------------------------------

/// Closed set of sports a leg may belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sport {
    Basketball,
    Football,
    Hockey,
    Baseball,
}

impl Sport {
    /// All known sports (useful for iteration).
    pub const ALL: &'static [Sport] = &[
        Sport::Basketball,
        Sport::Football,
        Sport::Hockey,
        Sport::Baseball,
    ];
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sport::Basketball => write!(f, "BASKETBALL"),
            Sport::Football => write!(f, "FOOTBALL"),
            Sport::Hockey => write!(f, "HOCKEY"),
            Sport::Baseball => write!(f, "BASEBALL"),
        }
    }
}

/// Parse a sport name or league abbreviation (case-insensitive).
impl std::str::FromStr for Sport {
    type Err = ParlayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basketball" | "nba" => Ok(Sport::Basketball),
            "football" | "nfl" => Ok(Sport::Football),
            "hockey" | "nhl" => Ok(Sport::Hockey),
            "baseball" | "mlb" => Ok(Sport::Baseball),
            _ => Err(ParlayError::InvalidLeg(format!("unknown sport: {s}"))),
        }
    }
}

// ---------------------------------------------------------------------------
// Leg
// ---------------------------------------------------------------------------

/// A single wager selection supplied by the pick source.
///
/// Immutable once added to a ticket. `american_odds` is display-only: the
/// engine prices tickets from `win_probability`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    pub id: String,
    pub sport: Sport,
    pub description: String,
    /// Estimated chance the leg wins, in (0, 1].
    pub win_probability: f64,
    pub american_odds: i64,
    /// Ranking score 0–100, independent of `win_probability`.
    pub confidence_score: u8,
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} (P={:.1}% | {} | conf={}%)",
            self.sport,
            self.description,
            self.win_probability * 100.0,
            AmericanOdds(self.american_odds),
            self.confidence_score,
        )
    }
}

impl Leg {
    /// Build a leg, rejecting out-of-range probability or confidence.
    pub fn new(
        id: impl Into<String>,
        sport: Sport,
        description: impl Into<String>,
        win_probability: f64,
        american_odds: i64,
        confidence_score: u8,
    ) -> Result<Self, ParlayError> {
        let leg = Leg {
            id: id.into(),
            sport,
            description: description.into(),
            win_probability,
            american_odds,
            confidence_score,
        };
        leg.validate()?;
        Ok(leg)
    }

    /// Same as [`Leg::new`] with a fresh random id.
    pub fn with_generated_id(
        sport: Sport,
        description: impl Into<String>,
        win_probability: f64,
        american_odds: i64,
        confidence_score: u8,
    ) -> Result<Self, ParlayError> {
        Self::new(
            uuid::Uuid::new_v4().to_string(),
            sport,
            description,
            win_probability,
            american_odds,
            confidence_score,
        )
    }

    /// Check the leg's invariants. Legs that arrive through serde skip the
    /// constructor, so the ticket re-checks on insertion.
    pub fn validate(&self) -> Result<(), ParlayError> {
        if self.id.trim().is_empty() {
            return Err(ParlayError::InvalidLeg("leg id is empty".to_string()));
        }
        if !self.win_probability.is_finite()
            || self.win_probability <= 0.0
            || self.win_probability > 1.0
        {
            return Err(ParlayError::InvalidLeg(format!(
                "win probability {} outside (0, 1] for leg {}",
                self.win_probability, self.id
            )));
        }
        if self.confidence_score > 100 {
            return Err(ParlayError::InvalidLeg(format!(
                "confidence score {} above 100 for leg {}",
                self.confidence_score, self.id
            )));
        }
        Ok(())
    }

    /// Probability implied by the leg's display odds.
    pub fn implied_probability(&self) -> f64 {
        OddsConverter::american_to_implied_probability(self.american_odds)
    }

    /// Absolute gap between the display odds and the stated probability.
    /// Large values usually mean the two came from different models.
    pub fn odds_drift(&self) -> f64 {
        (self.implied_probability() - self.win_probability).abs()
    }

    /// Helper to build a test/sample leg with sensible defaults.
    #[cfg(test)]
    pub fn sample(id: &str, sport: Sport, win_probability: f64, confidence_score: u8) -> Self {
        Leg {
            id: id.to_string(),
            sport,
            description: format!("Sample pick {id}"),
            win_probability,
            american_odds: OddsConverter::probability_to_american_odds(win_probability)
                .map(|o| o.value())
                .unwrap_or(0),
            confidence_score,
        }
    }
}

// ---------------------------------------------------------------------------
// Odds notation
// ---------------------------------------------------------------------------

/// American-odds price. `0` is the "no line" sentinel for a certain win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AmericanOdds(pub i64);

impl AmericanOdds {
    pub const EVEN: AmericanOdds = AmericanOdds(0);

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Whether this is the 100%-probability sentinel.
    pub fn is_even(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for AmericanOdds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 > 0 {
            write!(f, "+{}", self.0)
        } else if self.0 < 0 {
            write!(f, "{}", self.0)
        } else {
            write!(f, "EVEN")
        }
    }
}

// ---------------------------------------------------------------------------
// Ticket state
// ---------------------------------------------------------------------------

/// Builder lifecycle of a ticket, derived from its leg count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketState {
    Empty,
    Building,
    Full,
}

impl TicketState {
    pub fn from_len(len: usize, max_legs: usize) -> Self {
        if len == 0 {
            TicketState::Empty
        } else if len >= max_legs {
            TicketState::Full
        } else {
            TicketState::Building
        }
    }
}

impl fmt::Display for TicketState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketState::Empty => write!(f, "EMPTY"),
            TicketState::Building => write!(f, "BUILDING"),
            TicketState::Full => write!(f, "FULL"),
        }
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Domain-specific error types for PARLAY.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParlayError {
    #[error("Invalid leg: {0}")]
    InvalidLeg(String),

    #[error("Ticket is full: at most {max_legs} legs allowed")]
    CapacityExceeded { max_legs: usize },

    /// A zero probability reached odds conversion. Always a bug upstream.
    #[error("Division by zero in odds conversion (zero-probability leg reached the aggregator)")]
    DivisionByZero,

    #[error("Invalid odds: {0}")]
    InvalidOdds(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
