//! Ticket controller.
//!
//! Owns the leg list of one builder session, enforces capacity and leg
//! validity, and re-prices the whole ticket after every mutation. The new
//! price is computed before anything is committed, so a failed operation
//! leaves the ticket exactly as it was.
//!
//! Not internally synchronised: callers serialise access to one ticket.

use rust_decimal::Decimal;
use tracing::{debug, error, info, warn};

use super::snapshot::TicketSnapshot;
use crate::config::TicketConfig;
use crate::strategy::{ParlayAggregator, ParlayQuote, SelectionConfig, SelectionOptimizer};
use crate::types::{Leg, ParlayError, TicketState};

/// Stateful façade over a single ticket.
pub struct TicketController {
    config: TicketConfig,
    optimizer: SelectionOptimizer,
    legs: Vec<Leg>,
    quote: ParlayQuote,
    /// Payout for `config.default_stake`, kept so `snapshot()` is infallible.
    payout: Decimal,
}

impl TicketController {
    /// Create an empty ticket.
    pub fn new(config: TicketConfig) -> Result<Self, ParlayError> {
        config.validate()?;
        let optimizer = SelectionOptimizer::new(SelectionConfig {
            cap: config.max_legs,
            diversity_preferred: config.diversity_preferred,
        });
        Ok(Self {
            config,
            optimizer,
            legs: Vec::new(),
            quote: ParlayQuote::EMPTY,
            payout: Decimal::ZERO,
        })
    }

    /// Access the ticket configuration.
    pub fn config(&self) -> &TicketConfig {
        &self.config
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Raw aggregator output (probability `1.0` when empty).
    pub fn quote(&self) -> &ParlayQuote {
        &self.quote
    }

    pub fn state(&self) -> TicketState {
        TicketState::from_len(self.legs.len(), self.config.max_legs)
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.legs.iter().any(|l| l.id == id)
    }

    pub fn remaining_capacity(&self) -> usize {
        self.config.max_legs.saturating_sub(self.legs.len())
    }

    // -- mutations ----------------------------------------------------------

    /// Append a leg.
    ///
    /// Fails with `CapacityExceeded` when full and `InvalidLeg` when the leg
    /// breaks its own invariants or repeats an id already on the ticket.
    pub fn add_leg(&mut self, leg: Leg) -> Result<(), ParlayError> {
        if self.state() == TicketState::Full {
            warn!(
                leg_id = %leg.id,
                max_legs = self.config.max_legs,
                "Add rejected: ticket full"
            );
            return Err(ParlayError::CapacityExceeded {
                max_legs: self.config.max_legs,
            });
        }

        if let Err(e) = leg.validate() {
            warn!(leg_id = %leg.id, error = %e, "Add rejected: invalid leg");
            return Err(e);
        }

        if self.contains(&leg.id) {
            warn!(leg_id = %leg.id, "Add rejected: duplicate leg");
            return Err(ParlayError::InvalidLeg(format!(
                "leg {} is already on the ticket",
                leg.id
            )));
        }

        let drift = leg.odds_drift();
        if drift > self.config.odds_drift_tolerance {
            warn!(
                leg_id = %leg.id,
                stated = format!("{:.1}%", leg.win_probability * 100.0),
                implied = format!("{:.1}%", leg.implied_probability() * 100.0),
                "Display odds disagree with win probability"
            );
        }

        let mut next = self.legs.clone();
        next.push(leg);
        self.commit(next)?;

        info!(
            legs = self.legs.len(),
            state = %self.state(),
            odds = %self.quote.combined_american_odds,
            "Leg added"
        );
        Ok(())
    }

    /// Remove a leg by id. Absent ids are a no-op, returning `Ok(None)`.
    pub fn remove_leg(&mut self, id: &str) -> Result<Option<Leg>, ParlayError> {
        let Some(pos) = self.legs.iter().position(|l| l.id == id) else {
            debug!(leg_id = id, "Remove skipped: leg not on ticket");
            return Ok(None);
        };

        let mut next = self.legs.clone();
        let removed = next.remove(pos);
        self.commit(next)?;

        info!(leg_id = id, legs = self.legs.len(), "Leg removed");
        Ok(Some(removed))
    }

    /// Drop every leg.
    pub fn clear(&mut self) {
        self.legs.clear();
        self.quote = ParlayQuote::EMPTY;
        self.payout = Decimal::ZERO;
        info!("Ticket cleared");
    }

    /// Re-rank and trim the current legs in place. No-op when empty.
    pub fn optimize(&mut self) -> Result<(), ParlayError> {
        if self.legs.is_empty() {
            debug!("Optimize skipped: ticket empty");
            return Ok(());
        }
        let selection = self.optimizer.select(&self.legs, &self.legs);
        self.commit(selection)?;
        info!(legs = self.legs.len(), "Ticket optimized");
        Ok(())
    }

    /// Optimize over the current legs plus a candidate pool.
    ///
    /// Invalid candidates are skipped with a warning rather than failing the
    /// whole pass.
    pub fn optimize_with(&mut self, pool: &[Leg]) -> Result<(), ParlayError> {
        let pool = Self::valid_candidates(pool);
        let selection = self.optimizer.select(&pool, &self.legs);
        self.commit(selection)?;
        info!(
            candidates = pool.len(),
            legs = self.legs.len(),
            odds = %self.quote.combined_american_odds,
            "Ticket optimized with pool"
        );
        Ok(())
    }

    /// Replace the ticket with the best selection from `pool`.
    pub fn generate(&mut self, pool: &[Leg]) -> Result<(), ParlayError> {
        let pool = Self::valid_candidates(pool);
        let selection = self.optimizer.select(&pool, &[]);
        self.commit(selection)?;
        info!(
            candidates = pool.len(),
            legs = self.legs.len(),
            odds = %self.quote.combined_american_odds,
            "Ticket generated"
        );
        Ok(())
    }

    // -- reads --------------------------------------------------------------

    /// Current legs and price at the configured default stake.
    pub fn snapshot(&self) -> TicketSnapshot {
        TicketSnapshot::new(
            &self.legs,
            self.config.max_legs,
            &self.quote,
            self.config.default_stake,
            self.payout,
        )
    }

    /// Same as [`snapshot`](Self::snapshot) for a caller-chosen stake.
    pub fn snapshot_with_stake(&self, stake: Decimal) -> Result<TicketSnapshot, ParlayError> {
        if stake < Decimal::ZERO {
            return Err(ParlayError::InvalidOdds(format!("stake {stake} is negative")));
        }
        let payout = self.quote.expected_payout(stake)?;
        Ok(TicketSnapshot::new(
            &self.legs,
            self.config.max_legs,
            &self.quote,
            stake,
            payout,
        ))
    }

    // -- internals ----------------------------------------------------------

    /// Price `legs` from scratch and, only on success, make them the ticket.
    fn commit(&mut self, legs: Vec<Leg>) -> Result<(), ParlayError> {
        let quote = ParlayAggregator::aggregate(&legs);
        let priced = quote.and_then(|q| {
            q.expected_payout(self.config.default_stake)
                .map(|payout| (q, payout))
        });

        match priced {
            Ok((quote, payout)) => {
                debug!(
                    legs = legs.len(),
                    probability = format!("{:.4}", quote.combined_probability),
                    odds = %quote.combined_american_odds,
                    payout = %payout,
                    "Ticket repriced"
                );
                self.legs = legs;
                self.quote = quote;
                self.payout = payout;
                Ok(())
            }
            Err(e) => {
                error!(legs = legs.len(), error = %e, "Repricing failed, ticket unchanged");
                Err(e)
            }
        }
    }

    fn valid_candidates(pool: &[Leg]) -> Vec<Leg> {
        pool.iter()
            .filter(|leg| match leg.validate() {
                Ok(()) => true,
                Err(e) => {
                    warn!(leg_id = %leg.id, error = %e, "Skipping invalid candidate");
                    false
                }
            })
            .cloned()
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
