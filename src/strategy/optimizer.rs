//! Leg selection.
//!
//! Ranks a candidate pool by confidence, keeps the top `cap`, and applies a
//! single best-effort swap toward sport diversity. A heuristic, not a solver:
//! it never fails and never rebalances more than once.

use std::collections::HashSet;

use tracing::debug;

use crate::types::{Leg, Sport};

/// Selection settings for one optimize pass.
#[derive(Debug, Clone, Copy)]
pub struct SelectionConfig {
    /// Maximum number of legs to return.
    pub cap: usize,
    /// Try one swap when the selection covers a single sport.
    pub diversity_preferred: bool,
}

/// Deterministic leg selector.
pub struct SelectionOptimizer {
    config: SelectionConfig,
}

impl SelectionOptimizer {
    pub fn new(config: SelectionConfig) -> Self {
        Self { config }
    }

    /// Access the selection configuration.
    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Select up to `cap` legs from `selected` ∪ `pool`.
    ///
    /// Steps:
    /// 1. Merge already-selected legs and the pool, dropping repeated ids
    ///    (first occurrence wins, so current legs take precedence).
    /// 2. Stable sort by `confidence_score` descending.
    /// 3. Keep the top `cap`.
    /// 4. If diversity is preferred and the selection holds one sport only,
    ///    swap its lowest-confidence leg for the best leftover of another sport.
    pub fn select(&self, pool: &[Leg], selected: &[Leg]) -> Vec<Leg> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut working: Vec<Leg> = selected
            .iter()
            .chain(pool.iter())
            .filter(|leg| seen.insert(leg.id.clone()))
            .cloned()
            .collect();

        // Vec::sort_by is stable: equal scores keep their merge order
        working.sort_by(|a, b| b.confidence_score.cmp(&a.confidence_score));

        let split = self.config.cap.min(working.len());
        let remainder = working.split_off(split);
        let mut selection = working;

        if self.config.diversity_preferred {
            Self::diversify(&mut selection, &remainder);
        }

        debug!(
            candidates = selection.len() + remainder.len(),
            selected = selection.len(),
            cap = self.config.cap,
            sports = distinct_sports(&selection),
            "Selection complete"
        );

        selection
    }

    /// Single substitution toward a second sport. No-op unless the selection
    /// has at least two legs, all of one sport, and the remainder offers a
    /// different one.
    fn diversify(selection: &mut [Leg], remainder: &[Leg]) {
        if selection.len() < 2 || distinct_sports(selection) >= 2 {
            return;
        }
        let sport = selection[0].sport;

        // remainder is already in descending confidence order
        let Some(replacement) = remainder.iter().find(|leg| leg.sport != sport) else {
            debug!(sport = %sport, "No other sport available, diversity swap skipped");
            return;
        };

        // lowest confidence sits last after the stable descending sort
        let slot = selection.len() - 1;
        debug!(
            removed = %selection[slot].id,
            added = %replacement.id,
            from = %sport,
            to = %replacement.sport,
            "Diversity swap"
        );
        selection[slot] = replacement.clone();
    }
}

fn distinct_sports(legs: &[Leg]) -> usize {
    legs.iter().map(|l| l.sport).collect::<HashSet<Sport>>().len()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
