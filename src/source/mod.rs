//! Pick-source collaborator.
//!
//! Defines the `PickSource` trait through which candidate legs arrive, and
//! an in-memory implementation. The ticket engine never calls a source
//! itself; callers fetch legs and hand them to `TicketController`.

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

use crate::types::{Leg, Sport};

/// Abstraction over anything that can supply scored legs.
///
/// Implementors may be remote (and slow); timeouts and retries are theirs
/// to handle.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PickSource: Send + Sync {
    /// Fetch up to `count` legs, optionally restricted to one sport.
    async fn fetch_legs(&self, sport: Option<Sport>, count: usize) -> Result<Vec<Leg>>;

    /// Source name for logging and identification.
    fn name(&self) -> &str;
}

/// A fixed, in-memory list of legs.
#[derive(Debug, Clone, Default)]
pub struct StaticPickSource {
    legs: Vec<Leg>,
}

impl StaticPickSource {
    /// Wrap an existing list. Every leg is validated.
    pub fn new(legs: Vec<Leg>) -> Result<Self> {
        for leg in &legs {
            leg.validate()
                .with_context(|| format!("Rejected leg {} from static source", leg.id))?;
        }
        Ok(Self { legs })
    }

    /// Parse a JSON array of legs.
    pub fn from_json(json: &str) -> Result<Self> {
        let legs: Vec<Leg> =
            serde_json::from_str(json).context("Failed to parse legs from JSON")?;
        Self::new(legs)
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }
}

#[async_trait]
impl PickSource for StaticPickSource {
    async fn fetch_legs(&self, sport: Option<Sport>, count: usize) -> Result<Vec<Leg>> {
        let legs: Vec<Leg> = self
            .legs
            .iter()
            .filter(|leg| sport.map_or(true, |s| leg.sport == s))
            .take(count)
            .cloned()
            .collect();
        debug!(
            source = self.name(),
            sport = ?sport,
            requested = count,
            returned = legs.len(),
            "Legs fetched"
        );
        Ok(legs)
    }

    fn name(&self) -> &str {
        "static"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
