//! Pricing and selection: odds conversion, parlay aggregation, and
//! confidence-ranked leg selection.

pub mod odds;
pub mod optimizer;
pub mod parlay;

pub use odds::OddsConverter;
pub use optimizer::{SelectionConfig, SelectionOptimizer};
pub use parlay::{ParlayAggregator, ParlayQuote};
