//! PARLAY — multi-leg ticket construction and odds-calculation engine.
//!
//! Library crate exposing all modules for use by integration tests and
//! embedding applications.

pub mod config;
pub mod engine;
pub mod logging;
pub mod source;
pub mod strategy;
pub mod types;

pub use engine::{TicketController, TicketSnapshot};
pub use types::{AmericanOdds, Leg, ParlayError, Sport, TicketState};
