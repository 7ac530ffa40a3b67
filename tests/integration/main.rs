//! Integration tests for the ticket engine.

mod fixtures;
mod properties;
mod ticket_flow;
