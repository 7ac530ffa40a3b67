//! Ticket engine — the stateful builder session and its read-only view.

pub mod snapshot;
pub mod ticket;

pub use snapshot::TicketSnapshot;
pub use ticket::TicketController;
