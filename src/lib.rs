pub mod board;
pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod grouping;
pub mod logging;
pub mod source;
pub mod tui;
pub mod types;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_guards;

pub use board::{LoadPhase, ViewEvent, ViewState, reduce};
pub use config::Config;
pub use error::{KanbanError, Result};
pub use grouping::{GroupedView, TicketGroup, filter_tickets, group_label, group_tickets};
pub use source::{FileSource, HttpSource, Source, TicketSource, load_tickets};
pub use types::{DisplayFilter, GroupKey, Ticket, TicketId};
