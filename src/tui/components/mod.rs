//! Reusable components for the kanban board

pub mod empty_state;
pub mod footer;
pub mod select;
pub mod shortcuts;
pub mod ticket_card;

pub use empty_state::{EmptyState, EmptyStateKind, EmptyStateProps};
pub use footer::{
    Footer, FooterProps, Shortcut, board_shortcuts, empty_shortcuts, selector_shortcuts,
};
pub use select::{Select, SelectProps, Selectable, options_for};
pub use ticket_card::{TicketCard, TicketCardProps};
