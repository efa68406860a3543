//! View state for the board: the fetched tickets, the two selections and the
//! view derived from them.
//!
//! State is only changed through [`reduce`], which returns a new state. The
//! derived view is recomputed from the full ticket collection on every event.

use std::sync::Arc;

use crate::grouping::{GroupedView, group_tickets};
use crate::types::{DisplayFilter, GroupKey, Ticket};

/// Whether the one-shot ticket fetch has completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Pending,
    Loaded,
}

/// Immutable view-state record
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    tickets: Arc<Vec<Ticket>>,
    group_by: GroupKey,
    display: DisplayFilter,
    view: GroupedView,
    phase: LoadPhase,
}

/// Events that change the view state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// The fetch finished; failures arrive here as an empty collection
    TicketsLoaded(Vec<Ticket>),
    SetGroupBy(GroupKey),
    SetDisplay(DisplayFilter),
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The full, unfiltered ticket collection
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn group_by(&self) -> GroupKey {
        self.group_by
    }

    pub fn display(&self) -> DisplayFilter {
        self.display
    }

    pub fn view(&self) -> &GroupedView {
        &self.view
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loaded(&self) -> bool {
        self.phase == LoadPhase::Loaded
    }

    fn recompute(mut self) -> Self {
        self.view = group_tickets(&self.tickets, self.group_by, self.display);
        self
    }
}

/// Apply an event to the state.
///
/// `TicketsLoaded` is accepted once; later load events leave the state as is.
pub fn reduce(state: ViewState, event: ViewEvent) -> ViewState {
    match event {
        ViewEvent::TicketsLoaded(_) if state.is_loaded() => state,
        ViewEvent::TicketsLoaded(tickets) => ViewState {
            tickets: Arc::new(tickets),
            phase: LoadPhase::Loaded,
            ..state
        }
        .recompute(),
        ViewEvent::SetGroupBy(group_by) => ViewState { group_by, ..state }.recompute(),
        ViewEvent::SetDisplay(display) => ViewState { display, ..state }.recompute(),
    }
}
