//! KanbanBoard model types for testable state management
//!
//! This module separates state (BoardState) from view (BoardViewModel)
//! enabling unit testing without the iocraft framework.

use crate::board::{ViewEvent, ViewState, reduce};
use crate::tui::components::empty_state::EmptyStateKind;
use crate::tui::components::footer::{
    Shortcut, board_shortcuts, empty_shortcuts, selector_shortcuts,
};
use crate::tui::components::select::Selectable;
use crate::types::{DisplayFilter, GroupKey, Ticket};

/// Which control receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Board,
    GroupBy,
    Display,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Board => Focus::GroupBy,
            Focus::GroupBy => Focus::Display,
            Focus::Display => Focus::Board,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Board => Focus::Display,
            Focus::GroupBy => Focus::Board,
            Focus::Display => Focus::GroupBy,
        }
    }
}

/// Raw state that changes during user interaction
#[derive(Debug, Clone, Default)]
pub struct BoardState {
    /// Tickets, selections and the derived grouped view
    pub view: ViewState,
    pub focus: Focus,
    /// Index of the selected column in the grouped view
    pub current_column: usize,
    /// Index of the selected card within the column
    pub current_row: usize,
    /// Scroll offset for each column (index of first visible card)
    pub column_scroll_offsets: Vec<usize>,
}

impl BoardState {
    pub fn is_loading(&self) -> bool {
        !self.view.is_loaded()
    }

    /// Number of tickets in a column of the current view
    pub fn column_len(&self, column: usize) -> usize {
        self.view.view().get(column).map_or(0, |group| group.len())
    }

    pub fn column_count(&self) -> usize {
        self.view.view().len()
    }

    /// The ticket under the cursor, if any
    pub fn selected_ticket(&self) -> Option<&Ticket> {
        self.view
            .view()
            .get(self.current_column)?
            .tickets
            .get(self.current_row)
    }

    fn apply_view_event(&mut self, event: ViewEvent) {
        let view = std::mem::take(&mut self.view);
        self.view = reduce(view, event);
        self.reset_navigation();
    }

    /// Columns change whenever the view is recomputed
    fn reset_navigation(&mut self) {
        self.current_column = 0;
        self.current_row = 0;
        self.column_scroll_offsets = vec![0; self.column_count()];
    }

    fn set_scroll(&mut self, column: usize, offset: usize) {
        if column >= self.column_scroll_offsets.len() {
            self.column_scroll_offsets.resize(column + 1, 0);
        }
        self.column_scroll_offsets[column] = offset;
    }

    fn scroll(&self, column: usize) -> usize {
        self.column_scroll_offsets.get(column).copied().unwrap_or(0)
    }

    /// Clamp the row to the current column and re-center its scroll
    fn settle(&mut self, column_height: usize) {
        let col = self.current_column;
        let total = self.column_len(col);
        self.current_row = self.current_row.min(total.saturating_sub(1));
        let offset = adjust_column_scroll(self.current_row, column_height, total);
        self.set_scroll(col, offset);
    }
}

/// All possible actions on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardAction {
    // Data
    /// The one-shot fetch finished (failures arrive as an empty collection)
    TicketsLoaded(Vec<Ticket>),

    // Selections
    SetGroupBy(GroupKey),
    SetDisplay(DisplayFilter),
    NextGroupBy,
    PrevGroupBy,
    NextDisplay,
    PrevDisplay,

    // Focus
    FocusNext,
    FocusPrev,
    /// Return focus to the columns
    FocusBoard,

    // Navigation
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    GoToTop,
    GoToBottom,
    PageDown,
    PageUp,

    // App
    Quit,
}

/// Computed view model for rendering
#[derive(Debug, Clone)]
pub struct BoardViewModel {
    pub columns: Vec<ColumnViewModel>,
    pub group_by: GroupKey,
    pub display: DisplayFilter,
    pub focus: Focus,
    pub selected_ticket: Option<Ticket>,
    /// Empty state to display instead of columns (if any)
    pub empty_state: Option<EmptyStateKind>,
    /// Keyboard shortcuts to display in footer
    pub shortcuts: Vec<Shortcut>,
    /// Tickets that passed the display filter
    pub visible_tickets: usize,
    /// All fetched tickets
    pub total_tickets: usize,
}

/// View model for a single column
#[derive(Debug, Clone)]
pub struct ColumnViewModel {
    /// Group label shown as the column header
    pub label: String,
    /// Whether this column holds the cursor
    pub is_active: bool,
    pub ticket_count: usize,
    /// Cards in the visible window
    pub cards: Vec<CardViewModel>,
    pub scroll_offset: usize,
    pub hidden_above: usize,
    pub hidden_below: usize,
}

/// View model for a single ticket card
#[derive(Debug, Clone)]
pub struct CardViewModel {
    pub ticket: Ticket,
    pub is_selected: bool,
}

// ============================================================================
// Pure Functions
// ============================================================================

/// Which empty state, if any, replaces the columns
pub fn compute_empty_state(state: &BoardState) -> Option<EmptyStateKind> {
    if state.is_loading() {
        Some(EmptyStateKind::Loading)
    } else if state.view.tickets().is_empty() {
        Some(EmptyStateKind::NoTickets)
    } else if state.view.view().is_empty() {
        Some(EmptyStateKind::NoMatches)
    } else {
        None
    }
}

/// Pure function: compute view model from state
///
/// `column_height` is the number of cards that fit in a column.
pub fn compute_board_view_model(state: &BoardState, column_height: usize) -> BoardViewModel {
    let empty_state = compute_empty_state(state);
    let board_focused = state.focus == Focus::Board;

    let shortcuts = if !board_focused {
        selector_shortcuts()
    } else if empty_state.is_some() {
        empty_shortcuts()
    } else {
        board_shortcuts()
    };

    let columns = state
        .view
        .view()
        .iter()
        .enumerate()
        .map(|(col_idx, group)| {
            let is_active = board_focused && state.current_column == col_idx;
            let total = group.len();
            let scroll_offset = state.scroll(col_idx);

            let start = scroll_offset.min(total);
            let end = (scroll_offset + column_height).min(total);

            let cards = group
                .tickets
                .iter()
                .enumerate()
                .skip(start)
                .take(end - start)
                .map(|(row_idx, ticket)| CardViewModel {
                    ticket: ticket.clone(),
                    is_selected: is_active && row_idx == state.current_row,
                })
                .collect();

            ColumnViewModel {
                label: group.label.clone(),
                is_active,
                ticket_count: total,
                cards,
                scroll_offset,
                hidden_above: start,
                hidden_below: total.saturating_sub(end),
            }
        })
        .collect();

    BoardViewModel {
        columns,
        group_by: state.view.group_by(),
        display: state.view.display(),
        focus: state.focus,
        selected_ticket: state.selected_ticket().cloned(),
        empty_state,
        shortcuts,
        visible_tickets: state.view.view().ticket_count(),
        total_tickets: state.view.tickets().len(),
    }
}

/// Adjust scroll offset to keep selected row vertically centered.
///
/// Clamps to valid scroll bounds (0 to max_scroll) near the top or bottom.
fn adjust_column_scroll(selected_row: usize, column_height: usize, total_items: usize) -> usize {
    if column_height == 0 || total_items == 0 {
        return 0;
    }

    let ideal_offset = selected_row.saturating_sub(column_height / 2);
    let max_offset = total_items.saturating_sub(column_height);
    ideal_offset.min(max_offset)
}

/// Pure function: apply action to state (reducer pattern)
///
/// Selection changes recompute the view and reset navigation. `Quit` is
/// handled by the component.
pub fn reduce_board_state(
    mut state: BoardState,
    action: BoardAction,
    column_height: usize,
) -> BoardState {
    match action {
        BoardAction::TicketsLoaded(tickets) => {
            if state.view.is_loaded() {
                tracing::debug!("ignoring repeated ticket load");
            } else {
                tracing::debug!(count = tickets.len(), "tickets loaded");
                state.apply_view_event(ViewEvent::TicketsLoaded(tickets));
            }
        }

        // Selections
        BoardAction::SetGroupBy(group_by) => {
            tracing::debug!(attribute = group_by.attribute(), "group by changed");
            state.apply_view_event(ViewEvent::SetGroupBy(group_by));
        }
        BoardAction::SetDisplay(display) => {
            tracing::debug!(%display, "display filter changed");
            state.apply_view_event(ViewEvent::SetDisplay(display));
        }
        BoardAction::NextGroupBy => {
            let next = state.view.group_by().next();
            return reduce_board_state(state, BoardAction::SetGroupBy(next), column_height);
        }
        BoardAction::PrevGroupBy => {
            let prev = state.view.group_by().prev();
            return reduce_board_state(state, BoardAction::SetGroupBy(prev), column_height);
        }
        BoardAction::NextDisplay => {
            let next = state.view.display().next();
            return reduce_board_state(state, BoardAction::SetDisplay(next), column_height);
        }
        BoardAction::PrevDisplay => {
            let prev = state.view.display().prev();
            return reduce_board_state(state, BoardAction::SetDisplay(prev), column_height);
        }

        // Focus
        BoardAction::FocusNext => state.focus = state.focus.next(),
        BoardAction::FocusPrev => state.focus = state.focus.prev(),
        BoardAction::FocusBoard => state.focus = Focus::Board,

        // Navigation
        BoardAction::MoveLeft => {
            if state.current_column > 0 {
                state.current_column -= 1;
                state.settle(column_height);
            }
        }
        BoardAction::MoveRight => {
            if state.current_column + 1 < state.column_count() {
                state.current_column += 1;
                state.settle(column_height);
            }
        }
        BoardAction::MoveUp => {
            state.current_row = state.current_row.saturating_sub(1);
            state.settle(column_height);
        }
        BoardAction::MoveDown => {
            state.current_row += 1;
            state.settle(column_height);
        }
        BoardAction::GoToTop => {
            state.current_row = 0;
            state.settle(column_height);
        }
        BoardAction::GoToBottom => {
            state.current_row = state.column_len(state.current_column).saturating_sub(1);
            state.settle(column_height);
        }
        BoardAction::PageDown => {
            state.current_row += (column_height / 2).max(1);
            state.settle(column_height);
        }
        BoardAction::PageUp => {
            state.current_row = state.current_row.saturating_sub((column_height / 2).max(1));
            state.settle(column_height);
        }

        BoardAction::Quit => {}
    }
    state
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_COLUMN_HEIGHT: usize = 4;

    fn ticket(id: i64, status: &str, priority: i64) -> Ticket {
        Ticket {
            status: Some(status.to_string()),
            priority: Some(priority),
            ..Ticket::new(id)
        }
    }

    fn loaded(tickets: Vec<Ticket>) -> BoardState {
        reduce_board_state(
            BoardState::default(),
            BoardAction::TicketsLoaded(tickets),
            TEST_COLUMN_HEIGHT,
        )
    }

    fn three_columns() -> BoardState {
        loaded(vec![
            ticket(1, "Todo", 4),
            ticket(2, "In progress", 1),
            ticket(3, "Todo", 2),
            ticket(4, "Done", 3),
        ])
    }

    fn long_column(n: i64) -> BoardState {
        loaded((0..n).map(|i| ticket(i, "Todo", 2)).collect())
    }

    fn apply(state: BoardState, actions: &[BoardAction]) -> BoardState {
        actions.iter().cloned().fold(state, |s, a| {
            reduce_board_state(s, a, TEST_COLUMN_HEIGHT)
        })
    }

    // ========================================================================
    // Loading
    // ========================================================================

    #[test]
    fn test_initial_state_is_loading() {
        let state = BoardState::default();
        assert!(state.is_loading());
        assert_eq!(compute_empty_state(&state), Some(EmptyStateKind::Loading));
    }

    #[test]
    fn test_load_groups_by_status() {
        let state = three_columns();
        assert!(!state.is_loading());
        assert_eq!(state.view.view().labels(), vec!["Todo", "In progress", "Done"]);
        assert_eq!(state.column_scroll_offsets, vec![0, 0, 0]);
    }

    #[test]
    fn test_second_load_is_ignored() {
        let state = apply(three_columns(), &[BoardAction::TicketsLoaded(vec![])]);
        assert_eq!(state.view.tickets().len(), 4);
    }

    #[test]
    fn test_failed_load_shows_no_tickets() {
        let state = loaded(vec![]);
        assert_eq!(compute_empty_state(&state), Some(EmptyStateKind::NoTickets));
    }

    #[test]
    fn test_selection_before_load_is_kept() {
        let state = apply(
            BoardState::default(),
            &[
                BoardAction::SetGroupBy(GroupKey::Priority),
                BoardAction::TicketsLoaded(vec![ticket(1, "Todo", 4), ticket(2, "Todo", 1)]),
            ],
        );
        assert_eq!(state.view.view().labels(), vec!["4", "1"]);
    }

    // ========================================================================
    // Selections
    // ========================================================================

    #[test]
    fn test_cycle_group_by() {
        let state = apply(three_columns(), &[BoardAction::NextGroupBy, BoardAction::NextGroupBy]);
        assert_eq!(state.view.group_by(), GroupKey::Priority);

        let state = apply(state, &[BoardAction::NextGroupBy]);
        assert_eq!(state.view.group_by(), GroupKey::Status);

        let state = apply(state, &[BoardAction::PrevGroupBy]);
        assert_eq!(state.view.group_by(), GroupKey::Priority);
    }

    #[test]
    fn test_selection_change_resets_navigation() {
        let state = apply(
            three_columns(),
            &[BoardAction::MoveRight, BoardAction::MoveRight, BoardAction::NextDisplay],
        );
        assert_eq!(state.view.display(), DisplayFilter::HighPriority);
        assert_eq!(state.current_column, 0);
        assert_eq!(state.current_row, 0);
        assert_eq!(state.column_scroll_offsets.len(), state.column_count());
    }

    #[test]
    fn test_filter_and_group_by_both_apply() {
        let state = apply(
            three_columns(),
            &[
                BoardAction::SetDisplay(DisplayFilter::LowPriority),
                BoardAction::SetGroupBy(GroupKey::Priority),
            ],
        );
        assert_eq!(state.view.view().labels(), vec!["1", "2"]);
    }

    #[test]
    fn test_no_matches_empty_state() {
        let state = apply(
            loaded(vec![ticket(1, "Todo", 1)]),
            &[BoardAction::SetDisplay(DisplayFilter::HighPriority)],
        );
        assert_eq!(compute_empty_state(&state), Some(EmptyStateKind::NoMatches));
    }

    // ========================================================================
    // Focus
    // ========================================================================

    #[test]
    fn test_focus_cycles() {
        let state = apply(three_columns(), &[BoardAction::FocusNext]);
        assert_eq!(state.focus, Focus::GroupBy);
        let state = apply(state, &[BoardAction::FocusNext, BoardAction::FocusNext]);
        assert_eq!(state.focus, Focus::Board);
        let state = apply(state, &[BoardAction::FocusPrev]);
        assert_eq!(state.focus, Focus::Display);
        let state = apply(state, &[BoardAction::FocusBoard]);
        assert_eq!(state.focus, Focus::Board);
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    #[test]
    fn test_move_right_stops_at_last_column() {
        let state = apply(
            three_columns(),
            &[BoardAction::MoveRight, BoardAction::MoveRight, BoardAction::MoveRight],
        );
        assert_eq!(state.current_column, 2);
    }

    #[test]
    fn test_move_left_stops_at_first_column() {
        let state = apply(three_columns(), &[BoardAction::MoveLeft]);
        assert_eq!(state.current_column, 0);
    }

    #[test]
    fn test_row_is_clamped_when_changing_column() {
        let state = apply(three_columns(), &[BoardAction::MoveDown, BoardAction::MoveRight]);
        assert_eq!(state.current_column, 1);
        assert_eq!(state.current_row, 0);
    }

    #[test]
    fn test_move_down_stops_at_last_card() {
        let state = apply(
            three_columns(),
            &[BoardAction::MoveDown, BoardAction::MoveDown, BoardAction::MoveDown],
        );
        assert_eq!(state.current_row, 1);
        assert_eq!(state.selected_ticket().map(|t| t.id.to_string()), Some("3".to_string()));
    }

    #[test]
    fn test_scroll_down_keeps_selection_centered() {
        let state = apply(long_column(10), &vec![BoardAction::MoveDown; 5]);
        assert_eq!(state.current_row, 5);
        assert_eq!(state.column_scroll_offsets[0], 3);
    }

    #[test]
    fn test_go_to_bottom_and_top() {
        let state = apply(long_column(10), &[BoardAction::GoToBottom]);
        assert_eq!(state.current_row, 9);
        assert_eq!(state.column_scroll_offsets[0], 6);

        let state = apply(state, &[BoardAction::GoToTop]);
        assert_eq!(state.current_row, 0);
        assert_eq!(state.column_scroll_offsets[0], 0);
    }

    #[test]
    fn test_page_navigation() {
        let state = apply(long_column(10), &[BoardAction::PageDown]);
        assert_eq!(state.current_row, 2);
        let state = apply(state, &[BoardAction::PageDown, BoardAction::PageUp]);
        assert_eq!(state.current_row, 2);
    }

    #[test]
    fn test_navigation_on_empty_board() {
        let state = apply(
            loaded(vec![]),
            &[BoardAction::MoveDown, BoardAction::MoveRight, BoardAction::GoToBottom],
        );
        assert_eq!(state.current_column, 0);
        assert_eq!(state.current_row, 0);
        assert!(state.selected_ticket().is_none());
    }

    // ========================================================================
    // View model
    // ========================================================================

    #[test]
    fn test_view_model_columns() {
        let vm = compute_board_view_model(&three_columns(), TEST_COLUMN_HEIGHT);
        assert!(vm.empty_state.is_none());
        assert_eq!(vm.columns.len(), 3);
        assert_eq!(vm.columns[0].label, "Todo");
        assert_eq!(vm.columns[0].ticket_count, 2);
        assert!(vm.columns[0].is_active);
        assert!(vm.columns[0].cards[0].is_selected);
        assert!(!vm.columns[1].is_active);
        assert_eq!(vm.visible_tickets, 4);
        assert_eq!(vm.total_tickets, 4);
        assert_eq!(vm.shortcuts, board_shortcuts());
    }

    #[test]
    fn test_view_model_shows_hidden_counts() {
        let state = apply(long_column(10), &vec![BoardAction::MoveDown; 5]);
        let vm = compute_board_view_model(&state, TEST_COLUMN_HEIGHT);
        let column = &vm.columns[0];
        assert_eq!(column.cards.len(), 4);
        assert_eq!(column.hidden_above, 3);
        assert_eq!(column.hidden_below, 3);
    }

    #[test]
    fn test_view_model_selector_focus_deactivates_columns() {
        let state = apply(three_columns(), &[BoardAction::FocusNext]);
        let vm = compute_board_view_model(&state, TEST_COLUMN_HEIGHT);
        assert_eq!(vm.focus, Focus::GroupBy);
        assert!(vm.columns.iter().all(|c| !c.is_active));
        assert_eq!(vm.shortcuts, selector_shortcuts());
    }

    #[test]
    fn test_view_model_counts_with_filter() {
        let state = apply(three_columns(), &[BoardAction::SetDisplay(DisplayFilter::HighPriority)]);
        let vm = compute_board_view_model(&state, TEST_COLUMN_HEIGHT);
        assert_eq!(vm.visible_tickets, 2);
        assert_eq!(vm.total_tickets, 4);
        assert_eq!(vm.display, DisplayFilter::HighPriority);
    }

    #[test]
    fn test_view_model_loading_uses_empty_shortcuts() {
        let vm = compute_board_view_model(&BoardState::default(), TEST_COLUMN_HEIGHT);
        assert_eq!(vm.empty_state, Some(EmptyStateKind::Loading));
        assert!(vm.columns.is_empty());
        assert_eq!(vm.shortcuts, empty_shortcuts());
    }
}
