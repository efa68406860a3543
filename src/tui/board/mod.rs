//! Kanban board view (`kanban board`)
//!
//! Fetches the tickets once on mount and shows them as columns grouped by the
//! current group-by selection, filtered by the display selection.

pub mod handlers;
pub mod model;

use iocraft::prelude::*;

use crate::source::{Source, load_tickets};
use crate::tui::components::select::{Selectable, options_for};
use crate::tui::components::ticket_card::CARD_HEIGHT;
use crate::tui::components::{EmptyState, Footer, Select, TicketCard};
use crate::tui::theme::theme;
use crate::types::{DisplayFilter, GroupKey};

use handlers::key_to_action;
use model::{BoardAction, BoardState, Focus, compute_board_view_model, reduce_board_state};

/// Rows taken by header, selector bar, column headers and footer
const CHROME_HEIGHT: u16 = 7;

/// Number of cards that fit in a column for a terminal height
pub fn cards_per_column(height: u16) -> usize {
    let available = height.saturating_sub(CHROME_HEIGHT);
    // Reserve two rows for the scroll indicators
    (available.saturating_sub(2) / CARD_HEIGHT).max(1) as usize
}

#[derive(Default, Props)]
pub struct KanbanBoardProps {
    /// Where tickets come from; `None` renders an empty board
    pub source: Option<Source>,
}

/// Main kanban board component
///
/// Layout:
/// ```text
/// +------------------------------------------+
/// | Kanban                        12 tickets |
/// | Group By: ◀ Status ▶  Display: ◀ All ▶   |
/// +--------+--------+--------+--------+------+
/// |  Todo  | In pro |  Done  | Backlo | Canc |
/// |   3    |   1    |   2    |   5    |  1   |
/// +--------+--------+--------+--------+------+
/// | Card1  | Card1  | Card1  | Card1  | Card |
/// | Card2  | ...    | Card2  | Card2  | ...  |
/// +--------+--------+--------+--------+------+
/// | Footer with shortcuts                    |
/// +------------------------------------------+
/// ```
#[component]
pub fn KanbanBoard<'a>(props: &KanbanBoardProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let mut state: State<BoardState> = hooks.use_state(BoardState::default);
    let mut should_exit = hooks.use_state(|| false);

    let column_height = cards_per_column(height);

    // One-shot fetch; failures come back as an empty collection
    let load_handler: Handler<()> = hooks.use_async_handler({
        let source = props.source.clone();
        move |()| {
            let source = source.clone();
            let mut state = state;
            async move {
                let tickets = match &source {
                    Some(source) => load_tickets(source).await,
                    None => Vec::new(),
                };
                let current = state.read().clone();
                state.set(reduce_board_state(
                    current,
                    BoardAction::TicketsLoaded(tickets),
                    column_height,
                ));
            }
        }
    });

    let mut load_started = hooks.use_state(|| false);
    if !load_started.get() {
        load_started.set(true);
        load_handler.clone()(());
    }

    hooks.use_terminal_events({
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let focus = state.read().focus;
                match key_to_action(code, modifiers, focus) {
                    Some(BoardAction::Quit) => should_exit.set(true),
                    Some(action) => {
                        let current = state.read().clone();
                        state.set(reduce_board_state(current, action, column_height));
                    }
                    None => {}
                }
            }
            _ => {}
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let vm = compute_board_view_model(&state.read(), column_height);
    let theme = theme();

    let column_count = vm.columns.len().max(1) as u32;
    let card_width = (width as u32 / column_count).saturating_sub(2);

    let counts = if vm.visible_tickets == vm.total_tickets {
        format!("{} tickets", vm.total_tickets)
    } else {
        format!("{} of {} tickets", vm.visible_tickets, vm.total_tickets)
    };

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
        ) {
            // Header
            View(
                width: 100pct,
                height: 1,
                flex_direction: FlexDirection::Row,
                flex_shrink: 0.0,
                justify_content: JustifyContent::SpaceBetween,
                padding_left: 1,
                padding_right: 1,
                background_color: theme.highlight,
            ) {
                Text(content: "Kanban", color: theme.text, weight: Weight::Bold)
                Text(content: counts, color: theme.text)
            }

            // Selection controls
            View(
                width: 100pct,
                height: 1,
                flex_direction: FlexDirection::Row,
                flex_shrink: 0.0,
                gap: 4,
                padding_left: 1,
                margin_top: 1,
            ) {
                Select(
                    label: Some("Group By"),
                    options: options_for::<GroupKey>(),
                    selected_index: vm.group_by.index(),
                    has_focus: vm.focus == Focus::GroupBy,
                )
                Select(
                    label: Some("Display"),
                    options: options_for::<DisplayFilter>(),
                    selected_index: vm.display.index(),
                    has_focus: vm.focus == Focus::Display,
                )
            }

            #(if let Some(kind) = vm.empty_state {
                element! {
                    View(flex_grow: 1.0, width: 100pct) {
                        EmptyState(kind: kind, filter_label: Some(vm.display.label().to_string()))
                    }
                }
            } else {
                element! {
                    View(
                        flex_grow: 1.0,
                        width: 100pct,
                        flex_direction: FlexDirection::Row,
                        margin_top: 1,
                        overflow: Overflow::Hidden,
                    ) {
                        #(vm.columns.iter().map(|column| {
                            let header_color = if column.is_active { theme.border_focused } else { theme.text_dimmed };
                            let label_color = if vm.group_by == GroupKey::Status {
                                theme.status_color(&column.label)
                            } else {
                                theme.text
                            };

                            element! {
                                View(
                                    flex_grow: 1.0,
                                    height: 100pct,
                                    flex_direction: FlexDirection::Column,
                                    padding_left: 1,
                                    padding_right: 1,
                                    border_edges: Edges::Right,
                                    border_style: BorderStyle::Single,
                                    border_color: theme.border,
                                    overflow: Overflow::Hidden,
                                ) {
                                    // Column header
                                    View(
                                        width: 100pct,
                                        flex_direction: FlexDirection::Column,
                                        flex_shrink: 0.0,
                                        align_items: AlignItems::Center,
                                        border_edges: Edges::Bottom,
                                        border_style: BorderStyle::Single,
                                        border_color: header_color,
                                    ) {
                                        Text(
                                            content: column.label.clone(),
                                            color: label_color,
                                            weight: if column.is_active { Weight::Bold } else { Weight::Normal },
                                        )
                                        Text(content: column.ticket_count.to_string(), color: theme.text_dimmed)
                                    }

                                    #((column.hidden_above > 0).then(|| element! {
                                        View(height: 1, flex_shrink: 0.0) {
                                            Text(
                                                content: format!("  {} more above", column.hidden_above),
                                                color: theme.text_dimmed,
                                            )
                                        }
                                    }))

                                    #(column.cards.iter().map(|card| element! {
                                        TicketCard(
                                            ticket: Some(card.ticket.clone()),
                                            is_selected: card.is_selected,
                                            width: Some(card_width),
                                        )
                                    }))

                                    View(flex_grow: 1.0)

                                    #((column.hidden_below > 0).then(|| element! {
                                        View(height: 1, flex_shrink: 0.0) {
                                            Text(
                                                content: format!("  {} more below", column.hidden_below),
                                                color: theme.text_dimmed,
                                            )
                                        }
                                    }))
                                }
                            }
                        }))
                    }
                }
            })

            Footer(shortcuts: vm.shortcuts.clone())
        }
    }
}
