//! Ticket card component for kanban board
//!
//! A compact card showing id, title (wrapped), priority, status and assignee.

use iocraft::prelude::*;

use crate::display::priority_badge;
use crate::tui::theme::theme;
use crate::types::Ticket;
use crate::utils::{truncate_string, wrap_text_lines};

/// Lines a card occupies including its border, used for column paging
pub const CARD_HEIGHT: u16 = 7;

const TITLE_LINES: usize = 2;

#[derive(Default, Props)]
pub struct TicketCardProps {
    pub ticket: Option<Ticket>,
    pub is_selected: bool,
    /// Available width for the card (in characters)
    pub width: Option<u32>,
}

/// Compact ticket card for kanban board columns
///
/// ```text
/// ╭──────────────────╮
/// │>CAM-4            │
/// │Add Multi-Language│
/// │Support           │
/// │P3 High  Todo     │
/// │Anoop             │
/// ╰──────────────────╯
/// ```
#[component]
pub fn TicketCard(props: &TicketCardProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(ticket) = props.ticket.as_ref() else {
        return element!(View).into_any();
    };

    let selected = props.is_selected;
    let border_color = if selected {
        theme.border_focused
    } else {
        theme.border
    };
    let id_color = if selected { theme.highlight } else { theme.id_color };

    // Round border plus padding on both sides
    let card_width = props.width.unwrap_or(24);
    let title_width = (card_width.saturating_sub(4) as usize).max(8);
    let title_lines = wrap_text_lines(ticket.title(), title_width, TITLE_LINES);

    let status = truncate_string(ticket.status.as_deref().unwrap_or_default(), title_width / 2);
    let status_color = theme.status_color(&status);

    element! {
        View(
            width: 100pct,
            height: CARD_HEIGHT,
            flex_shrink: 0.0,
            flex_direction: FlexDirection::Column,
            border_style: if selected { BorderStyle::Double } else { BorderStyle::Round },
            border_color: border_color,
            padding_left: 1,
            padding_right: 1,
        ) {
            View(flex_direction: FlexDirection::Row) {
                Text(content: if selected { ">" } else { " " }, color: id_color, weight: Weight::Bold)
                Text(content: truncate_string(&ticket.id.to_string(), title_width), color: id_color, weight: Weight::Bold)
            }
            View(height: TITLE_LINES as u16, flex_direction: FlexDirection::Column) {
                #(title_lines.into_iter().map(|line| element! {
                    Text(content: line, color: theme.text)
                }))
            }
            View(flex_direction: FlexDirection::Row, gap: 2) {
                Text(
                    content: priority_badge(ticket.priority),
                    color: theme.priority_color(ticket.priority),
                    weight: if ticket.priority.unwrap_or(0) >= 3 { Weight::Bold } else { Weight::Normal },
                )
                Text(content: status, color: status_color)
            }
            Text(content: truncate_string(ticket.assignee(), title_width), color: theme.text_dimmed)
        }
    }
    .into_any()
}
