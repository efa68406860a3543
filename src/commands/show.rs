//! One-shot board rendering (`kanban show`)

use std::env;

use crate::board::{ViewEvent, ViewState, reduce};
use crate::display::{render_json, render_text};
use crate::error::Result;
use crate::source::{TicketSource, load_tickets};
use crate::types::{DisplayFilter, GroupKey};

/// Whether `show` output should carry ANSI colors
pub fn should_color(no_color: bool) -> bool {
    !no_color && env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

/// Fetch once, derive the view for the given selections and print it
pub async fn cmd_show<S: TicketSource>(
    source: &S,
    group_by: GroupKey,
    display: DisplayFilter,
    json: bool,
    colored: bool,
) -> Result<()> {
    let tickets = load_tickets(source).await;

    let state = [
        ViewEvent::TicketsLoaded(tickets),
        ViewEvent::SetGroupBy(group_by),
        ViewEvent::SetDisplay(display),
    ]
    .into_iter()
    .fold(ViewState::new(), reduce);

    if json {
        println!("{}", render_json(state.view())?);
    } else {
        print!("{}", render_text(&state, colored));
    }
    Ok(())
}
