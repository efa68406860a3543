//! Non-interactive rendering of the grouped view for `kanban show`.

use owo_colors::OwoColorize;

use crate::board::ViewState;
use crate::error::Result;
use crate::grouping::GroupedView;
use crate::types::{Ticket, priority_name};

/// Priority line, e.g. "P4 Urgent", or "-" when the ticket has none
pub fn priority_badge(priority: Option<i64>) -> String {
    match priority {
        Some(p) => match priority_name(p) {
            Some(name) => format!("P{p} {name}"),
            None => format!("P{p}"),
        },
        None => "-".to_string(),
    }
}

fn paint(text: String, colored: bool, style: impl Fn(&str) -> String) -> String {
    if colored { style(&text) } else { text }
}

fn paint_status(label: String, colored: bool) -> String {
    paint(label, colored, |s| match s.trim().to_ascii_lowercase().as_str() {
        "todo" => s.yellow().to_string(),
        "in progress" => s.cyan().to_string(),
        "done" => s.green().to_string(),
        "backlog" | "canceled" | "cancelled" => s.dimmed().to_string(),
        _ => s.bold().to_string(),
    })
}

fn paint_priority(badge: String, priority: Option<i64>, colored: bool) -> String {
    paint(badge, colored, |s| match priority {
        Some(4) => s.red().to_string(),
        Some(3) => s.yellow().to_string(),
        _ => s.to_string(),
    })
}

/// Format a ticket for single-line display
pub fn format_ticket_line(ticket: &Ticket, colored: bool) -> String {
    let id = paint(format!("{:<8}", ticket.id), colored, |s| s.cyan().to_string());
    let priority = paint_priority(
        format!("{:<14}", priority_badge(ticket.priority)),
        ticket.priority,
        colored,
    );
    let assignee = paint(format!("{:<12}", ticket.assignee()), colored, |s| {
        s.dimmed().to_string()
    });

    format!("  {id} {priority} {assignee} {}", ticket.title())
        .trim_end()
        .to_string()
}

/// Render the current view as plain text, one block per group
pub fn render_text(state: &ViewState, colored: bool) -> String {
    let view = state.view();
    let total = state.tickets().len();
    let visible = view.ticket_count();

    let counts = if visible == total {
        format!("{total} tickets")
    } else {
        format!("{visible} of {total} tickets")
    };
    let mut out = format!(
        "Group by: {} | Display: {} | {counts}\n",
        state.group_by().label(),
        state.display().label()
    );

    if total == 0 {
        out.push_str("\nNo tickets.\n");
        return out;
    }
    if view.is_empty() {
        out.push_str("\nNo tickets match the display filter.\n");
        return out;
    }

    for group in view {
        out.push('\n');
        let heading = format!("{} ({})", group.label, group.len());
        out.push_str(&paint_status(heading, colored));
        out.push('\n');
        for ticket in &group.tickets {
            out.push_str(&format_ticket_line(ticket, colored));
            out.push('\n');
        }
    }
    out
}

/// Render the grouped view as pretty JSON: `[{"group": ..., "tickets": [...]}]`
pub fn render_json(view: &GroupedView) -> Result<String> {
    Ok(serde_json::to_string_pretty(view)?)
}
