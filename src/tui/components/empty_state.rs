//! Empty state component
//!
//! Shown in place of the columns while loading, when the source returned no
//! tickets, or when the display filter hides all of them.

use iocraft::prelude::*;

use crate::tui::theme::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyStateKind {
    /// Waiting for the ticket fetch
    Loading,
    /// Fetch finished with no tickets (including a failed fetch)
    #[default]
    NoTickets,
    /// Tickets exist but none pass the display filter
    NoMatches,
}

#[derive(Default, Props)]
pub struct EmptyStateProps {
    pub kind: EmptyStateKind,
    /// Active display filter label, for NoMatches
    pub filter_label: Option<String>,
}

#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let (icon, title, message, hint) = match props.kind {
        EmptyStateKind::Loading => ("~", "Loading", "Fetching tickets...", ""),
        EmptyStateKind::NoTickets => (
            "i",
            "No Tickets",
            "There are no tickets to show.",
            "Check the endpoint with 'kanban config get endpoint'.",
        ),
        EmptyStateKind::NoMatches => (
            "?",
            "No Matches",
            "No tickets match the display filter.",
            "Press 'f' to change the display filter.",
        ),
    };

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 2,
        ) {
            View(
                width: 5,
                height: 3,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: theme.border,
                margin_bottom: 1,
            ) {
                Text(content: icon, color: theme.text_dimmed, weight: Weight::Bold)
            }

            Text(content: title, color: theme.text, weight: Weight::Bold)

            View(margin_top: 1, max_width: 60) {
                Text(content: message, color: theme.text_dimmed)
            }

            #(match (&props.filter_label, props.kind) {
                (Some(label), EmptyStateKind::NoMatches) => Some(element! {
                    View(margin_top: 1) {
                        Text(content: format!("Display: {}", label), color: theme.highlight)
                    }
                }),
                _ => None,
            })

            #((!hint.is_empty()).then(|| element! {
                View(margin_top: 2) {
                    Text(content: hint, color: theme.text_dimmed)
                }
            }))
        }
    }
}
