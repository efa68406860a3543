//! Keyboard shortcuts bar component
//!
//! Displays available keyboard shortcuts at the bottom of the screen.

use iocraft::prelude::*;

use super::shortcuts::ShortcutsBuilder;
use crate::tui::theme::theme;

/// A single keyboard shortcut entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    /// The key or key combination (e.g., "q", "Tab", "PgUp/PgDn")
    pub key: String,
    /// Description of the action (e.g., "Quit", "Focus")
    pub action: String,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

#[derive(Default, Props)]
pub struct FooterProps {
    pub shortcuts: Vec<Shortcut>,
}

/// Keyboard shortcuts bar at the bottom of the screen
#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            gap: 2,
            background_color: theme.border,
        ) {
            #(props.shortcuts.iter().map(|shortcut| {
                element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(
                            content: format!("[{}]", shortcut.key),
                            color: theme.highlight,
                            weight: Weight::Bold,
                        )
                        Text(
                            content: format!(" {}", shortcut.action),
                            color: theme.text,
                        )
                    }
                }
            }))
        }
    }
}

/// Shortcuts while the board has focus
pub fn board_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .with_navigation()
        .with_selections()
        .with_focus()
        .with_quit()
        .build()
}

/// Shortcuts while a selector has focus
pub fn selector_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("h/l", "Change")
        .add("Enter", "Board")
        .with_focus()
        .with_quit()
        .build()
}

/// Shortcuts shown when there are no cards to navigate
pub fn empty_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .with_selections()
        .with_focus()
        .with_quit()
        .build()
}
