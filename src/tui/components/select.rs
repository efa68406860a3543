//! Compact inline selector for the board's two selections
//!
//! Displays as: Label: ◀ value ▶

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::{DisplayFilter, GroupKey};

#[derive(Default, Props)]
pub struct SelectProps<'a> {
    /// Label to display before the selector
    pub label: Option<&'a str>,
    pub options: Vec<String>,
    pub selected_index: usize,
    pub has_focus: bool,
}

/// Inline selector; the arrows show the value can be cycled with h/l.
#[component]
pub fn Select<'a>(props: &SelectProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();

    let chrome_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.text_dimmed
    };
    let current_value = props
        .options
        .get(props.selected_index)
        .cloned()
        .unwrap_or_default();

    element! {
        View(flex_direction: FlexDirection::Row, gap: 1) {
            #(props.label.map(|label| element! {
                Text(
                    content: format!("{}:", label),
                    color: chrome_color,
                    weight: if props.has_focus { Weight::Bold } else { Weight::Normal },
                )
            }))
            Text(content: "◀", color: chrome_color)
            Text(content: current_value, color: theme.text, weight: Weight::Bold)
            Text(content: "▶", color: chrome_color)
        }
    }
}

/// A closed set of values that a [`Select`] can cycle through
pub trait Selectable: Sized + Clone + Copy + PartialEq + 'static {
    /// All values, in selector order
    fn all_values() -> &'static [Self];

    fn display(&self) -> String;

    fn index(&self) -> usize {
        Self::all_values()
            .iter()
            .position(|value| value == self)
            .unwrap_or(0)
    }

    /// Next value, wrapping
    fn next(&self) -> Self {
        let values = Self::all_values();
        values[(self.index() + 1) % values.len()]
    }

    /// Previous value, wrapping
    fn prev(&self) -> Self {
        let values = Self::all_values();
        values[(self.index() + values.len() - 1) % values.len()]
    }
}

impl Selectable for GroupKey {
    fn all_values() -> &'static [Self] {
        &GroupKey::ALL
    }

    fn display(&self) -> String {
        self.label().to_string()
    }
}

impl Selectable for DisplayFilter {
    fn all_values() -> &'static [Self] {
        &DisplayFilter::ALL
    }

    fn display(&self) -> String {
        self.label().to_string()
    }
}

/// Get option strings for a selectable type
pub fn options_for<T: Selectable>() -> Vec<String> {
    T::all_values().iter().map(|v| v.display()).collect()
}
