//! Builder for footer shortcut lists

use super::Shortcut;

#[derive(Default)]
pub struct ShortcutsBuilder {
    shortcuts: Vec<Shortcut>,
}

impl ShortcutsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add hjkl, g/G and paging for card navigation
    pub fn with_navigation(self) -> Self {
        self.add("h/l", "Column")
            .add("j/k", "Card")
            .add("g/G", "Top/Bottom")
            .add("PgUp/PgDn", "Page")
    }

    /// Add the selection cycling keys available from any focus
    pub fn with_selections(self) -> Self {
        self.add("b", "Group By").add("f", "Display")
    }

    /// Add Tab focus cycling
    pub fn with_focus(self) -> Self {
        self.add("Tab", "Focus")
    }

    pub fn with_quit(self) -> Self {
        self.add("q", "Quit")
    }

    /// Add a single custom shortcut
    pub fn add(mut self, key: &str, description: &str) -> Self {
        self.shortcuts.push(Shortcut::new(key, description));
        self
    }

    pub fn build(self) -> Vec<Shortcut> {
        self.shortcuts
    }
}
