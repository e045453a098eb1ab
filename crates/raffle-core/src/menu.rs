//! Main menu entries.
//!
//! The menu is a fixed, ordered table of `(item, label)` pairs. Labels are the
//! lower-case, space-separated names shown to the operator; the same table maps
//! a selected label back to its item.

/// Entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItem {
    /// Check a previously purchased ticket.
    Check,
    /// Purchase a new ticket.
    Purchase,
    /// Leave the menu loop.
    StopProgram,
}

/// Menu entries in display order.
pub const MENU_ITEMS: [(MenuItem, &str); 3] = [
    (MenuItem::Check, "check"),
    (MenuItem::Purchase, "purchase"),
    (MenuItem::StopProgram, "stop program"),
];

impl MenuItem {
    /// Label shown in the numbered menu.
    pub fn label(self) -> &'static str {
        MENU_ITEMS.iter().find(|(item, _)| *item == self).map_or("", |(_, label)| label)
    }

    /// Item for a menu label. `None` if the label is not in the menu.
    pub fn from_label(label: &str) -> Option<Self> {
        MENU_ITEMS.iter().find(|(_, l)| *l == label).map(|(item, _)| *item)
    }

    /// All labels in display order.
    pub fn labels() -> Vec<String> {
        MENU_ITEMS.iter().map(|(_, label)| (*label).to_string()).collect()
    }
}
