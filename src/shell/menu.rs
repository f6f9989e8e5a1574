//! Menu definitions for the interactive shell
//!
//! Defines the fixed list of choices offered on every loop iteration.

/// A selectable menu entry
#[derive(Debug, Clone)]
pub struct MenuEntry {
    /// Label shown to the user (and accepted as a typed selection)
    pub label: &'static str,
    /// Number typed to select the entry
    pub shortcut: &'static str,
    /// Action performed
    pub action: MenuAction,
}

/// Actions a menu selection can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddStudent,
    EnrollStudent,
    ViewBalance,
    PayFees,
    ShowStatus,
    Exit,
}

/// Menu heading printed above the choices
pub const MENU_PROMPT: &str = "Select an option";

/// All menu entries, in display order
pub static MENU: &[MenuEntry] = &[
    MenuEntry {
        label: "Add a new student",
        shortcut: "1",
        action: MenuAction::AddStudent,
    },
    MenuEntry {
        label: "Enroll Student",
        shortcut: "2",
        action: MenuAction::EnrollStudent,
    },
    MenuEntry {
        label: "View a student balance",
        shortcut: "3",
        action: MenuAction::ViewBalance,
    },
    MenuEntry {
        label: "Pay a student's fees",
        shortcut: "4",
        action: MenuAction::PayFees,
    },
    MenuEntry {
        label: "Show student status",
        shortcut: "5",
        action: MenuAction::ShowStatus,
    },
    MenuEntry {
        label: "Exit",
        shortcut: "6",
        action: MenuAction::Exit,
    },
];

/// Find the menu action for a typed selection
///
/// Accepts either the entry number or its label, ignoring case and
/// surrounding whitespace.
pub fn parse_selection(input: &str) -> Option<MenuAction> {
    let input = input.trim();
    MENU.iter()
        .find(|entry| entry.shortcut == input || entry.label.eq_ignore_ascii_case(input))
        .map(|entry| entry.action)
}

/// Render the menu block
pub fn format_menu() -> String {
    let mut output = format!("? {}\n", MENU_PROMPT);
    for entry in MENU {
        output.push_str(&format!("  {}) {}\n", entry.shortcut, entry.label));
    }
    output
}
