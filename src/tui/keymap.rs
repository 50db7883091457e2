use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Logical commands the key surface can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Save,
    Quit,
    MoveUp,
    MoveDown,
    Delete,
    ToggleNew,
    ToggleHelp,
    ToggleComplete,
    Submit,
    /// Close the help table or discard the draft
    Cancel,
}

/// One row of the help table
#[derive(Debug, Clone, Copy)]
pub struct Binding {
    pub action: Action,
    pub keys: &'static str,
    pub description: &'static str,
}

/// Every binding, in help table order
pub const BINDINGS: &[Binding] = &[
    Binding {
        action: Action::Save,
        keys: "ctrl+s",
        description: "Save the todo list",
    },
    Binding {
        action: Action::Quit,
        keys: "ctrl+c",
        description: "Quit the app (does not save)",
    },
    Binding {
        action: Action::ToggleNew,
        keys: "ctrl+n",
        description: "Toggle create new todo item input",
    },
    Binding {
        action: Action::ToggleHelp,
        keys: "alt+h",
        description: "Toggle the help commands",
    },
    Binding {
        action: Action::MoveUp,
        keys: "up",
        description: "Move up the list",
    },
    Binding {
        action: Action::MoveDown,
        keys: "down",
        description: "Move down the list",
    },
    Binding {
        action: Action::ToggleComplete,
        keys: "tab",
        description: "Complete a todo item",
    },
    Binding {
        action: Action::Delete,
        keys: "delete",
        description: "Delete item from the todo list",
    },
    Binding {
        action: Action::Submit,
        keys: "enter",
        description: "Submit the text input",
    },
    Binding {
        action: Action::Cancel,
        keys: "esc",
        description: "Close help / discard the new item",
    },
];

/// Map a physical key event to its logical action, if it has one.
pub fn action_for(key: &KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    match key.code {
        KeyCode::Char('s') if ctrl => Some(Action::Save),
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Char('n') if ctrl => Some(Action::ToggleNew),
        KeyCode::Char('h') if alt => Some(Action::ToggleHelp),
        KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Delete => Some(Action::Delete),
        KeyCode::Tab => Some(Action::ToggleComplete),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Esc => Some(Action::Cancel),
        _ => None,
    }
}

/// The key label shown for an action
pub fn keys_for(action: Action) -> &'static str {
    BINDINGS
        .iter()
        .find(|b| b.action == action)
        .map_or("", |b| b.keys)
}
