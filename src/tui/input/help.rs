use crossterm::event::KeyEvent;

use crate::tui::app::{App, Mode};
use crate::tui::keymap::Action;

/// Help overlay: close it, or scroll the table.
pub(super) fn handle_help(app: &mut App, key: KeyEvent, action: Option<Action>) {
    match action {
        Some(Action::ToggleHelp | Action::Cancel) => {
            app.mode = Mode::Browsing;
        }
        _ => {
            if let Mode::HelpOverlay(help) = &mut app.mode {
                help.handle_key(key);
            }
        }
    }
}
