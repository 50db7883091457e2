mod edit;
mod help;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::io::store::StoreError;

use super::app::{App, Mode};
use super::keymap::{self, Action};

use edit::handle_edit;
use help::handle_help;
use navigate::handle_navigate;

/// Handle a key event in the current mode.
///
/// The only error is a failed save, which ends the session.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<(), StoreError> {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return Ok(());
    }

    let key = normalize_key(key);
    let action = keymap::action_for(&key);

    // Quit works everywhere and never saves
    if action == Some(Action::Quit) {
        app.should_quit = true;
        return Ok(());
    }

    match app.mode {
        Mode::Browsing => handle_navigate(app, action)?,
        Mode::Editing(_) => handle_edit(app, key, action),
        Mode::HelpOverlay(_) => handle_help(app, key, action),
    }
    Ok(())
}

/// Handle a bracketed paste event (terminal sends pasted text as a single string).
/// Only the draft accepts pastes.
pub fn handle_paste(app: &mut App, text: &str) {
    if let Mode::Editing(draft) = &mut app.mode {
        let used = draft.paste(text);
        edit::report_edit(&mut app.status, draft, used, !text.is_empty());
    }
}

/// Normalize key events from terminals using the kitty keyboard protocol.
///
/// Kitty sends `Char(lowercase) + SHIFT` where traditional terminals send
/// `Char(UPPERCASE)`. Fold the former into the latter so the draft and the
/// help table see the same events either way.
fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if key.modifiers.contains(KeyModifiers::SHIFT)
        && let KeyCode::Char(c) = key.code
        && c.is_ascii_lowercase()
    {
        key.code = KeyCode::Char(c.to_ascii_uppercase());
    }
    key
}
