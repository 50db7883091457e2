use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};
use crate::tui::draft::{Draft, MAX_DRAFT_CHARS};
use crate::tui::keymap::Action;

/// Editing mode: submit, discard, or feed the key to the draft.
pub(super) fn handle_edit(app: &mut App, key: KeyEvent, action: Option<Action>) {
    match action {
        Some(Action::Submit) => submit_draft(app),
        Some(Action::ToggleNew | Action::Cancel) => {
            app.mode = Mode::Browsing;
        }
        _ => {
            if let Mode::Editing(draft) = &mut app.mode {
                let typed_char = matches!(key.code, KeyCode::Char(_))
                    && !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
                let used = draft.handle_key(key);
                report_edit(&mut app.status, draft, used, typed_char);
            }
        }
    }
}

/// Append the draft as a new task and go back to browsing.
/// A blank draft is kept open instead of adding an empty task.
fn submit_draft(app: &mut App) {
    let blank = match &app.mode {
        Mode::Editing(draft) => draft.is_blank(),
        _ => return,
    };
    if blank {
        app.status = Some("Type something first, or Esc to cancel".to_string());
        return;
    }

    if let Mode::Editing(draft) = std::mem::take(&mut app.mode) {
        app.list.append(draft.into_text());
        app.dirty = true;
        app.status = None;
    }
}

/// Clear a stale notice once the draft changes, or explain a refused character.
pub(super) fn report_edit(status: &mut Option<String>, draft: &Draft, used: bool, typed: bool) {
    if used {
        *status = None;
    } else if typed && draft.is_full() {
        *status = Some(format!(
            "New items are limited to {} characters",
            MAX_DRAFT_CHARS
        ));
    }
}
