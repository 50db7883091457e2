use crate::io::store::StoreError;
use crate::tui::app::{App, Mode};
use crate::tui::draft::Draft;
use crate::tui::help::HelpState;
use crate::tui::keymap::Action;
use crate::util::unicode;

/// Browsing mode: list commands and the ways into the other modes.
pub(super) fn handle_navigate(app: &mut App, action: Option<Action>) -> Result<(), StoreError> {
    let Some(action) = action else {
        return Ok(());
    };

    match action {
        Action::ToggleHelp => {
            app.mode = Mode::HelpOverlay(HelpState::default());
        }
        Action::ToggleNew => {
            app.status = None;
            app.mode = Mode::Editing(Draft::new());
        }
        Action::MoveUp => {
            app.list.move_cursor(-1);
        }
        Action::MoveDown => {
            app.list.move_cursor(1);
        }
        Action::Delete => match app.list.delete_at_cursor() {
            Some(task) => {
                app.dirty = true;
                app.status = Some(format!(
                    "Deleted \"{}\"",
                    unicode::single_line(&task.text)
                ));
            }
            None => app.status = Some("Nothing to delete".to_string()),
        },
        Action::ToggleComplete => {
            if app.list.toggle_completed() {
                app.dirty = true;
            } else {
                app.status = Some("Nothing to complete".to_string());
            }
        }
        Action::Save => app.save()?,
        // Handled before dispatch
        Action::Quit => app.should_quit = true,
        Action::Submit | Action::Cancel => {}
    }
    Ok(())
}
