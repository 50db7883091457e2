use crossterm::event::{KeyCode, KeyEvent};

use super::keymap::BINDINGS;

/// Rows moved by PageUp/PageDown
pub const HELP_PAGE: usize = 10;

/// Highlighted row of the help table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelpState {
    selected: usize,
}

impl HelpState {
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Move the highlight. Other keys are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let last = BINDINGS.len().saturating_sub(1);
        self.selected = match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => (self.selected + 1).min(last),
            KeyCode::PageUp => self.selected.saturating_sub(HELP_PAGE),
            KeyCode::PageDown => (self.selected + HELP_PAGE).min(last),
            KeyCode::Home | KeyCode::Char('g') => 0,
            KeyCode::End | KeyCode::Char('G') => last,
            _ => return,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(help: &mut HelpState, code: KeyCode) {
        help.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn starts_at_top() {
        assert_eq!(HelpState::default().selected(), 0);
    }

    #[test]
    fn arrows_and_vim_keys_move() {
        let mut help = HelpState::default();
        press(&mut help, KeyCode::Down);
        press(&mut help, KeyCode::Char('j'));
        assert_eq!(help.selected(), 2);
        press(&mut help, KeyCode::Char('k'));
        assert_eq!(help.selected(), 1);
        press(&mut help, KeyCode::Up);
        press(&mut help, KeyCode::Up);
        assert_eq!(help.selected(), 0);
    }

    #[test]
    fn movement_is_clamped_to_table() {
        let mut help = HelpState::default();
        press(&mut help, KeyCode::PageDown);
        press(&mut help, KeyCode::PageDown);
        assert_eq!(help.selected(), BINDINGS.len() - 1);
        press(&mut help, KeyCode::Down);
        assert_eq!(help.selected(), BINDINGS.len() - 1);
        press(&mut help, KeyCode::PageUp);
        press(&mut help, KeyCode::PageUp);
        assert_eq!(help.selected(), 0);
    }

    #[test]
    fn jump_to_ends() {
        let mut help = HelpState::default();
        press(&mut help, KeyCode::Char('G'));
        assert_eq!(help.selected(), BINDINGS.len() - 1);
        press(&mut help, KeyCode::Home);
        assert_eq!(help.selected(), 0);
        press(&mut help, KeyCode::End);
        press(&mut help, KeyCode::Char('g'));
        assert_eq!(help.selected(), 0);
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut help = HelpState::default();
        press(&mut help, KeyCode::Down);
        press(&mut help, KeyCode::Char('x'));
        press(&mut help, KeyCode::Tab);
        assert_eq!(help.selected(), 1);
    }
}
