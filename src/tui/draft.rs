//! Single-line text entry used while composing a new task.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::util::unicode;

/// Maximum number of characters a draft may hold
pub const MAX_DRAFT_CHARS: usize = 156;

/// Shown in the entry field while the draft is empty
pub const PLACEHOLDER: &str = "Enter todo item here...";

/// The uncommitted text of a new task, with a byte-offset cursor that always
/// sits on a grapheme boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    buffer: String,
    cursor: usize,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_blank(&self) -> bool {
        self.buffer.trim().is_empty()
    }

    /// No room for another character
    pub fn is_full(&self) -> bool {
        self.buffer.chars().count() >= MAX_DRAFT_CHARS
    }

    /// Cursor position in terminal cells from the start of the text
    pub fn cursor_col(&self) -> usize {
        unicode::byte_offset_to_display_col(&self.buffer, self.cursor)
    }

    pub fn into_text(self) -> String {
        self.buffer
    }

    /// Apply a key event to the buffer. Returns true if the event was used.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        match key.code {
            // Readline-style control keys
            KeyCode::Char('a') if ctrl => self.cursor = 0,
            KeyCode::Char('e') if ctrl => self.cursor = self.buffer.len(),
            KeyCode::Char('u') if ctrl => {
                self.buffer.drain(..self.cursor);
                self.cursor = 0;
            }
            KeyCode::Char('k') if ctrl => self.buffer.truncate(self.cursor),
            KeyCode::Char('w') if ctrl => self.delete_word_back(),
            KeyCode::Char('b') if alt => {
                self.cursor = unicode::word_boundary_left(&self.buffer, self.cursor);
            }
            KeyCode::Char('f') if alt => {
                self.cursor = unicode::word_boundary_right(&self.buffer, self.cursor);
            }
            KeyCode::Char(c) if !ctrl && !alt => return self.insert_str(&c.to_string()),
            KeyCode::Backspace if ctrl || alt => self.delete_word_back(),
            KeyCode::Backspace => {
                let Some(prev) = unicode::prev_grapheme_boundary(&self.buffer, self.cursor)
                else {
                    return false;
                };
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
            }
            KeyCode::Delete => {
                let Some(next) = unicode::next_grapheme_boundary(&self.buffer, self.cursor)
                else {
                    return false;
                };
                self.buffer.drain(self.cursor..next);
            }
            KeyCode::Left if ctrl || alt => {
                self.cursor = unicode::word_boundary_left(&self.buffer, self.cursor);
            }
            KeyCode::Right if ctrl || alt => {
                self.cursor = unicode::word_boundary_right(&self.buffer, self.cursor);
            }
            KeyCode::Left => {
                if let Some(prev) = unicode::prev_grapheme_boundary(&self.buffer, self.cursor) {
                    self.cursor = prev;
                }
            }
            KeyCode::Right => {
                if let Some(next) = unicode::next_grapheme_boundary(&self.buffer, self.cursor) {
                    self.cursor = next;
                }
            }
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.buffer.len(),
            _ => return false,
        }
        true
    }

    /// Insert pasted text at the cursor. Line breaks become spaces.
    pub fn paste(&mut self, text: &str) -> bool {
        let clean = text.replace("\r\n", " ").replace(['\n', '\r'], " ");
        self.insert_str(&clean)
    }

    /// Insert as much of `s` as fits under [`MAX_DRAFT_CHARS`].
    fn insert_str(&mut self, s: &str) -> bool {
        let room = MAX_DRAFT_CHARS.saturating_sub(self.buffer.chars().count());
        let fitted: String = s.chars().filter(|c| !c.is_control()).take(room).collect();
        if fitted.is_empty() {
            return false;
        }
        self.buffer.insert_str(self.cursor, &fitted);
        self.cursor += fitted.len();
        true
    }

    fn delete_word_back(&mut self) {
        let start = unicode::word_boundary_left(&self.buffer, self.cursor);
        self.buffer.drain(start..self.cursor);
        self.cursor = start;
    }
}
