use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_segmentation::UnicodeSegmentation;

use crate::tui::app::App;
use crate::tui::draft::{Draft, PLACEHOLDER};
use crate::tui::keymap::{self, Action};
use crate::util::unicode;

pub const PROMPT: &str = "What is the new item you wish to enter?";

const INPUT_PREFIX: &str = " > ";

/// Render the new-task entry field and place the terminal cursor in it
pub fn render_entry_view(frame: &mut Frame, app: &App, draft: &Draft, area: Rect) {
    let bg = app.theme.background;
    let prompt_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    // Keep the cursor in view when the draft is wider than the field
    let field_width = (area.width as usize).saturating_sub(INPUT_PREFIX.len() + 1);
    let cursor_col = draft.cursor_col();
    let skip = cursor_col.saturating_sub(field_width);

    let input = if draft.text().is_empty() {
        Span::styled(PLACEHOLDER, dim_style.add_modifier(Modifier::ITALIC))
    } else {
        Span::styled(
            visible_slice(draft.text(), skip, field_width),
            Style::default().fg(app.theme.text).bg(bg),
        )
    };

    let lines = vec![
        Line::from(Span::styled(format!(" {}", PROMPT), prompt_style)),
        Line::from(""),
        Line::from(vec![
            Span::styled(INPUT_PREFIX, Style::default().fg(app.theme.highlight).bg(bg)),
            input,
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                " {} add  {}/esc cancel",
                keymap::keys_for(Action::Submit),
                keymap::keys_for(Action::ToggleNew)
            ),
            dim_style,
        )),
    ];

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);

    if area.height > 2 {
        let x = area.x as usize + INPUT_PREFIX.len() + cursor_col - skip;
        frame.set_cursor_position(Position::new(
            (x as u16).min(area.right().saturating_sub(1)),
            area.y + 2,
        ));
    }
}

/// The part of `text` that fits in `width` cells after skipping `skip` cells
fn visible_slice(text: &str, skip: usize, width: usize) -> String {
    let mut skipped = 0;
    let mut start = text.len();
    for (i, g) in text.grapheme_indices(true) {
        if skipped >= skip {
            start = i;
            break;
        }
        skipped += unicode::display_width(g);
    }
    unicode::truncate_to_width(&text[start..], width)
}
