use std::ops::Range;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{Task, TaskList};
use crate::tui::app::App;
use crate::tui::keymap::{self, Action};
use crate::util::unicode;

pub const HEADER: &str = "What do I need to do?";

/// Plain-text row for a task: `> [x] text`. Always a single row.
pub fn task_line(task: &Task, is_cursor: bool) -> String {
    format!(
        "{} [{}] {}",
        if is_cursor { '>' } else { ' ' },
        task.checkbox_char(),
        unicode::single_line(&task.text)
    )
}

/// Plain-text rows for the whole list, cursor marked
pub fn list_lines(list: &TaskList) -> Vec<String> {
    list.tasks()
        .iter()
        .enumerate()
        .map(|(i, task)| task_line(task, list.cursor() == Some(i)))
        .collect()
}

/// Rows to show so the cursor stays visible in `height` rows
pub fn visible_window(len: usize, cursor: Option<usize>, height: usize) -> Range<usize> {
    if height == 0 || len == 0 {
        return 0..0;
    }
    let cursor = cursor.unwrap_or(0).min(len - 1);
    let start = (cursor + 1).saturating_sub(height);
    start..(start + height).min(len)
}

/// Render the browsing list
pub fn render_list_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled(format!(" {}", HEADER), header_style),
            Span::styled(
                format!(" ({} for help)", keymap::keys_for(Action::ToggleHelp)),
                dim_style,
            ),
        ]),
        Line::from(""),
    ];

    if app.list.is_empty() {
        lines.push(Line::from(Span::styled(
            format!(
                "   No tasks yet. Press {} to add one.",
                keymap::keys_for(Action::ToggleNew)
            ),
            dim_style,
        )));
    } else {
        let rows = (area.height as usize).saturating_sub(lines.len());
        let cursor = app.list.cursor();
        for i in visible_window(app.list.len(), cursor, rows) {
            let task = &app.list.tasks()[i];
            let is_cursor = cursor == Some(i);
            let style = if is_cursor {
                Style::default()
                    .fg(app.theme.highlight)
                    .bg(app.theme.selection_bg)
                    .add_modifier(Modifier::BOLD)
            } else if task.completed {
                Style::default().fg(app.theme.green).bg(bg)
            } else {
                Style::default().fg(app.theme.text).bg(bg)
            };
            let text = unicode::truncate_to_width(
                &task_line(task, is_cursor),
                width.saturating_sub(1),
            );
            lines.push(Line::from(Span::styled(format!(" {}", text), style)));
        }
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
