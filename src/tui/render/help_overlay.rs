use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Clear, Row, Table, TableState};

use crate::tui::app::App;
use crate::tui::help::HelpState;
use crate::tui::keymap::BINDINGS;

use super::centered_rect;

/// Render the help table over `area` (toggled with alt+h)
pub fn render_help_overlay(frame: &mut Frame, app: &App, help: &HelpState, area: Rect) {
    // Center the overlay, leaving some margin
    let overlay_area = centered_rect(70, 80, area);

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);

    let header = Row::new(vec![
        Cell::from("Commands").style(header_style),
        Cell::from("Description").style(header_style),
    ])
    .bottom_margin(1);

    let rows: Vec<Row> = BINDINGS
        .iter()
        .map(|b| {
            Row::new(vec![
                Cell::from(b.keys).style(key_style),
                Cell::from(b.description).style(desc_style),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .title(" Help ")
        .title_style(header_style)
        .title_bottom(Line::from(" alt+h/esc close ").right_aligned())
        .style(Style::default().bg(bg));

    let table = Table::new(rows, [Constraint::Length(10), Constraint::Min(10)])
        .header(header)
        .block(block)
        .column_spacing(2)
        .row_highlight_style(
            Style::default()
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(Some(help.selected()));
    frame.render_stateful_widget(table, overlay_area, &mut state);
}
