pub mod edit_view;
pub mod list_view;
pub mod status_row;
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use super::app::{App, Mode};

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(app.theme.background)),
        area,
    );

    let [title_area, content_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_title(frame, app, title_area);
    match app.mode {
        Mode::Browse => list_view::render(frame, app, content_area),
        Mode::Edit | Mode::ConfirmDelete => edit_view::render(frame, app, content_area),
    }
    if app.mode == Mode::ConfirmDelete {
        render_confirm(frame, app, content_area);
    }
    status_row::render(frame, app, status_area);
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let text = match app.mode {
        Mode::Browse => {
            let n = app.store.len();
            let noun = if n == 1 { "entry" } else { "entries" };
            format!(" jot — {n} {noun}")
        }
        Mode::Edit | Mode::ConfirmDelete => {
            let index = app.session.as_ref().map(|s| s.index()).unwrap_or(0);
            format!(" jot — entry {} of {}", index + 1, app.store.len())
        }
    };
    let line = Line::styled(text, Style::default().fg(app.theme.text_bright));
    frame.render_widget(Paragraph::new(line), area);
}

fn render_confirm(frame: &mut Frame, app: &App, area: Rect) {
    let width = 30.min(area.width);
    let height = 3.min(area.height);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };
    frame.render_widget(Clear, popup);
    let lines = vec![
        Line::styled(
            " delete this entry?",
            Style::default().fg(app.theme.danger),
        ),
        Line::default(),
        Line::styled(" y delete · n keep", Style::default().fg(app.theme.dim)),
    ];
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(app.theme.selection_bg)),
        popup,
    );
}
