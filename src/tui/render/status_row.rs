use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use super::super::app::{App, Mode};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let text = match (&app.status_message, app.mode) {
        (Some(message), _) => format!(" {message}"),
        (None, Mode::Browse) if app.drag.is_dragging() => {
            " drag to a new position · release to drop".to_string()
        }
        (None, Mode::Browse) => " a add · enter open · drag or J/K reorder · q quit".to_string(),
        (None, Mode::Edit) => " esc back · ctrl-s save · ctrl-d delete".to_string(),
        (None, Mode::ConfirmDelete) => " y delete · n keep".to_string(),
    };
    let line = Line::styled(text, Style::default().fg(app.theme.dim));
    frame.render_widget(Paragraph::new(line), area);
}
