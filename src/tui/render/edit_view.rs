//! Full-text editor rendering for the open session.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::util::lines::{line_of, line_spans};
use crate::util::unicode;

use super::super::app::App;

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let text_area = Rect {
        x: area.x + 1,
        y: area.y,
        width: area.width.saturating_sub(2),
        height: area.height,
    };
    app.text_area = text_area;
    let width = text_area.width as usize;
    let height = text_area.height as usize;
    if width == 0 || height == 0 {
        return;
    }
    let Some(session) = app.session.as_ref() else {
        return;
    };

    let text = session.text();
    let at = session.cursor().start.min(text.len());
    let spans = line_spans(text);
    let cursor_line = line_of(&spans, at);
    let (start, end) = spans[cursor_line];
    let cursor_col = unicode::width_before(&text[start..end], at - start);

    // Scroll just enough to keep the cursor inside the viewport.
    if cursor_line < app.edit_scroll {
        app.edit_scroll = cursor_line;
    }
    if cursor_line >= app.edit_scroll + height {
        app.edit_scroll = cursor_line + 1 - height;
    }
    if cursor_col < app.edit_h_scroll {
        app.edit_h_scroll = cursor_col;
    }
    if cursor_col >= app.edit_h_scroll + width {
        app.edit_h_scroll = cursor_col + 1 - width;
    }

    for (row, &(line_start, line_end)) in
        spans.iter().skip(app.edit_scroll).take(height).enumerate()
    {
        let line_text = &text[line_start..line_end];
        let skip = unicode::byte_at_width(line_text, app.edit_h_scroll);
        let rest = &line_text[skip..];
        let visible = &rest[..unicode::byte_at_width(rest, width)];
        let rect = Rect {
            x: text_area.x,
            y: text_area.y + row as u16,
            width: text_area.width,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Line::styled(visible, Style::default().fg(app.theme.text))),
            rect,
        );
    }

    frame.set_cursor_position(Position::new(
        text_area.x + (cursor_col - app.edit_h_scroll) as u16,
        text_area.y + (cursor_line - app.edit_scroll) as u16,
    ));
}
