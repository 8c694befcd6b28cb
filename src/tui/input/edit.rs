use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::session::CursorRange;
use crate::util::lines::{line_of, line_spans};
use crate::util::unicode;

use super::super::app::App;

pub(super) fn handle_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('s') if ctrl => app.close_session_commit(),
        KeyCode::Char('d') if ctrl => app.request_delete(),
        KeyCode::Esc => app.close_session_back(),
        KeyCode::Enter => insert_text(app, "\n"),
        KeyCode::Backspace => backspace(app),
        KeyCode::Delete => delete_forward(app),
        KeyCode::Left => move_horizontal(app, -1),
        KeyCode::Right => move_horizontal(app, 1),
        KeyCode::Up => move_vertical(app, -1),
        KeyCode::Down => move_vertical(app, 1),
        KeyCode::Home => move_line_edge(app, LineEdge::Start),
        KeyCode::End => move_line_edge(app, LineEdge::End),
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            let mut buf = [0u8; 4];
            insert_text(app, c.encode_utf8(&mut buf));
        }
        _ => {}
    }
}

pub(super) fn handle_paste(app: &mut App, text: &str) {
    // Terminal paste reports CR or CRLF line ends; entries store LF.
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    insert_text(app, &normalized);
}

pub(super) fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollDown => scroll_lines(app, 1),
        MouseEventKind::ScrollUp => scroll_lines(app, -1),
        MouseEventKind::Down(MouseButton::Left) => place_cursor(app, mouse.column, mouse.row),
        _ => {}
    }
}

fn insert_text(app: &mut App, insert: &str) {
    let Some(session) = app.session.as_mut() else {
        return;
    };
    session.on_first_interaction();
    let at = session.cursor().start.min(session.text().len());
    let mut text = session.text().to_string();
    text.insert_str(at, insert);
    session.on_text_changed(text);
    session.on_cursor_report(CursorRange::caret(at + insert.len()));
}

fn backspace(app: &mut App) {
    let Some(session) = app.session.as_mut() else {
        return;
    };
    session.on_first_interaction();
    let at = session.cursor().start.min(session.text().len());
    if at == 0 {
        return;
    }
    let prev = unicode::prev_boundary(session.text(), at);
    let mut text = session.text().to_string();
    text.replace_range(prev..at, "");
    session.on_text_changed(text);
    session.on_cursor_report(CursorRange::caret(prev));
}

fn delete_forward(app: &mut App) {
    let Some(session) = app.session.as_mut() else {
        return;
    };
    session.on_first_interaction();
    let at = session.cursor().start.min(session.text().len());
    if at >= session.text().len() {
        return;
    }
    let next = unicode::next_boundary(session.text(), at);
    let mut text = session.text().to_string();
    text.replace_range(at..next, "");
    session.on_text_changed(text);
    session.on_cursor_report(CursorRange::caret(at));
}

fn move_horizontal(app: &mut App, dir: i32) {
    let Some(session) = app.session.as_mut() else {
        return;
    };
    session.on_first_interaction();
    let at = session.cursor().start.min(session.text().len());
    let new = if dir < 0 {
        unicode::prev_boundary(session.text(), at)
    } else {
        unicode::next_boundary(session.text(), at)
    };
    session.on_cursor_report(CursorRange::caret(new));
}

fn move_vertical(app: &mut App, dir: i32) {
    let Some(session) = app.session.as_mut() else {
        return;
    };
    session.on_first_interaction();
    let at = session.cursor().start.min(session.text().len());
    let new = {
        let text = session.text();
        let spans = line_spans(text);
        let line = line_of(&spans, at);
        let target = line as i32 + dir;
        if target < 0 {
            0
        } else if target as usize >= spans.len() {
            text.len()
        } else {
            // Keep the visual column across lines of different widths.
            let (start, end) = spans[line];
            let col = unicode::width_before(&text[start..end], at - start);
            let (tstart, tend) = spans[target as usize];
            tstart + unicode::byte_at_width(&text[tstart..tend], col)
        }
    };
    session.on_cursor_report(CursorRange::caret(new));
}

enum LineEdge {
    Start,
    End,
}

fn move_line_edge(app: &mut App, edge: LineEdge) {
    let Some(session) = app.session.as_mut() else {
        return;
    };
    session.on_first_interaction();
    let at = session.cursor().start.min(session.text().len());
    let new = {
        let spans = line_spans(session.text());
        let (start, end) = spans[line_of(&spans, at)];
        match edge {
            LineEdge::Start => start,
            LineEdge::End => end,
        }
    };
    session.on_cursor_report(CursorRange::caret(new));
}

fn scroll_lines(app: &mut App, delta: i32) {
    let Some(session) = app.session.as_ref() else {
        return;
    };
    let max = session.text().split('\n').count().saturating_sub(1);
    let next = app.edit_scroll as i32 + delta;
    app.edit_scroll = next.clamp(0, max as i32) as usize;
}

fn place_cursor(app: &mut App, column: u16, row: u16) {
    if !app.text_area.contains(Position::new(column, row)) {
        return;
    }
    let line_idx = app.edit_scroll + (row - app.text_area.y) as usize;
    let col = (column - app.text_area.x) as usize + app.edit_h_scroll;
    let Some(session) = app.session.as_mut() else {
        return;
    };
    // A click is a real interaction, unlike the focus-time report.
    session.on_first_interaction();
    let new = {
        let text = session.text();
        let spans = line_spans(text);
        if line_idx >= spans.len() {
            text.len()
        } else {
            let (start, end) = spans[line_idx];
            start + unicode::byte_at_width(&text[start..end], col)
        }
    };
    session.on_cursor_report(CursorRange::caret(new));
}
