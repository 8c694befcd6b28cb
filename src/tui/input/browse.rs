use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::gesture::DragOutcome;

use super::super::app::{App, ROW_PITCH};

pub(super) fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Char('j') | KeyCode::Down => move_cursor(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(app, -1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.cursor = app.store.len().saturating_sub(1);
        }
        KeyCode::Enter | KeyCode::Char('l') => app.open_entry(app.cursor),
        KeyCode::Char('a') => app.add_entry(),
        KeyCode::Char('J') => app.nudge(1),
        KeyCode::Char('K') => app.nudge(-1),
        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: i32) {
    let len = app.store.len();
    if len == 0 {
        return;
    }
    let next = app.cursor as i32 + delta;
    app.cursor = next.clamp(0, len as i32 - 1) as usize;
}

pub(super) fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollDown if !app.drag.is_active() => app.scroll_by(ROW_PITCH),
        MouseEventKind::ScrollUp if !app.drag.is_active() => app.scroll_by(-ROW_PITCH),
        MouseEventKind::Down(MouseButton::Left) => {
            if !app
                .list_area
                .contains(Position::new(mouse.column, mouse.row))
            {
                return;
            }
            let y = mouse.row as i32 - app.list_area.y as i32;
            if let Some(index) = app.bounds.resolve_index(y, app.scroll_offset) {
                app.drag.press(index, mouse.column as i32, y);
                app.cursor = index;
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if app.drag.is_active() {
                // Vertical position matters even when the pointer wanders
                // outside the list horizontally.
                let y = mouse.row as i32 - app.list_area.y as i32;
                app.drag.moved(y, app.scroll_offset, &app.bounds);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => match app.drag.release() {
            DragOutcome::Tap { index } => app.open_entry(index),
            DragOutcome::Drop {
                source,
                target: Some(target),
            } => app.apply_drop(source, target),
            DragOutcome::Drop { target: None, .. } | DragOutcome::None => {}
        },
        _ => {}
    }
}
