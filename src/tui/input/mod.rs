mod browse;
mod confirm;
mod edit;

use crossterm::event::{KeyEvent, MouseEvent};

use super::app::{App, Mode};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Status lines are transient; any keystroke dismisses the current one.
    app.status_message = None;
    match app.mode {
        Mode::Browse => browse::handle_key(app, key),
        Mode::Edit => edit::handle_key(app, key),
        Mode::ConfirmDelete => confirm::handle_key(app, key),
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match app.mode {
        Mode::Browse => browse::handle_mouse(app, mouse),
        Mode::Edit => edit::handle_mouse(app, mouse),
        Mode::ConfirmDelete => {}
    }
}

pub fn handle_paste(app: &mut App, text: &str) {
    if app.mode == Mode::Edit {
        edit::handle_paste(app, text);
    }
}
