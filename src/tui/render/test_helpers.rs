//! Helpers for exercising the renderer against a `TestBackend`.

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::io::kv::{KvStore, MemoryKvStore};
use crate::model::list::{LIST_KEY, ListStore};
use crate::tui::app::App;
use crate::tui::theme::Theme;

/// App over an in-memory store seeded with `entries`.
pub fn test_app(entries: &[&str]) -> App {
    let mut kv = MemoryKvStore::new();
    kv.set(LIST_KEY, &serde_json::to_string(entries).unwrap())
        .unwrap();
    let store = ListStore::load(Box::new(kv));
    App::new(store, Theme::default())
}

/// Draw one frame into a test backend and return the screen contents, one
/// trailing-space-trimmed line per terminal row.
pub fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| super::render(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        let mut line = String::new();
        for x in 0..buffer.area.width {
            line.push_str(buffer[(x, y)].symbol());
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
