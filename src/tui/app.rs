//! Application state and the terminal event loop.

use std::io::stdout;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use tracing::{info, warn};

use crate::gesture::{DragGesture, RowBoundsMap};
use crate::io::config_io;
use crate::io::kv::FileKvStore;
use crate::io::paths;
use crate::io::watcher::StoreWatcher;
use crate::model::config::Config;
use crate::model::list::ListStore;
use crate::ops::reorder::destination_index;
use crate::session::{EditSession, ExitAction};

use super::input;
use super::render;
use super::theme::Theme;

/// Which input surface is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browse,
    Edit,
    ConfirmDelete,
}

/// Each list row occupies a gap line plus a content line, so row `i` spans
/// content lines `2i` (gap) through `2i + 1` (text). Bounds are recorded for
/// the content line pair only.
pub const ROW_PITCH: i32 = 2;

pub struct App {
    pub store: ListStore,
    pub bounds: RowBoundsMap,
    pub drag: DragGesture,
    pub session: Option<EditSession>,
    pub mode: Mode,
    pub theme: Theme,
    /// Keyboard cursor in the browse list.
    pub cursor: usize,
    /// Content lines scrolled off the top of the list viewport.
    pub scroll_offset: i32,
    /// First visible text line in the edit view.
    pub edit_scroll: usize,
    /// Horizontal scroll of the edit view, in cells.
    pub edit_h_scroll: usize,
    /// Where the list was drawn last frame; pointer events are mapped
    /// through this.
    pub list_area: Rect,
    pub text_area: Rect,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: ListStore, theme: Theme) -> Self {
        App {
            store,
            bounds: RowBoundsMap::new(),
            drag: DragGesture::new(),
            session: None,
            mode: Mode::Browse,
            theme,
            cursor: 0,
            scroll_offset: 0,
            edit_scroll: 0,
            edit_h_scroll: 0,
            list_area: Rect::default(),
            text_area: Rect::default(),
            status_message: None,
            should_quit: false,
        }
    }

    pub fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.store.len().saturating_sub(1));
    }

    /// Open an existing entry for editing.
    pub fn open_entry(&mut self, index: usize) {
        let Some(text) = self.store.get(index) else {
            return;
        };
        self.session = Some(EditSession::open(index, text, false));
        self.cursor = index;
        self.mode = Mode::Edit;
        self.edit_scroll = 0;
        self.edit_h_scroll = 0;
    }

    /// Create a blank entry at the head and start editing it. The session
    /// opens dirty so the blank is pruned even if the user leaves at once.
    pub fn add_entry(&mut self) {
        let index = self.store.insert_blank_at_head();
        self.bounds.clear();
        self.cursor = index;
        self.session = Some(EditSession::open(index, "", true));
        self.mode = Mode::Edit;
        self.edit_scroll = 0;
        self.edit_h_scroll = 0;
    }

    /// Back out of the edit view. Blank entries are pruned; anything else is
    /// committed implicitly.
    pub fn close_session_back(&mut self) {
        if let Some(session) = self.session.take() {
            self.apply_exit(session.discard_if_blank());
        }
        self.leave_edit();
    }

    /// Explicit save. The session closes either way.
    pub fn close_session_commit(&mut self) {
        if let Some(session) = self.session.take() {
            self.apply_exit(session.commit());
            self.status_message = Some("saved".into());
        }
        self.leave_edit();
    }

    /// The user asked to delete the entry being edited; wait for a y/n.
    pub fn request_delete(&mut self) {
        if self.session.is_some() {
            self.mode = Mode::ConfirmDelete;
        }
    }

    /// Confirmed delete. The session's pending text is dropped along with
    /// the entry; only the removal reaches the store.
    pub fn confirm_delete(&mut self) {
        if let Some(session) = self.session.take() {
            let index = session.index();
            match session.discard_if_blank() {
                ExitAction::Remove { index } => self.remove_entry(index),
                ExitAction::Commit { .. } | ExitAction::Nothing => self.remove_entry(index),
            }
            self.status_message = Some("deleted".into());
        }
        self.leave_edit();
    }

    pub fn cancel_delete(&mut self) {
        self.mode = Mode::Edit;
    }

    /// Finish a drop gesture: reorder and move the cursor with the entry.
    pub fn apply_drop(&mut self, source: usize, target: usize) {
        match self.store.apply_reorder(source, target) {
            Ok(()) => {
                self.cursor = destination_index(source, target);
                self.bounds.clear();
                info!(source, target, "reordered by drag");
            }
            Err(e) => warn!("drop ignored: {e}"),
        }
        self.clamp_cursor();
    }

    /// Keyboard reorder by one slot. `delta` is -1 (up) or +1 (down); the
    /// gap target for "one down" is `cursor + 2`.
    pub fn nudge(&mut self, delta: i32) {
        let len = self.store.len();
        if len < 2 {
            return;
        }
        let source = self.cursor;
        let target = if delta < 0 {
            let Some(t) = source.checked_sub(1) else {
                return;
            };
            t
        } else {
            if source + 1 >= len {
                return;
            }
            source + 2
        };
        self.apply_drop(source, target);
    }

    /// Pick up an external change to the data file. The watcher also fires
    /// for our own saves, so a reload that changes nothing stays silent.
    pub fn reload_from_disk(&mut self) {
        let before = self.store.entries().to_vec();
        self.store.reload();
        if self.store.entries() == before {
            return;
        }
        self.bounds.clear();
        self.clamp_cursor();
        self.status_message = Some("list reloaded".into());
        info!("data file changed externally, reloaded");
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let content = ROW_PITCH * self.store.len() as i32;
        let max = (content - self.list_area.height as i32).max(0);
        self.scroll_offset = (self.scroll_offset + delta).clamp(0, max);
    }

    fn apply_exit(&mut self, action: ExitAction) {
        match action {
            ExitAction::Commit { index, text } => {
                if let Err(e) = self.store.apply_edit(index, text) {
                    warn!("commit dropped: {e}");
                }
            }
            ExitAction::Remove { index } => self.remove_entry(index),
            ExitAction::Nothing => {}
        }
    }

    fn remove_entry(&mut self, index: usize) {
        if let Err(e) = self.store.remove_at(index) {
            warn!("remove dropped: {e}");
        }
    }

    fn leave_edit(&mut self) {
        self.mode = Mode::Browse;
        // Any edit exit can change the list length.
        self.bounds.clear();
        self.clamp_cursor();
    }
}

/// Run the interactive TUI until the user quits.
pub fn run(data_file_override: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = match config_io::load_config(&paths::config_file()) {
        Ok(c) => c,
        Err(e) => {
            warn!("config ignored: {e}");
            Config::default()
        }
    };
    let data_file = paths::resolve_data_file(data_file_override, &config);
    info!(data_file = %data_file.display(), "starting TUI");

    let store = ListStore::load(Box::new(FileKvStore::new(&data_file)));
    let mut app = App::new(store, Theme::from_config(&config.ui));

    let watcher = match StoreWatcher::start(&data_file) {
        Ok(w) => Some(w),
        Err(e) => {
            warn!("file watching unavailable: {e}");
            None
        }
    };

    enable_raw_mode()?;
    execute!(
        stdout(),
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;

    // Restore the terminal even if we panic mid-draw.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableBracketedPaste
        );
        default_hook(panic_info);
    }));

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;
    let result = event_loop(&mut terminal, &mut app, watcher.as_ref());

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    watcher: Option<&StoreWatcher>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        } else if let Some(watcher) = watcher
            && watcher.changed()
            && app.mode == Mode::Browse
            && !app.drag.is_active()
        {
            // An in-flight edit or drag owns the list; defer the reload.
            app.reload_from_disk();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
