//! Edit-session state machine for a single entry.
//!
//! A session is created when an entry is opened (tap) or created (add), and
//! destroyed by exactly one of the two exit transitions. The
//! Viewing/Interacting split is a deliberate debounce: the text surface
//! reports a cursor placement when it first receives focus, and that
//! programmatic report must not overwrite the forced start-of-text cursor.

/// Cursor range inside the text being edited. `end` is `None` when the
/// cursor is a plain caret rather than a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorRange {
    pub start: usize,
    pub end: Option<usize>,
}

impl CursorRange {
    pub fn caret(start: usize) -> Self {
        CursorRange { start, end: None }
    }
}

/// Lifecycle states. `Closed` is terminal; both exit transitions consume
/// the session, so a closed session cannot be touched again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Just opened; cursor not yet under user control.
    Viewing,
    /// The user has typed or placed the cursor at least once.
    Interacting,
}

/// What an exiting session asks the list store to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitAction {
    /// Write `text` back at `index`.
    Commit { index: usize, text: String },
    /// Remove the entry at `index` entirely (blank on exit).
    Remove { index: usize },
    /// Opened for viewing and untouched; the store is left alone.
    Nothing,
}

/// One entry's text-edit lifecycle.
#[derive(Debug)]
pub struct EditSession {
    index: usize,
    text: String,
    dirty: bool,
    cursor: CursorRange,
    state: SessionState,
}

impl EditSession {
    /// Open an entry for editing. The cursor is forced to the start of the
    /// text regardless of what the surface will report on focus; a freshly
    /// created blank entry starts dirty so that an immediate exit still
    /// runs the persist-then-prune path.
    pub fn open(index: usize, text: impl Into<String>, is_new: bool) -> Self {
        EditSession {
            index,
            text: text.into(),
            dirty: is_new,
            cursor: CursorRange::caret(0),
            state: SessionState::Viewing,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> CursorRange {
        self.cursor
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The user pressed a key or clicked inside the editor. From here on,
    /// cursor reports are trusted.
    pub fn on_first_interaction(&mut self) {
        self.state = SessionState::Interacting;
    }

    /// Full replacement text from the surface. Typing counts as an
    /// interaction in its own right.
    pub fn on_text_changed(&mut self, new_text: impl Into<String>) {
        self.text = new_text.into();
        self.dirty = true;
        self.state = SessionState::Interacting;
    }

    /// Cursor/selection report from the surface. Reports that arrive before
    /// the first interaction are artifacts of programmatic focus and are
    /// dropped.
    pub fn on_cursor_report(&mut self, range: CursorRange) {
        if self.state == SessionState::Interacting {
            self.cursor = range;
        }
    }

    /// Explicit confirm exit: persist the text iff something changed.
    pub fn commit(self) -> ExitAction {
        if self.dirty {
            ExitAction::Commit {
                index: self.index,
                text: self.text,
            }
        } else {
            ExitAction::Nothing
        }
    }

    /// Back-navigation exit: a fully blank entry is pruned rather than
    /// persisted; anything else behaves as an implicit commit. Partial
    /// edits are never discarded.
    pub fn discard_if_blank(self) -> ExitAction {
        if self.text.is_empty() {
            ExitAction::Remove { index: self.index }
        } else {
            self.commit()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn open_forces_cursor_to_start() {
        let session = EditSession::open(3, "hello", false);
        assert_eq!(session.cursor(), CursorRange::caret(0));
        assert_eq!(session.state(), SessionState::Viewing);
        assert!(!session.is_dirty());
    }

    #[test]
    fn new_entry_starts_dirty() {
        let session = EditSession::open(0, "", true);
        assert!(session.is_dirty());
    }

    #[test]
    fn cursor_report_before_interaction_is_discarded() {
        let mut session = EditSession::open(1, "some text", false);
        session.on_cursor_report(CursorRange::caret(9));
        assert_eq!(session.cursor(), CursorRange::caret(0));
    }

    #[test]
    fn cursor_report_after_interaction_is_stored() {
        let mut session = EditSession::open(1, "some text", false);
        session.on_first_interaction();
        session.on_cursor_report(CursorRange::caret(4));
        assert_eq!(session.cursor(), CursorRange::caret(4));
    }

    #[test]
    fn typing_is_an_interaction() {
        let mut session = EditSession::open(0, "a", false);
        session.on_text_changed("ab");
        assert_eq!(session.state(), SessionState::Interacting);
        assert!(session.is_dirty());
        session.on_cursor_report(CursorRange::caret(2));
        assert_eq!(session.cursor(), CursorRange::caret(2));
    }

    #[test]
    fn commit_clean_session_does_nothing() {
        let session = EditSession::open(2, "unchanged", false);
        assert_eq!(session.commit(), ExitAction::Nothing);
    }

    #[test]
    fn commit_dirty_session_writes_back() {
        let mut session = EditSession::open(2, "old", false);
        session.on_text_changed("new");
        assert_eq!(
            session.commit(),
            ExitAction::Commit {
                index: 2,
                text: "new".into()
            }
        );
    }

    #[test]
    fn blank_new_session_is_removed_on_back() {
        let session = EditSession::open(0, "", true);
        assert_eq!(session.discard_if_blank(), ExitAction::Remove { index: 0 });
    }

    #[test]
    fn emptied_existing_entry_is_removed_on_back() {
        let mut session = EditSession::open(1, "text", false);
        session.on_text_changed("");
        assert_eq!(session.discard_if_blank(), ExitAction::Remove { index: 1 });
    }

    #[test]
    fn partial_edit_is_committed_not_discarded() {
        let mut session = EditSession::open(1, "text", false);
        session.on_text_changed("tex");
        assert_eq!(
            session.discard_if_blank(),
            ExitAction::Commit {
                index: 1,
                text: "tex".into()
            }
        );
    }

    #[test]
    fn untouched_view_exits_without_store_effect() {
        let session = EditSession::open(1, "text", false);
        assert_eq!(session.discard_if_blank(), ExitAction::Nothing);
    }

    #[test]
    fn selection_range_round_trips() {
        let mut session = EditSession::open(0, "abcdef", false);
        session.on_first_interaction();
        session.on_cursor_report(CursorRange {
            start: 1,
            end: Some(4),
        });
        assert_eq!(
            session.cursor(),
            CursorRange {
                start: 1,
                end: Some(4)
            }
        );
    }
}
