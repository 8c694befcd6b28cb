use super::bounds::RowBoundsMap;

/// Pointer position at press time, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerPos {
    pub x: i32,
    pub y: i32,
}

/// Phases of a drag gesture.
///
/// `Armed` covers the window between press and the first move event: some
/// input layers never deliver a move for a press-and-release in place, so
/// the release transition must terminate the gesture from either phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Armed {
        source: usize,
        pointer_start: PointerPos,
    },
    Dragging {
        source: usize,
        pointer_start: PointerPos,
        target: Option<usize>,
    },
}

/// What a completed gesture asks the caller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Nothing was in flight.
    None,
    /// Press and release with no movement: open the pressed row.
    Tap { index: usize },
    /// A drag ended. `target` is the last resolved gap index, or `None` if
    /// the pointer never entered a row's bounds (the reorder is skipped).
    Drop {
        source: usize,
        target: Option<usize>,
    },
}

/// Explicit state machine for the press → drag → release gesture.
///
/// The release transition is the single resolving step: it consumes the
/// in-flight state and reports the outcome exactly once, so there is no
/// window where a half-finished move can be re-evaluated.
#[derive(Debug, Default)]
pub struct DragGesture {
    phase: DragPhase,
}

impl Default for DragPhase {
    fn default() -> Self {
        DragPhase::Idle
    }
}

impl DragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// A press or an actual drag is in flight.
    pub fn is_active(&self) -> bool {
        !matches!(self.phase, DragPhase::Idle)
    }

    /// The pointer has moved since the press.
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    pub fn source(&self) -> Option<usize> {
        match self.phase {
            DragPhase::Idle => None,
            DragPhase::Armed { source, .. } | DragPhase::Dragging { source, .. } => Some(source),
        }
    }

    /// Current drop target, only meaningful while dragging.
    pub fn target(&self) -> Option<usize> {
        match self.phase {
            DragPhase::Dragging { target, .. } => target,
            _ => None,
        }
    }

    /// Pointer pressed on a row. Ignored if a gesture is already in flight.
    pub fn press(&mut self, source: usize, x: i32, y: i32) {
        if matches!(self.phase, DragPhase::Idle) {
            self.phase = DragPhase::Armed {
                source,
                pointer_start: PointerPos { x, y },
            };
        }
    }

    /// Pointer moved. Arms become drags; the target is re-resolved against
    /// the bounds cache using the scroll offset current at this event. A
    /// move that lands outside every row keeps the last resolved target.
    pub fn moved(&mut self, pointer_y: i32, scroll_offset: i32, bounds: &RowBoundsMap) {
        let resolved = bounds.resolve_index(pointer_y, scroll_offset);
        match self.phase {
            DragPhase::Idle => {}
            DragPhase::Armed {
                source,
                pointer_start,
            } => {
                self.phase = DragPhase::Dragging {
                    source,
                    pointer_start,
                    target: resolved,
                };
            }
            DragPhase::Dragging {
                source,
                pointer_start,
                target,
            } => {
                self.phase = DragPhase::Dragging {
                    source,
                    pointer_start,
                    target: resolved.or(target),
                };
            }
        }
    }

    /// Pointer released: resolve the gesture and return to idle.
    pub fn release(&mut self) -> DragOutcome {
        let outcome = match self.phase {
            DragPhase::Idle => DragOutcome::None,
            DragPhase::Armed { source, .. } => DragOutcome::Tap { index: source },
            DragPhase::Dragging { source, target, .. } => DragOutcome::Drop { source, target },
        };
        self.phase = DragPhase::Idle;
        outcome
    }

    /// Abort whatever is in flight without producing an outcome.
    pub fn cancel(&mut self) {
        self.phase = DragPhase::Idle;
    }
}
