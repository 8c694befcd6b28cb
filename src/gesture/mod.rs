pub mod bounds;
pub mod drag;

pub use bounds::{RowBounds, RowBoundsMap};
pub use drag::{DragGesture, DragOutcome, DragPhase, PointerPos};
