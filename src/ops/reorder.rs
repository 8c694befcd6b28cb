/// Error type for reorder operations. Out-of-range indices indicate a
/// mis-wired caller, not a user-facing failure.
#[derive(Debug, PartialEq, Eq)]
pub enum ReorderError {
    SourceOutOfRange { source: usize, len: usize },
    TargetOutOfRange { target: usize, len: usize },
}

impl std::fmt::Display for ReorderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReorderError::SourceOutOfRange { source, len } => {
                write!(f, "source index {source} out of range for list of {len}")
            }
            ReorderError::TargetOutOfRange { target, len } => {
                write!(f, "target index {target} out of range for list of {len}")
            }
        }
    }
}

impl std::error::Error for ReorderError {}

/// Move the element at `source` to the gap before the row currently at
/// `target`, shifting only the elements between the two positions.
///
/// `target` is gap-based: `target == 0` means "before the first row" and
/// `target == list.len()` means "after the last row". Under that
/// convention `target == source` and `target == source + 1` both name the
/// gap the element already sits in, so they return the list unchanged.
///
/// Returns a new list; the input is never mutated, so a caller can keep
/// rendering the old order while a drag is still in flight.
pub fn reorder<T: Clone>(
    list: &[T],
    source: usize,
    target: usize,
) -> Result<Vec<T>, ReorderError> {
    let len = list.len();
    if source >= len {
        return Err(ReorderError::SourceOutOfRange { source, len });
    }
    if target > len {
        return Err(ReorderError::TargetOutOfRange { target, len });
    }

    let mut out = list.to_vec();
    if target == source || target == source + 1 {
        return Ok(out);
    }

    let moved = out.remove(source);
    // Removing the source shifts every later index down by one, which is
    // exactly the off-by-one the gap convention requires when moving toward
    // the tail.
    let dest = if source < target { target - 1 } else { target };
    out.insert(dest, moved);
    Ok(out)
}

/// Final resting index of the moved element for a committed reorder.
/// Mirrors the destination arithmetic in [`reorder`]; no-op pairs map to
/// `source` itself.
pub fn destination_index(source: usize, target: usize) -> usize {
    if target == source || target == source + 1 {
        source
    } else if source < target {
        target - 1
    } else {
        target
    }
}
