//! Multi-column sort mode: several criteria, prioritised by when each
//! column was added.

use super::types::{SortCriteria, SortCriterion, SortToggle};

/// Apply a header toggle in multi-column mode.
///
/// - `None` removes the column if present; the rest keep their order.
/// - A direction on an active column changes it in place, keeping its
///   priority.
/// - A direction on an inactive column appends it as the last tiebreaker.
///
/// Removing a column and adding it back therefore moves it to the end.
pub fn update_settings(current: &SortCriteria, toggled: SortToggle) -> SortCriteria {
    let position = current.position(&toggled.column_id);
    let mut next = current.clone();

    match (toggled.direction.as_sort(), position) {
        (None, Some(p)) => {
            let removed = next.remove_at(p);
            tracing::trace!(column = %removed.column_id, position = p, "Sort column removed");
        }
        (None, None) => {}
        (Some(direction), Some(p)) => {
            next.set_direction(p, direction);
            tracing::trace!(column = %toggled.column_id, position = p, ?direction, "Sort direction changed");
        }
        (Some(direction), None) => {
            tracing::trace!(column = %toggled.column_id, position = next.len(), ?direction, "Sort column appended");
            next.push_new(SortCriterion {
                column_id: toggled.column_id,
                direction,
            });
        }
    }

    next
}
