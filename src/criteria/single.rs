//! Single-column sort mode: at most one active criterion.

use super::types::{SortCriteria, SortCriterion, SortToggle};

/// Apply a header toggle in single-column mode.
///
/// Any `None` toggle clears the criteria, whichever column it names.
/// Any other toggle replaces the criteria with just that column.
pub fn update_settings(current: &SortCriteria, toggled: SortToggle) -> SortCriteria {
    let next = match toggled.direction.as_sort() {
        None => SortCriteria::new(),
        Some(direction) => SortCriteria::single(SortCriterion {
            column_id: toggled.column_id,
            direction,
        }),
    };
    tracing::trace!(
        previous = current.len(),
        next = next.len(),
        direction = ?toggled.direction,
        "Single-mode sort updated"
    );
    next
}
