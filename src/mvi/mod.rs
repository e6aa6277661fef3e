//! Model-View-Intent primitives for sort state.
//!
//! The surrounding table UI owns the view. This crate owns the other two
//! legs of the loop:
//!
//! ```text
//! header click ──→ Intent ──→ Reducer ──→ SortCriteria ──→ sort(rows)
//!      ↑                                                       │
//!      └───────────────────────────────────────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
