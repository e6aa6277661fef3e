//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Turns sort state plus one header interaction into the next sort state.
///
/// Implementations are pure: no I/O, no shared state, and the old state is
/// consumed rather than edited in place.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Replay a sequence of intents, e.g. the clicks recorded for a table.
    fn reduce_all<I>(state: Self::State, intents: I) -> Self::State
    where
        I: IntoIterator<Item = Self::Intent>,
    {
        intents.into_iter().fold(state, Self::reduce)
    }
}
