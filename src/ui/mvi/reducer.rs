use super::intent::Intent;
use super::state::UiState;

/// The only place where widget state transitions happen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Pure transition: (State, Intent) -> State.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
