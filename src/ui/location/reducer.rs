use crate::ui::location::intent::LocationIntent;
use crate::ui::location::state::LocationPromptState;
use crate::ui::mvi::Reducer;

pub struct LocationReducer;

impl Reducer for LocationReducer {
    type State = LocationPromptState;
    type Intent = LocationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LocationIntent::Open { current } => LocationPromptState::Editing { buffer: current },
            LocationIntent::Cancel => LocationPromptState::Hidden,
            LocationIntent::Insert(ch) => match state {
                LocationPromptState::Editing { mut buffer } => {
                    buffer.push(ch);
                    LocationPromptState::Editing { buffer }
                }
                other => other,
            },
            LocationIntent::Backspace => match state {
                LocationPromptState::Editing { mut buffer } => {
                    buffer.pop();
                    LocationPromptState::Editing { buffer }
                }
                other => other,
            },
            LocationIntent::Clear => match state {
                LocationPromptState::Editing { .. } => LocationPromptState::Editing {
                    buffer: String::new(),
                },
                other => other,
            },
            LocationIntent::Submit => match state {
                LocationPromptState::Editing { buffer } => {
                    LocationPromptState::Submitted { location: buffer }
                }
                other => other,
            },
        }
    }
}
