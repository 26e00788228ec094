use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LocationPromptState {
    #[default]
    Hidden,
    Editing {
        buffer: String,
    },
    /// Operator confirmed the buffer; the caller dispatches it and hides
    /// the prompt.
    Submitted {
        location: String,
    },
}

impl UiState for LocationPromptState {}

impl LocationPromptState {
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    pub fn buffer(&self) -> Option<&str> {
        match self {
            Self::Editing { buffer } => Some(buffer),
            _ => None,
        }
    }

    /// Take a submitted location, leaving the prompt hidden. Any other state
    /// is left untouched.
    pub fn take_submitted(&mut self) -> Option<String> {
        match std::mem::take(self) {
            Self::Submitted { location } => Some(location),
            other => {
                *self = other;
                None
            }
        }
    }
}
