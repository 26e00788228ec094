use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum LocationIntent {
    /// Open the prompt prefilled with the current location.
    Open { current: String },
    Insert(char),
    Backspace,
    /// Clear the whole buffer (Ctrl+U).
    Clear,
    Submit,
    Cancel,
}

impl Intent for LocationIntent {}
