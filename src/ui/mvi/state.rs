/// Marker trait for widget state.
///
/// States are replaced, never mutated in place, and compare by value so a
/// redraw can be skipped when nothing changed.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
