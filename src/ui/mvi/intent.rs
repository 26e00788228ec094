/// Marker trait for intents: key presses and other operator actions fed to
/// a reducer.
pub trait Intent: Send + 'static {}
