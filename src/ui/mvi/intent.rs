//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses)
/// - Screen activations (mount, route id change)
/// - Fetch outcomes tagged with the generation that issued them
pub trait Intent: Send + 'static {}
