/// Marker for anything a reducer accepts: header toggles, clicks, resets.
pub trait Intent: Send + 'static {}
