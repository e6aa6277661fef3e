/// Marker for state kept between interactions.
///
/// `Default` is the state a fresh table starts in; `PartialEq` lets callers
/// skip a re-sort when a reduce left the state unchanged.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
