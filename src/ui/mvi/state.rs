/// Marker trait for reducer-owned state.
///
/// `Default` is the reset state; the dispatch macro swaps it in while the
/// reducer consumes the old value.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
