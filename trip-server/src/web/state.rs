//! Application state for the web layer.

use std::sync::Arc;

use crate::itinerary::ItineraryBuilder;

/// Shared application state.
///
/// Generic over the route provider so tests can serve canned responses.
pub struct AppState<P> {
    /// Builds itineraries for incoming travel requests
    pub builder: Arc<ItineraryBuilder<P>>,
}

impl<P> AppState<P> {
    /// Create a new app state.
    pub fn new(builder: ItineraryBuilder<P>) -> Self {
        Self {
            builder: Arc::new(builder),
        }
    }
}

impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            builder: Arc::clone(&self.builder),
        }
    }
}
