//! Shared application state for axum handlers.

use std::sync::Arc;

use guidepost_app::ports::{BusinessRepository, EventRepository};
use guidepost_app::services::business_service::BusinessService;
use guidepost_app::services::event_service::EventService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch. `Clone` is
/// implemented manually so the underlying types themselves do not need to
/// be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<BR, ER> {
    /// Business listing service.
    pub business_service: Arc<BusinessService<BR>>,
    /// Event listing service.
    pub event_service: Arc<EventService<ER>>,
}

impl<BR, ER> Clone for AppState<BR, ER> {
    fn clone(&self) -> Self {
        Self {
            business_service: Arc::clone(&self.business_service),
            event_service: Arc::clone(&self.event_service),
        }
    }
}

impl<BR, ER> AppState<BR, ER>
where
    BR: BusinessRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(business_service: BusinessService<BR>, event_service: EventService<ER>) -> Self {
        Self {
            business_service: Arc::new(business_service),
            event_service: Arc::new(event_service),
        }
    }
}
