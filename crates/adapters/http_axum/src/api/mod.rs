//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod businesses;
#[allow(clippy::missing_errors_doc)]
pub mod events;

use axum::Router;
use axum::routing::get;

use guidepost_app::ports::{BusinessRepository, EventRepository};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<BR, ER>() -> Router<AppState<BR, ER>>
where
    BR: BusinessRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    Router::new()
        // Businesses
        .route(
            "/businesses",
            get(businesses::list::<BR, ER>).post(businesses::create::<BR, ER>),
        )
        .route(
            "/businesses/{id}",
            get(businesses::get::<BR, ER>).patch(businesses::update::<BR, ER>),
        )
        // Events
        .route(
            "/events",
            get(events::list::<BR, ER>).post(events::create::<BR, ER>),
        )
        .route(
            "/events/{id}",
            get(events::get::<BR, ER>).patch(events::update::<BR, ER>),
        )
}
