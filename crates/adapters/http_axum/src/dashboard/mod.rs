//! Server-side rendered HTML directory (no JavaScript).

#[allow(clippy::missing_errors_doc)]
pub mod businesses;
#[allow(clippy::missing_errors_doc)]
pub mod events;
pub mod home;

use axum::Router;
use axum::routing::get;

use guidepost_app::ports::{BusinessRepository, EventRepository};

use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
///
/// Mutations are plain form POSTs followed by redirects (PRG); HTML forms
/// cannot issue PATCH, so the edit form posts to the detail path.
pub fn routes<BR, ER>() -> Router<AppState<BR, ER>>
where
    BR: BusinessRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home::index::<BR, ER>))
        .route(
            "/businesses",
            get(businesses::list::<BR, ER>).post(businesses::create::<BR, ER>),
        )
        .route(
            "/businesses/{id}",
            get(businesses::detail::<BR, ER>).post(businesses::update::<BR, ER>),
        )
        .route(
            "/events",
            get(events::list::<BR, ER>).post(events::create::<BR, ER>),
        )
        .route(
            "/events/{id}",
            get(events::detail::<BR, ER>).post(events::update::<BR, ER>),
        )
}
