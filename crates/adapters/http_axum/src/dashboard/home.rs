//! Dashboard home page — overview of the directory.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use guidepost_app::ports::{BusinessRepository, EventRepository};

use crate::error::ApiError;
use crate::state::AppState;

/// Home page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    business_count: usize,
    event_count: usize,
}

impl IntoResponse for HomeTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /` — directory overview.
pub async fn index<BR, ER>(State(state): State<AppState<BR, ER>>) -> Result<HomeTemplate, ApiError>
where
    BR: BusinessRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    let businesses = state.business_service.all_businesses().await?;
    let events = state.event_service.all_events().await?;

    Ok(HomeTemplate {
        business_count: businesses.len(),
        event_count: events.len(),
    })
}
