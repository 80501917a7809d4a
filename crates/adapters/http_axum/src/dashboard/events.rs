//! Dashboard pages for events.

use std::str::FromStr;

use askama::Template;
use axum::extract::{Form, Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use guidepost_app::ports::{BusinessRepository, EventRepository};
use guidepost_domain::error::GuidepostError;
use guidepost_domain::event::{Event, EventPatch};
use guidepost_domain::id::EventId;

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for the list page. Events always sort by date, so only
/// the filter is configurable.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub q: String,
}

/// Event list page template.
#[derive(Template)]
#[template(path = "event_list.html")]
pub struct EventListTemplate {
    q: String,
    events: Vec<(EventId, Event)>,
}

impl IntoResponse for EventListTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Event detail page template.
#[derive(Template)]
#[template(path = "event_detail.html")]
pub struct EventDetailTemplate {
    id: EventId,
    event: Event,
}

impl IntoResponse for EventDetailTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Response from the form handlers (PRG pattern).
pub enum FormResponse {
    /// Redirect to the record's detail page.
    Redirect(Redirect),
}

impl IntoResponse for FormResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Redirect(redirect) => redirect.into_response(),
        }
    }
}

/// `GET /events` — filtered list, newest date first.
pub async fn list<BR, ER>(
    State(state): State<AppState<BR, ER>>,
    Query(query): Query<ListQuery>,
) -> Result<EventListTemplate, ApiError>
where
    BR: BusinessRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    let events = state.event_service.list_events(&query.q).await?;

    Ok(EventListTemplate { q: query.q, events })
}

/// `GET /events/{id}` — detail page with an edit form.
pub async fn detail<BR, ER>(
    State(state): State<AppState<BR, ER>>,
    Path(id): Path<String>,
) -> Result<EventDetailTemplate, ApiError>
where
    BR: BusinessRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    let event_id = EventId::from_str(&id).map_err(GuidepostError::from)?;
    let event = state.event_service.get_event(event_id.clone()).await?;

    Ok(EventDetailTemplate {
        id: event_id,
        event,
    })
}

/// Form data for creating an event.
#[derive(Deserialize)]
pub struct CreateForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub venue: String,
    #[serde(rename = "URL", default)]
    pub url: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub description: String,
}

/// `POST /events` — create from form data, redirect to detail (PRG).
pub async fn create<BR, ER>(
    State(state): State<AppState<BR, ER>>,
    Form(form): Form<CreateForm>,
) -> Result<FormResponse, ApiError>
where
    BR: BusinessRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    let event = Event::builder()
        .name(form.name)
        .location(form.location)
        .venue(form.venue)
        .url(form.url)
        .date(form.date)
        .time(form.time)
        .description(form.description)
        .build()?;
    let (id, _) = state.event_service.create_event(event).await?;

    Ok(FormResponse::Redirect(Redirect::to(&format!(
        "/events/{id}"
    ))))
}

/// Form data for editing an event. An empty value means "leave unchanged".
#[derive(Deserialize)]
pub struct EditForm {
    pub name: Option<String>,
    pub location: Option<String>,
    pub venue: Option<String>,
    #[serde(rename = "URL")]
    pub url: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub description: Option<String>,
}

/// `POST /events/{id}` — partial update from form data (PRG).
pub async fn update<BR, ER>(
    State(state): State<AppState<BR, ER>>,
    Path(id): Path<String>,
    Form(form): Form<EditForm>,
) -> Result<FormResponse, ApiError>
where
    BR: BusinessRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    let event_id = EventId::from_str(&id).map_err(GuidepostError::from)?;

    let patch = EventPatch {
        name: non_empty(form.name),
        location: non_empty(form.location),
        venue: non_empty(form.venue),
        url: non_empty(form.url),
        date: non_empty(form.date),
        time: non_empty(form.time),
        description: non_empty(form.description),
    };
    state.event_service.update_event(event_id, patch).await?;

    Ok(FormResponse::Redirect(Redirect::to(&format!(
        "/events/{id}"
    ))))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
