//! JSON handlers for events. Same passthrough contract as the business
//! endpoints.

use std::collections::BTreeMap;
use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use guidepost_app::ports::{BusinessRepository, EventRepository};
use guidepost_domain::error::GuidepostError;
use guidepost_domain::event::{Event, EventPatch};
use guidepost_domain::id::EventId;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating an event.
#[derive(Deserialize)]
pub struct CreateEventRequest {
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

/// A created record together with its generated id.
#[derive(Serialize)]
pub struct CreatedEvent {
    pub id: EventId,
    #[serde(flatten)]
    pub event: Event,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<BTreeMap<String, Event>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Event>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<CreatedEvent>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<Event>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/events` — the raw id→record mapping.
pub async fn list<BR, ER>(State(state): State<AppState<BR, ER>>) -> Result<ListResponse, ApiError>
where
    BR: BusinessRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    let items = state.event_service.all_events().await?;
    let mapping: BTreeMap<String, Event> = items
        .into_iter()
        .map(|(id, event)| (id.to_string(), event))
        .collect();
    Ok(ListResponse::Ok(Json(mapping)))
}

/// `GET /api/events/{id}`
pub async fn get<BR, ER>(
    State(state): State<AppState<BR, ER>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    BR: BusinessRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    let event_id = EventId::from_str(&id).map_err(GuidepostError::from)?;
    let event = state.event_service.get_event(event_id).await?;
    Ok(GetResponse::Ok(Json(event)))
}

/// `POST /api/events`
pub async fn create<BR, ER>(
    State(state): State<AppState<BR, ER>>,
    Json(req): Json<CreateEventRequest>,
) -> Result<CreateResponse, ApiError>
where
    BR: BusinessRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    let event = Event::builder()
        .name(req.name)
        .location(req.location)
        .venue(req.venue)
        .url(req.url)
        .date(req.date)
        .time(req.time)
        .description(req.description)
        .build()?;
    let (id, event) = state.event_service.create_event(event).await?;
    Ok(CreateResponse::Created(Json(CreatedEvent { id, event })))
}

/// `PATCH /api/events/{id}`
pub async fn update<BR, ER>(
    State(state): State<AppState<BR, ER>>,
    Path(id): Path<String>,
    Json(patch): Json<EventPatch>,
) -> Result<UpdateResponse, ApiError>
where
    BR: BusinessRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    let event_id = EventId::from_str(&id).map_err(GuidepostError::from)?;
    let event = state.event_service.update_event(event_id, patch).await?;
    Ok(UpdateResponse::Ok(Json(event)))
}
