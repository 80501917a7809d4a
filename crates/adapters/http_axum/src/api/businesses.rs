//! JSON handlers for businesses.
//!
//! The list and get endpoints are passthrough: they serialize the stored
//! records verbatim, so every field name survives exactly as seeded
//! (including `URL`).

use std::collections::BTreeMap;
use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use guidepost_app::ports::{BusinessRepository, EventRepository};
use guidepost_domain::business::{Business, BusinessPatch};
use guidepost_domain::category::Category;
use guidepost_domain::error::GuidepostError;
use guidepost_domain::id::BusinessId;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a business. Every field is optional at the
/// serde level; the domain's `validate` decides what is actually required,
/// so a missing field yields a 400 rather than a deserialization error.
#[derive(Deserialize)]
pub struct CreateBusinessRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "URL", default)]
    pub url: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub hours: String,
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<Category>,
}

/// A created record together with its generated id.
#[derive(Serialize)]
pub struct CreatedBusiness {
    pub id: BusinessId,
    #[serde(flatten)]
    pub business: Business,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<BTreeMap<String, Business>>),
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
    Ok(Json<Business>),
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
    Created(Json<CreatedBusiness>),
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
    Ok(Json<Business>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/businesses` — the raw id→record mapping.
pub async fn list<BR, ER>(State(state): State<AppState<BR, ER>>) -> Result<ListResponse, ApiError>
where
    BR: BusinessRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    let items = state.business_service.all_businesses().await?;
    let mapping: BTreeMap<String, Business> = items
        .into_iter()
        .map(|(id, business)| (id.to_string(), business))
        .collect();
    Ok(ListResponse::Ok(Json(mapping)))
}

/// `GET /api/businesses/{id}`
pub async fn get<BR, ER>(
    State(state): State<AppState<BR, ER>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    BR: BusinessRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    let business_id = BusinessId::from_str(&id).map_err(GuidepostError::from)?;
    let business = state.business_service.get_business(business_id).await?;
    Ok(GetResponse::Ok(Json(business)))
}

/// `POST /api/businesses`
pub async fn create<BR, ER>(
    State(state): State<AppState<BR, ER>>,
    Json(req): Json<CreateBusinessRequest>,
) -> Result<CreateResponse, ApiError>
where
    BR: BusinessRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    let mut builder = Business::builder()
        .name(req.name)
        .location(req.location)
        .url(req.url)
        .phone(req.phone)
        .hours(req.hours)
        .rating(req.rating)
        .description(req.description);
    if let Some(category) = req.category {
        builder = builder.category(category);
    }

    let business = builder.build()?;
    let (id, business) = state.business_service.create_business(business).await?;
    Ok(CreateResponse::Created(Json(CreatedBusiness {
        id,
        business,
    })))
}

/// `PATCH /api/businesses/{id}`
pub async fn update<BR, ER>(
    State(state): State<AppState<BR, ER>>,
    Path(id): Path<String>,
    Json(patch): Json<BusinessPatch>,
) -> Result<UpdateResponse, ApiError>
where
    BR: BusinessRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    let business_id = BusinessId::from_str(&id).map_err(GuidepostError::from)?;
    let business = state
        .business_service
        .update_business(business_id, patch)
        .await?;
    Ok(UpdateResponse::Ok(Json(business)))
}
