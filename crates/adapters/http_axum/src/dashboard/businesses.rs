//! Dashboard pages for businesses.

use std::str::FromStr;

use askama::Template;
use axum::extract::{Form, Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use guidepost_app::ports::{BusinessRepository, EventRepository};
use guidepost_domain::business::{Business, BusinessPatch};
use guidepost_domain::category::Category;
use guidepost_domain::error::GuidepostError;
use guidepost_domain::id::BusinessId;

use crate::error::ApiError;
use crate::state::AppState;

/// Supported `sort-by` values. `category` is the only sort key the list
/// offers; anything else is rejected by the query extractor (400).
#[derive(Debug, Default, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Category,
}

/// Query parameters for the list page.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default, rename = "sort-by")]
    pub sort_by: SortBy,
}

/// Business list page template.
#[derive(Template)]
#[template(path = "business_list.html")]
pub struct BusinessListTemplate {
    q: String,
    businesses: Vec<(BusinessId, Business)>,
    categories: [Category; 4],
}

impl IntoResponse for BusinessListTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Business detail page template.
#[derive(Template)]
#[template(path = "business_detail.html")]
pub struct BusinessDetailTemplate {
    id: BusinessId,
    business: Business,
    categories: [Category; 4],
}

impl IntoResponse for BusinessDetailTemplate {
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

/// `GET /businesses` — filtered, sorted list plus search and create forms.
pub async fn list<BR, ER>(
    State(state): State<AppState<BR, ER>>,
    Query(query): Query<ListQuery>,
) -> Result<BusinessListTemplate, ApiError>
where
    BR: BusinessRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    let businesses = match query.sort_by {
        SortBy::Category => state.business_service.list_businesses(&query.q).await?,
    };

    Ok(BusinessListTemplate {
        q: query.q,
        businesses,
        categories: Category::ALL,
    })
}

/// `GET /businesses/{id}` — detail page with an edit form.
pub async fn detail<BR, ER>(
    State(state): State<AppState<BR, ER>>,
    Path(id): Path<String>,
) -> Result<BusinessDetailTemplate, ApiError>
where
    BR: BusinessRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    let business_id = BusinessId::from_str(&id).map_err(GuidepostError::from)?;
    let business = state
        .business_service
        .get_business(business_id.clone())
        .await?;

    Ok(BusinessDetailTemplate {
        id: business_id,
        business,
        categories: Category::ALL,
    })
}

/// Form data for creating a business.
#[derive(Deserialize)]
pub struct CreateForm {
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
    pub category: Option<String>,
}

/// `POST /businesses` — create from form data, redirect to detail (PRG).
pub async fn create<BR, ER>(
    State(state): State<AppState<BR, ER>>,
    Form(form): Form<CreateForm>,
) -> Result<FormResponse, ApiError>
where
    BR: BusinessRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    let mut builder = Business::builder()
        .name(form.name)
        .location(form.location)
        .url(form.url)
        .phone(form.phone)
        .hours(form.hours)
        .rating(form.rating)
        .description(form.description);
    if let Some(category) = parse_category(form.category)? {
        builder = builder.category(category);
    }

    let business = builder.build()?;
    let (id, _) = state.business_service.create_business(business).await?;

    Ok(FormResponse::Redirect(Redirect::to(&format!(
        "/businesses/{id}"
    ))))
}

/// Form data for editing a business. Browsers submit every input, so an
/// empty value is treated as "leave unchanged" rather than "clear".
#[derive(Deserialize)]
pub struct EditForm {
    pub name: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "URL")]
    pub url: Option<String>,
    pub phone: Option<String>,
    pub hours: Option<String>,
    pub rating: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

/// `POST /businesses/{id}` — partial update from form data (PRG).
pub async fn update<BR, ER>(
    State(state): State<AppState<BR, ER>>,
    Path(id): Path<String>,
    Form(form): Form<EditForm>,
) -> Result<FormResponse, ApiError>
where
    BR: BusinessRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    let business_id = BusinessId::from_str(&id).map_err(GuidepostError::from)?;

    let patch = BusinessPatch {
        name: non_empty(form.name),
        location: non_empty(form.location),
        url: non_empty(form.url),
        phone: non_empty(form.phone),
        hours: non_empty(form.hours),
        rating: non_empty(form.rating),
        description: non_empty(form.description),
        category: parse_category(form.category)?,
    };
    state
        .business_service
        .update_business(business_id, patch)
        .await?;

    Ok(FormResponse::Redirect(Redirect::to(&format!(
        "/businesses/{id}"
    ))))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_category(value: Option<String>) -> Result<Option<Category>, ApiError> {
    match non_empty(value) {
        Some(raw) => {
            let category = Category::parse(&raw).map_err(GuidepostError::from)?;
            Ok(Some(category))
        }
        None => Ok(None),
    }
}
