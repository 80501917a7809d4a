//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use guidepost_app::ports::{BusinessRepository, EventRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges API routes under `/api` and dashboard routes at `/`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<BR, ER>(state: AppState<BR, ER>) -> Router
where
    BR: BusinessRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .merge(crate::dashboard::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use guidepost_app::services::business_service::BusinessService;
    use guidepost_app::services::event_service::EventService;
    use guidepost_domain::business::{Business, BusinessPatch};
    use guidepost_domain::error::GuidepostError;
    use guidepost_domain::event::{Event, EventPatch};
    use guidepost_domain::id::{BusinessId, EventId};
    use tower::ServiceExt;

    struct StubBusinessRepo;
    struct StubEventRepo;

    impl BusinessRepository for StubBusinessRepo {
        async fn get(&self, _id: BusinessId) -> Result<Option<Business>, GuidepostError> {
            Ok(None)
        }
        async fn list(&self) -> Result<Vec<(BusinessId, Business)>, GuidepostError> {
            Ok(vec![])
        }
        async fn insert(&self, _business: Business) -> Result<BusinessId, GuidepostError> {
            Ok(BusinessId::random())
        }
        async fn update(
            &self,
            _id: BusinessId,
            _patch: BusinessPatch,
        ) -> Result<Option<Business>, GuidepostError> {
            Ok(None)
        }
    }

    impl EventRepository for StubEventRepo {
        async fn get(&self, _id: EventId) -> Result<Option<Event>, GuidepostError> {
            Ok(None)
        }
        async fn list(&self) -> Result<Vec<(EventId, Event)>, GuidepostError> {
            Ok(vec![])
        }
        async fn insert(&self, _event: Event) -> Result<EventId, GuidepostError> {
            Ok(EventId::random())
        }
        async fn update(
            &self,
            _id: EventId,
            _patch: EventPatch,
        ) -> Result<Option<Event>, GuidepostError> {
            Ok(None)
        }
    }

    fn test_state() -> AppState<StubBusinessRepo, StubEventRepo> {
        AppState::new(
            BusinessService::new(StubBusinessRepo),
            EventService::new(StubEventRepo),
        )
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_business() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/businesses/zzzzzz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_reject_unknown_sort_key_on_list_page() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/businesses?sort-by=rating")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
