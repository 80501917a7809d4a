//! Storage port — repository traits for the two collections.
//!
//! `get` and `update` return `Ok(None)` for unknown ids; mapping that onto
//! [`NotFoundError`](guidepost_domain::error::NotFoundError) is the
//! services' job. `insert` owns id assignment so implementations can check
//! the generated key against the live key set.

use std::future::Future;

use guidepost_domain::business::{Business, BusinessPatch};
use guidepost_domain::error::GuidepostError;
use guidepost_domain::event::{Event, EventPatch};
use guidepost_domain::id::{BusinessId, EventId};

/// Repository contract for the business collection.
pub trait BusinessRepository {
    /// Fetch one record by id.
    fn get(
        &self,
        id: BusinessId,
    ) -> impl Future<Output = Result<Option<Business>, GuidepostError>> + Send;

    /// Snapshot every `(id, record)` pair in insertion order.
    fn list(&self) -> impl Future<Output = Result<Vec<(BusinessId, Business)>, GuidepostError>> + Send;

    /// Store a record under a freshly generated id and return that id.
    fn insert(
        &self,
        business: Business,
    ) -> impl Future<Output = Result<BusinessId, GuidepostError>> + Send;

    /// Merge `patch` into the record stored under `id` and return the
    /// merged record, or `None` when the id is unknown.
    fn update(
        &self,
        id: BusinessId,
        patch: BusinessPatch,
    ) -> impl Future<Output = Result<Option<Business>, GuidepostError>> + Send;
}

/// Repository contract for the event collection.
pub trait EventRepository {
    /// Fetch one record by id.
    fn get(&self, id: EventId)
    -> impl Future<Output = Result<Option<Event>, GuidepostError>> + Send;

    /// Snapshot every `(id, record)` pair in insertion order.
    fn list(&self) -> impl Future<Output = Result<Vec<(EventId, Event)>, GuidepostError>> + Send;

    /// Store a record under a freshly generated id and return that id.
    fn insert(&self, event: Event) -> impl Future<Output = Result<EventId, GuidepostError>> + Send;

    /// Merge `patch` into the record stored under `id` and return the
    /// merged record, or `None` when the id is unknown.
    fn update(
        &self,
        id: EventId,
        patch: EventPatch,
    ) -> impl Future<Output = Result<Option<Event>, GuidepostError>> + Send;
}
