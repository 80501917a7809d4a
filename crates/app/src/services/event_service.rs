//! Event service — use-cases for the event collection.

use guidepost_domain::error::{GuidepostError, NotFoundError};
use guidepost_domain::event::{Event, EventPatch};
use guidepost_domain::id::EventId;
use guidepost_domain::query;

use crate::ports::EventRepository;

/// Application service for event listing operations.
pub struct EventService<R> {
    repo: R,
}

impl<R: EventRepository> EventService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List events matching `q`, sorted descending by date.
    ///
    /// Events carry no category, so the date string is their sort key.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_events(&self, q: &str) -> Result<Vec<(EventId, Event)>, GuidepostError> {
        let items = self.repo.list().await?;
        Ok(query::filter_and_sort(items, q, |event| event.date.clone()))
    }

    /// Snapshot the raw id→record mapping, unfiltered and unsorted.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn all_events(&self) -> Result<Vec<(EventId, Event)>, GuidepostError> {
        self.repo.list().await
    }

    /// Look up an event by id.
    ///
    /// # Errors
    ///
    /// Returns [`GuidepostError::NotFound`] when no event with `id`
    /// exists, or a storage error from the repository.
    pub async fn get_event(&self, id: EventId) -> Result<Event, GuidepostError> {
        self.repo.get(id.clone()).await?.ok_or_else(|| {
            NotFoundError {
                resource: "Event",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Create a new event after validating domain invariants, returning
    /// the generated id alongside the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`GuidepostError::Validation`] if invariants fail, or a
    /// storage error from the repository.
    pub async fn create_event(&self, event: Event) -> Result<(EventId, Event), GuidepostError> {
        event.validate()?;
        let id = self.repo.insert(event.clone()).await?;
        tracing::debug!(id = %id, name = %event.name, "event created");
        Ok((id, event))
    }

    /// Apply a partial update to an existing event and return the merged
    /// record.
    ///
    /// # Errors
    ///
    /// Returns [`GuidepostError::NotFound`] when no event with `id`
    /// exists, or a storage error from the repository.
    pub async fn update_event(
        &self,
        id: EventId,
        patch: EventPatch,
    ) -> Result<Event, GuidepostError> {
        self.repo.update(id.clone(), patch).await?.ok_or_else(|| {
            NotFoundError {
                resource: "Event",
                id: id.to_string(),
            }
            .into()
        })
    }
}
