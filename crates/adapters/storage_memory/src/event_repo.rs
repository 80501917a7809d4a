//! In-memory implementation of [`EventRepository`].

use std::future::Future;

use tokio::sync::RwLock;

use guidepost_app::ports::EventRepository;
use guidepost_domain::error::GuidepostError;
use guidepost_domain::event::{Event, EventPatch};
use guidepost_domain::id::EventId;

/// Memory-backed event repository. Same locking discipline as
/// [`MemoryBusinessRepository`](crate::MemoryBusinessRepository).
pub struct MemoryEventRepository {
    store: RwLock<Vec<(EventId, Event)>>,
}

impl Default for MemoryEventRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryEventRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }

    /// Create a repository pre-populated with seed records.
    #[must_use]
    pub fn seeded(records: Vec<(EventId, Event)>) -> Self {
        Self {
            store: RwLock::new(records),
        }
    }
}

impl EventRepository for MemoryEventRepository {
    fn get(
        &self,
        id: EventId,
    ) -> impl Future<Output = Result<Option<Event>, GuidepostError>> + Send {
        async move {
            let store = self.store.read().await;
            Ok(store
                .iter()
                .find(|(key, _)| *key == id)
                .map(|(_, event)| event.clone()))
        }
    }

    fn list(&self) -> impl Future<Output = Result<Vec<(EventId, Event)>, GuidepostError>> + Send {
        async move {
            let store = self.store.read().await;
            Ok(store.clone())
        }
    }

    fn insert(&self, event: Event) -> impl Future<Output = Result<EventId, GuidepostError>> + Send {
        async move {
            let mut store = self.store.write().await;
            let mut id = EventId::random();
            while store.iter().any(|(key, _)| *key == id) {
                id = EventId::random();
            }
            store.push((id.clone(), event));
            Ok(id)
        }
    }

    fn update(
        &self,
        id: EventId,
        patch: EventPatch,
    ) -> impl Future<Output = Result<Option<Event>, GuidepostError>> + Send {
        async move {
            let mut store = self.store.write().await;
            Ok(store
                .iter_mut()
                .find(|(key, _)| *key == id)
                .map(|(_, event)| {
                    event.apply(patch);
                    event.clone()
                }))
        }
    }
}
