//! In-memory implementation of [`BusinessRepository`].

use std::future::Future;

use tokio::sync::RwLock;

use guidepost_app::ports::BusinessRepository;
use guidepost_domain::business::{Business, BusinessPatch};
use guidepost_domain::error::GuidepostError;
use guidepost_domain::id::BusinessId;

/// Memory-backed business repository.
///
/// Records keep their insertion order (seed-file order first, then creation
/// order), which is what makes the query engine's stable sort meaningful.
/// Reads clone a snapshot; writes hold the exclusive lock across the whole
/// generate-check-insert or read-merge-write sequence.
pub struct MemoryBusinessRepository {
    store: RwLock<Vec<(BusinessId, Business)>>,
}

impl Default for MemoryBusinessRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBusinessRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }

    /// Create a repository pre-populated with seed records.
    #[must_use]
    pub fn seeded(records: Vec<(BusinessId, Business)>) -> Self {
        Self {
            store: RwLock::new(records),
        }
    }
}

impl BusinessRepository for MemoryBusinessRepository {
    fn get(
        &self,
        id: BusinessId,
    ) -> impl Future<Output = Result<Option<Business>, GuidepostError>> + Send {
        async move {
            let store = self.store.read().await;
            Ok(store
                .iter()
                .find(|(key, _)| *key == id)
                .map(|(_, business)| business.clone()))
        }
    }

    fn list(
        &self,
    ) -> impl Future<Output = Result<Vec<(BusinessId, Business)>, GuidepostError>> + Send {
        async move {
            let store = self.store.read().await;
            Ok(store.clone())
        }
    }

    fn insert(
        &self,
        business: Business,
    ) -> impl Future<Output = Result<BusinessId, GuidepostError>> + Send {
        async move {
            let mut store = self.store.write().await;
            let mut id = BusinessId::random();
            // 36^6 keys, so this effectively never loops; the check still
            // closes the silent-overwrite hole.
            while store.iter().any(|(key, _)| *key == id) {
                id = BusinessId::random();
            }
            store.push((id.clone(), business));
            Ok(id)
        }
    }

    fn update(
        &self,
        id: BusinessId,
        patch: BusinessPatch,
    ) -> impl Future<Output = Result<Option<Business>, GuidepostError>> + Send {
        async move {
            let mut store = self.store.write().await;
            Ok(store
                .iter_mut()
                .find(|(key, _)| *key == id)
                .map(|(_, business)| {
                    business.apply(patch);
                    business.clone()
                }))
        }
    }
}
