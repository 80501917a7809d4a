//! Business service — use-cases for the business collection.

use guidepost_domain::business::{Business, BusinessPatch};
use guidepost_domain::error::{GuidepostError, NotFoundError};
use guidepost_domain::id::BusinessId;
use guidepost_domain::query;

use crate::ports::BusinessRepository;

/// Application service for business listing operations.
pub struct BusinessService<R> {
    repo: R,
}

impl<R: BusinessRepository> BusinessService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List businesses matching `q`, sorted descending by category.
    ///
    /// An empty `q` matches everything. `category` is the only sort key
    /// this service supports; rejecting other `sort-by` values is the
    /// transport layer's job.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_businesses(
        &self,
        q: &str,
    ) -> Result<Vec<(BusinessId, Business)>, GuidepostError> {
        let items = self.repo.list().await?;
        Ok(query::filter_and_sort(items, q, |business| {
            business.category
        }))
    }

    /// Snapshot the raw id→record mapping, unfiltered and unsorted.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn all_businesses(&self) -> Result<Vec<(BusinessId, Business)>, GuidepostError> {
        self.repo.list().await
    }

    /// Look up a business by id.
    ///
    /// # Errors
    ///
    /// Returns [`GuidepostError::NotFound`] when no business with `id`
    /// exists, or a storage error from the repository.
    pub async fn get_business(&self, id: BusinessId) -> Result<Business, GuidepostError> {
        self.repo.get(id.clone()).await?.ok_or_else(|| {
            NotFoundError {
                resource: "Business",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Create a new business after validating domain invariants, returning
    /// the generated id alongside the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`GuidepostError::Validation`] if invariants fail, or a
    /// storage error from the repository.
    pub async fn create_business(
        &self,
        business: Business,
    ) -> Result<(BusinessId, Business), GuidepostError> {
        business.validate()?;
        let id = self.repo.insert(business.clone()).await?;
        tracing::debug!(id = %id, name = %business.name, "business created");
        Ok((id, business))
    }

    /// Apply a partial update to an existing business and return the
    /// merged record.
    ///
    /// # Errors
    ///
    /// Returns [`GuidepostError::NotFound`] when no business with `id`
    /// exists, or a storage error from the repository.
    pub async fn update_business(
        &self,
        id: BusinessId,
        patch: BusinessPatch,
    ) -> Result<Business, GuidepostError> {
        self.repo.update(id.clone(), patch).await?.ok_or_else(|| {
            NotFoundError {
                resource: "Business",
                id: id.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guidepost_domain::category::Category;
    use guidepost_domain::error::ValidationError;
    use std::future::Future;
    use std::sync::Mutex;

    struct InMemoryBusinessRepo {
        store: Mutex<Vec<(BusinessId, Business)>>,
    }

    impl Default for InMemoryBusinessRepo {
        fn default() -> Self {
            Self {
                store: Mutex::new(Vec::new()),
            }
        }
    }

    impl BusinessRepository for InMemoryBusinessRepo {
        fn get(
            &self,
            id: BusinessId,
        ) -> impl Future<Output = Result<Option<Business>, GuidepostError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store
                .iter()
                .find(|(key, _)| *key == id)
                .map(|(_, business)| business.clone());
            async { Ok(result) }
        }

        fn list(
            &self,
        ) -> impl Future<Output = Result<Vec<(BusinessId, Business)>, GuidepostError>> + Send
        {
            let store = self.store.lock().unwrap();
            let result = store.clone();
            async { Ok(result) }
        }

        fn insert(
            &self,
            business: Business,
        ) -> impl Future<Output = Result<BusinessId, GuidepostError>> + Send {
            let mut store = self.store.lock().unwrap();
            let id = BusinessId::random();
            store.push((id.clone(), business));
            async { Ok(id) }
        }

        fn update(
            &self,
            id: BusinessId,
            patch: BusinessPatch,
        ) -> impl Future<Output = Result<Option<Business>, GuidepostError>> + Send {
            let mut store = self.store.lock().unwrap();
            let result = store.iter_mut().find(|(key, _)| *key == id).map(
                |(_, business)| {
                    business.apply(patch);
                    business.clone()
                },
            );
            async { Ok(result) }
        }
    }

    fn make_service() -> BusinessService<InMemoryBusinessRepo> {
        BusinessService::new(InMemoryBusinessRepo::default())
    }

    fn valid_business(name: &str, description: &str, category: Category) -> Business {
        Business::builder()
            .name(name)
            .location("somewhere")
            .description(description)
            .category(category)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_and_fetch_business() {
        let svc = make_service();
        let (id, _) = svc
            .create_business(valid_business("Joe's Bar", "craft beer", Category::Bar))
            .await
            .unwrap();

        let fetched = svc.get_business(id).await.unwrap();
        assert_eq!(fetched.name, "Joe's Bar");
        assert_eq!(fetched.category, Category::Bar);
    }

    #[tokio::test]
    async fn should_reject_create_when_name_is_empty() {
        let svc = make_service();
        let mut business = valid_business("x", "y", Category::Shop);
        business.name = String::new();

        let result = svc.create_business(business).await;
        assert!(matches!(
            result,
            Err(GuidepostError::Validation(ValidationError::EmptyField(
                "name"
            )))
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_business_missing() {
        let svc = make_service();
        let result = svc.get_business(BusinessId::random()).await;
        assert!(matches!(result, Err(GuidepostError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_business() {
        let svc = make_service();
        let result = svc
            .update_business(BusinessId::random(), BusinessPatch::default())
            .await;
        assert!(matches!(result, Err(GuidepostError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_change_only_patched_field_on_update() {
        let svc = make_service();
        let (id, _) = svc
            .create_business(valid_business("Joe's Bar", "craft beer", Category::Bar))
            .await
            .unwrap();

        let updated = svc
            .update_business(
                id.clone(),
                BusinessPatch {
                    rating: Some("4.5".to_string()),
                    ..BusinessPatch::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.rating, "4.5");
        assert_eq!(updated.name, "Joe's Bar");

        let fetched = svc.get_business(id).await.unwrap();
        assert_eq!(fetched.rating, "4.5");
    }

    #[tokio::test]
    async fn should_list_filtered_and_sorted_descending_by_category() {
        let svc = make_service();
        svc.create_business(valid_business("Joe's Bar", "craft beer", Category::Bar))
            .await
            .unwrap();
        svc.create_business(valid_business("City Club", "dancing", Category::Club))
            .await
            .unwrap();

        let all = svc.list_businesses("").await.unwrap();
        let names: Vec<&str> = all.iter().map(|(_, b)| b.name.as_str()).collect();
        assert_eq!(names, ["City Club", "Joe's Bar"]);

        let beer = svc.list_businesses("beer").await.unwrap();
        assert_eq!(beer.len(), 1);
        assert_eq!(beer[0].1.name, "Joe's Bar");
    }

    #[tokio::test]
    async fn should_default_category_to_shop_when_created_unset() {
        let svc = make_service();
        let business = Business::builder()
            .name("Corner Store")
            .location("1 Main St")
            .description("groceries")
            .build()
            .unwrap();

        let (id, _) = svc.create_business(business).await.unwrap();
        let fetched = svc.get_business(id).await.unwrap();
        assert_eq!(fetched.category, Category::Shop);
    }
}
