use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use thiserror::Error;

use dogpound_core::DogId;
use dogpound_dogs::{Dog, DogChanges, NewDog};

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Unexpected backend failure.
///
/// Not-found is not an error at this layer; lookups return `None` instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("store backend failure: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

/// Data-access contract for dog records.
///
/// Every method is one atomic store call; callers hold no state between
/// requests.
#[async_trait]
pub trait DogStore: Send + Sync {
    async fn find_all(&self) -> StoreResult<Vec<Dog>>;
    async fn find_by_id(&self, id: DogId) -> StoreResult<Option<Dog>>;
    /// Assigns the identifier and returns the stored record.
    async fn create(&self, new: NewDog) -> StoreResult<Dog>;
    /// Full replacement; `None` when the id does not exist.
    async fn update(&self, id: DogId, changes: DogChanges) -> StoreResult<Option<Dog>>;
    /// Returns the removed record, `None` when the id does not exist.
    async fn delete(&self, id: DogId) -> StoreResult<Option<Dog>>;
}

#[async_trait]
impl<S> DogStore for Arc<S>
where
    S: DogStore + ?Sized,
{
    async fn find_all(&self) -> StoreResult<Vec<Dog>> {
        (**self).find_all().await
    }

    async fn find_by_id(&self, id: DogId) -> StoreResult<Option<Dog>> {
        (**self).find_by_id(id).await
    }

    async fn create(&self, new: NewDog) -> StoreResult<Dog> {
        (**self).create(new).await
    }

    async fn update(&self, id: DogId, changes: DogChanges) -> StoreResult<Option<Dog>> {
        (**self).update(id, changes).await
    }

    async fn delete(&self, id: DogId) -> StoreResult<Option<Dog>> {
        (**self).delete(id).await
    }
}

/// In-memory store for dev/test.
///
/// Lock poisoning surfaces as `StoreError::Backend` rather than a panic so
/// the HTTP layer can report it as an ordinary failure.
#[derive(Debug, Default)]
pub struct InMemoryDogStore {
    inner: RwLock<HashMap<DogId, Dog>>,
}

impl InMemoryDogStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl DogStore for InMemoryDogStore {
    async fn find_all(&self) -> StoreResult<Vec<Dog>> {
        let map = self
            .inner
            .read()
            .map_err(|e| StoreError::backend(e.to_string()))?;
        Ok(map.values().cloned().collect())
    }

    async fn find_by_id(&self, id: DogId) -> StoreResult<Option<Dog>> {
        let map = self
            .inner
            .read()
            .map_err(|e| StoreError::backend(e.to_string()))?;
        Ok(map.get(&id).cloned())
    }

    async fn create(&self, new: NewDog) -> StoreResult<Dog> {
        let dog = new.into_dog(DogId::new());
        let mut map = self
            .inner
            .write()
            .map_err(|e| StoreError::backend(e.to_string()))?;
        map.insert(dog.id, dog.clone());
        Ok(dog)
    }

    async fn update(&self, id: DogId, changes: DogChanges) -> StoreResult<Option<Dog>> {
        let mut map = self
            .inner
            .write()
            .map_err(|e| StoreError::backend(e.to_string()))?;
        match map.get_mut(&id) {
            Some(dog) => {
                changes.apply_to(dog);
                Ok(Some(dog.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: DogId) -> StoreResult<Option<Dog>> {
        let mut map = self
            .inner
            .write()
            .map_err(|e| StoreError::backend(e.to_string()))?;
        Ok(map.remove(&id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dogpound_core::AdopterId;

    fn new_dog(name: &str, weight: f64) -> NewDog {
        NewDog::new(name, weight, None).unwrap()
    }

    #[tokio::test]
    async fn create_assigns_an_id_and_stores_the_record() {
        let store = InMemoryDogStore::new();

        let created = store.create(new_dog("Rex", 12.5)).await.unwrap();
        let fetched = store.find_by_id(created.id).await.unwrap();

        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn find_all_returns_every_record() {
        let store = InMemoryDogStore::new();
        store.create(new_dog("Rex", 12.5)).await.unwrap();
        store.create(new_dog("Bruno", 9.0)).await.unwrap();

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn find_by_unknown_id_returns_none() {
        let store = InMemoryDogStore::new();
        assert_eq!(store.find_by_id(DogId::new()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_replaces_all_fields_and_keeps_the_id() {
        let store = InMemoryDogStore::new();
        let created = store.create(new_dog("Rex", 12.5)).await.unwrap();
        let adopter = AdopterId::new();

        let changes = DogChanges::new("Bruno", 9.0, Some(adopter)).unwrap();
        let updated = store.update(created.id, changes).await.unwrap().unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Bruno");
        assert_eq!(updated.weight, 9.0);
        assert_eq!(updated.adopter_id, Some(adopter));
    }

    #[tokio::test]
    async fn update_unknown_id_returns_none() {
        let store = InMemoryDogStore::new();
        let changes = DogChanges::new("Bruno", 9.0, None).unwrap();
        assert_eq!(store.update(DogId::new(), changes).await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_returns_the_record_once() {
        let store = InMemoryDogStore::new();
        let created = store.create(new_dog("Rex", 12.5)).await.unwrap();

        let first = store.delete(created.id).await.unwrap();
        let second = store.delete(created.id).await.unwrap();

        assert_eq!(first, Some(created));
        assert_eq!(second, None);
    }
}
