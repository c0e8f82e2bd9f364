use std::sync::Arc;

use dogpound_infra::{DogStore, InMemoryDogStore};

/// Shared service handles injected into every request via `Extension`.
///
/// The API holds no state of its own between requests; everything lives
/// behind the store.
pub struct AppServices {
    store: Arc<dyn DogStore>,
}

impl AppServices {
    pub fn new(store: Arc<dyn DogStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn DogStore {
        self.store.as_ref()
    }
}

/// Default wiring: in-memory store (dev/test).
pub fn build_services() -> AppServices {
    AppServices::new(Arc::new(InMemoryDogStore::new()))
}
