//! `dogpound-infra` — persistence adapters behind the `DogStore` trait.

pub mod dog_store;

pub use dog_store::{DogStore, InMemoryDogStore, StoreError, StoreResult};
