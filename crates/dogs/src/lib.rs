//! `dogpound-dogs` — the Dog domain entity and its validated payload types.

pub mod dog;

pub use dog::{Dog, DogChanges, NewDog};
