use serde::{Deserialize, Serialize};

use dogpound_core::{AdopterId, DogId, DomainError, DomainResult};

/// A dog record as held by the store.
///
/// The identifier is assigned by the store on create and never changes
/// afterwards; name and weight are always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dog {
    pub id: DogId,
    pub name: String,
    pub weight: f64,
    pub adopter_id: Option<AdopterId>,
}

/// Validated payload for creating a dog.
///
/// Construction enforces the entity invariants (non-empty name, non-zero
/// weight) so the store never sees an invalid record.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDog {
    name: String,
    weight: f64,
    adopter_id: Option<AdopterId>,
}

impl NewDog {
    pub fn new(
        name: impl Into<String>,
        weight: f64,
        adopter_id: Option<AdopterId>,
    ) -> DomainResult<Self> {
        let name = name.into();
        validate_name(&name)?;
        validate_weight(weight)?;
        Ok(Self {
            name,
            weight,
            adopter_id,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn adopter_id(&self) -> Option<AdopterId> {
        self.adopter_id
    }

    /// Materialize the record under a store-assigned identifier.
    pub fn into_dog(self, id: DogId) -> Dog {
        Dog {
            id,
            name: self.name,
            weight: self.weight,
            adopter_id: self.adopter_id,
        }
    }
}

/// Validated payload for a full update.
///
/// An update replaces name, weight and adopter reference wholesale; partial
/// updates are not part of the contract.
#[derive(Debug, Clone, PartialEq)]
pub struct DogChanges {
    name: String,
    weight: f64,
    adopter_id: Option<AdopterId>,
}

impl DogChanges {
    pub fn new(
        name: impl Into<String>,
        weight: f64,
        adopter_id: Option<AdopterId>,
    ) -> DomainResult<Self> {
        let name = name.into();
        validate_name(&name)?;
        validate_weight(weight)?;
        Ok(Self {
            name,
            weight,
            adopter_id,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn adopter_id(&self) -> Option<AdopterId> {
        self.adopter_id
    }

    /// Apply the changes to an existing record, preserving its identifier.
    pub fn apply_to(self, dog: &mut Dog) {
        dog.name = self.name;
        dog.weight = self.weight;
        dog.adopter_id = self.adopter_id;
    }
}

fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("name must not be empty"));
    }
    Ok(())
}

fn validate_weight(weight: f64) -> DomainResult<()> {
    if weight == 0.0 || !weight.is_finite() {
        return Err(DomainError::validation("weight must be a non-zero number"));
    }
    Ok(())
}
