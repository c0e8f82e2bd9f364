use serde::{Deserialize, Deserializer};

use dogpound_core::AdopterId;
use dogpound_dogs::Dog;

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /api/dogs`. Fields are `Option` so the handler can report
/// exactly which required fields are missing instead of failing extraction.
#[derive(Debug, Deserialize)]
pub struct CreateDogRequest {
    pub name: Option<String>,
    pub weight: Option<f64>,
    pub adopter_id: Option<AdopterId>,
}

impl CreateDogRequest {
    /// Required fields that are absent or empty, in reporting order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.as_deref().is_none_or(|n| n.trim().is_empty()) {
            missing.push("name");
        }
        if self.weight.is_none_or(|w| w == 0.0) {
            missing.push("weight");
        }
        missing
    }
}

/// Body of `PUT /api/dogs/:id`. A full update requires all three fields to
/// be present; `adopter_id` may be an explicit null (no adopter) but must
/// not be absent, hence the double `Option`.
#[derive(Debug, Deserialize)]
pub struct UpdateDogRequest {
    pub name: Option<String>,
    pub weight: Option<f64>,
    #[serde(default, deserialize_with = "present_or_null")]
    pub adopter_id: Option<Option<AdopterId>>,
}

impl UpdateDogRequest {
    /// Required fields that are absent or empty, in reporting order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.as_deref().is_none_or(|n| n.trim().is_empty()) {
            missing.push("name");
        }
        if self.weight.is_none_or(|w| w == 0.0) {
            missing.push("weight");
        }
        if self.adopter_id.is_none() {
            missing.push("adopter_id");
        }
        missing
    }
}

// Maps an explicit JSON null to `Some(None)` so it stays distinguishable
// from a field that was never sent (`None` via `serde(default)`).
fn present_or_null<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn dog_to_json(dog: &Dog) -> serde_json::Value {
    serde_json::json!({
        "id": dog.id.to_string(),
        "name": dog.name,
        "weight": dog.weight,
        "adopter_id": dog.adopter_id.map(|a| a.to_string()),
    })
}

/// "name is required" / "name and weight are required" /
/// "name, weight and adopter_id are required".
pub fn required_fields_message(missing: &[&'static str]) -> String {
    match missing {
        [] => String::new(),
        [only] => format!("{only} is required"),
        [head @ .., last] => format!("{} and {last} are required", head.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_reports_absent_and_empty_fields() {
        let body: CreateDogRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(body.missing_fields(), vec!["name", "weight"]);

        let body: CreateDogRequest =
            serde_json::from_str(r#"{"name": "  ", "weight": 0}"#).unwrap();
        assert_eq!(body.missing_fields(), vec!["name", "weight"]);

        let body: CreateDogRequest =
            serde_json::from_str(r#"{"name": "Rex", "weight": 12.5}"#).unwrap();
        assert!(body.missing_fields().is_empty());
    }

    #[test]
    fn update_request_distinguishes_null_adopter_from_absent() {
        let body: UpdateDogRequest =
            serde_json::from_str(r#"{"name": "Rex", "weight": 12.5, "adopter_id": null}"#).unwrap();
        assert!(body.missing_fields().is_empty());
        assert_eq!(body.adopter_id, Some(None));

        let body: UpdateDogRequest =
            serde_json::from_str(r#"{"name": "Rex", "weight": 12.5}"#).unwrap();
        assert_eq!(body.missing_fields(), vec!["adopter_id"]);
    }

    #[test]
    fn required_fields_message_reads_naturally() {
        assert_eq!(required_fields_message(&["weight"]), "weight is required");
        assert_eq!(
            required_fields_message(&["name", "weight"]),
            "name and weight are required"
        );
        assert_eq!(
            required_fields_message(&["name", "weight", "adopter_id"]),
            "name, weight and adopter_id are required"
        );
    }
}
