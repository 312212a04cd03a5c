//! Person model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::traits::Resource;

/// A Tracker person.
///
/// A plain field bag: a few identity conveniences are typed, everything
/// else stays in the pass-through map behind [`Resource::field`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Unique person ID.
    #[serde(default)]
    pub id: Option<u64>,

    /// Display name.
    #[serde(default)]
    pub name: Option<String>,

    /// Email address.
    #[serde(default)]
    pub email: Option<String>,

    /// Initials shown on story cards.
    #[serde(default)]
    pub initials: Option<String>,

    /// Remaining response fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for Person {
    const KIND: &'static str = "Person";

    fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrackerError;
    use serde_json::json;

    fn make_person() -> Person {
        serde_json::from_value(json!({
            "id": 101,
            "name": "Ada",
            "email": "ada@example.com",
            "initials": "AL",
            "username": "ada",
            "kind": "person"
        }))
        .expect("Failed to deserialize person")
    }

    #[test]
    fn test_person_deserialize() {
        let person = make_person();
        assert_eq!(person.id, Some(101));
        assert_eq!(person.name.as_deref(), Some("Ada"));
        assert_eq!(person.email.as_deref(), Some("ada@example.com"));
        assert_eq!(person.initials.as_deref(), Some("AL"));
    }

    #[test]
    fn test_field_returns_passthrough_value() {
        let person = make_person();
        assert_eq!(person.field("username").unwrap(), &json!("ada"));
        assert_eq!(person.field("kind").unwrap(), &json!("person"));
    }

    #[test]
    fn test_field_unknown_fails() {
        let person = make_person();
        let err = person.field("favorite_color").unwrap_err();
        match err {
            TrackerError::UnknownField { entity_type, field } => {
                assert_eq!(entity_type, "Person");
                assert_eq!(field, "favorite_color");
            }
            other => panic!("expected UnknownField, got {other:?}"),
        }
    }
}
