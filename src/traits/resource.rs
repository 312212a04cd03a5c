//! Resource trait for generic field access.

use serde_json::{Map, Value};

use crate::error::{Result, TrackerError};

/// Generic field access over a wrapped API response.
///
/// Every resource keeps the response keys its struct does not name in a
/// pass-through map, so no field of the payload is ever dropped. This trait
/// exposes those fields by name: a lookup returns the raw JSON value if the
/// response carried it, and fails with [`TrackerError::UnknownField`]
/// otherwise — never an absent value.
///
/// # Example
///
/// ```ignore
/// use trackerapi::{Person, Resource};
///
/// let initials = person.field("initials")?;
/// ```
pub trait Resource {
    /// Resource kind, used in unknown-field errors (e.g. `"Story"`).
    const KIND: &'static str;

    /// The pass-through fields of the wrapped response.
    fn extra(&self) -> &Map<String, Value>;

    /// Look up a pass-through field by name.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::UnknownField`] if the response did not carry
    /// the field.
    fn field(&self, name: &str) -> Result<&Value> {
        self.extra().get(name).ok_or_else(|| TrackerError::UnknownField {
            entity_type: Self::KIND,
            field: name.to_string(),
        })
    }
}
