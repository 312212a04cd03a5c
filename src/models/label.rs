//! Label model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::traits::Resource;

/// A Tracker label.
///
/// Labels tie stories to the epic sharing their name. Beyond the name the
/// payload is a plain field bag, passed through as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    /// Unique label ID.
    #[serde(default)]
    pub id: Option<u64>,

    /// The label text.
    pub name: String,

    /// Remaining response fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for Label {
    const KIND: &'static str = "Label";

    fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}
