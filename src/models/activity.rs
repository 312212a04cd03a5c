//! Activity model and trait implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::TrackerClient;
use crate::dates;
use crate::error::{Result, TrackerError};
use crate::models::Person;
use crate::traits::{FetchAll, Resource};

/// One entry in an epic's activity feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Event kind (e.g. "story_update_activity").
    #[serde(default)]
    pub kind: Option<String>,

    /// Human-readable summary of the change.
    #[serde(default)]
    pub message: Option<String>,

    /// Who performed the change.
    pub performed_by: Person,

    /// When the change happened.
    #[serde(default, deserialize_with = "dates::lenient")]
    pub occurred_at: Option<DateTime<Utc>>,

    /// Remaining response fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for Activity {
    const KIND: &'static str = "Activity";

    fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

#[async_trait]
impl FetchAll for Activity {
    /// Project id plus the epic whose feed this is.
    type Scope = (u64, u64);

    #[tracing::instrument(skip(client))]
    async fn fetch_all(client: &TrackerClient, scope: &Self::Scope) -> Result<Vec<Self>> {
        let (project_id, epic_id) = scope;
        let path = format!("projects/{project_id}/epics/{epic_id}/activity");

        let response = client.get(&path).await?;
        let activities: Vec<Activity> = response.json().await.map_err(TrackerError::HttpError)?;
        Ok(activities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_activity_deserialize() {
        let activity: Activity = serde_json::from_value(json!({
            "kind": "epic_update_activity",
            "guid": "99_1205",
            "message": "Ada edited this epic",
            "highlight": "edited",
            "occurred_at": "2021-03-04T10:00:00Z",
            "performed_by": {"id": 101, "name": "Ada", "initials": "AL"}
        }))
        .expect("Failed to deserialize activity");

        assert_eq!(activity.kind.as_deref(), Some("epic_update_activity"));
        assert_eq!(activity.message.as_deref(), Some("Ada edited this epic"));
        assert_eq!(activity.performed_by.id, Some(101));
        assert_eq!(activity.performed_by.name.as_deref(), Some("Ada"));
        assert!(activity.occurred_at.is_some());
        assert_eq!(activity.field("guid").unwrap(), &json!("99_1205"));
    }
}
