//! Story model and trait implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::TrackerClient;
use crate::dates;
use crate::error::{Result, TrackerError};
use crate::traits::{FetchAll, Resource};

/// Story type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryType {
    /// Maintenance work carrying no points.
    Chore,
    /// A defect.
    Bug,
    /// Pointed, user-visible work.
    Feature,
}

/// Story lifecycle state.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum StoryState {
    /// In the icebox, committed to no timeline.
    Unscheduled,
    Unstarted,
    Started,
    Finished,
    Delivered,
    Rejected,
    Accepted,
}

impl StoryState {
    /// Every defined state, in lifecycle order.
    pub const ALL: [StoryState; 7] = [
        StoryState::Unscheduled,
        StoryState::Unstarted,
        StoryState::Started,
        StoryState::Finished,
        StoryState::Delivered,
        StoryState::Rejected,
        StoryState::Accepted,
    ];
}

/// A Tracker story.
///
/// A unit of work with a type, a lifecycle state, and an optional point
/// estimate. The estimate field is present on the payload only once the
/// story has been estimated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    /// Unique story ID.
    pub id: u64,

    /// The project the story belongs to.
    #[serde(default)]
    pub project_id: Option<u64>,

    /// Story title.
    #[serde(default)]
    pub name: Option<String>,

    /// chore, bug, or feature.
    pub story_type: StoryType,

    /// Where the story is in its lifecycle.
    pub current_state: StoryState,

    /// Point estimate, if the story has been estimated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate: Option<f64>,

    /// When the story was accepted.
    #[serde(default, deserialize_with = "dates::lenient")]
    pub accepted_at: Option<DateTime<Utc>>,

    /// Remaining response fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Story {
    /// Whether this is a chore.
    pub fn is_chore(&self) -> bool {
        self.story_type == StoryType::Chore
    }

    /// Whether this is a bug.
    pub fn is_bug(&self) -> bool {
        self.story_type == StoryType::Bug
    }

    /// Whether this is a feature.
    pub fn is_feature(&self) -> bool {
        self.story_type == StoryType::Feature
    }

    /// Whether the story carries a point estimate.
    pub fn has_estimate(&self) -> bool {
        self.estimate.is_some()
    }

    /// The story's points: the estimate when present, else zero.
    pub fn points(&self) -> f64 {
        self.estimate.unwrap_or(0.0)
    }
}

impl Resource for Story {
    const KIND: &'static str = "Story";

    fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

#[async_trait]
impl FetchAll for Story {
    /// Project id plus the label the stories are tagged with.
    type Scope = (u64, String);

    #[tracing::instrument(skip(client))]
    async fn fetch_all(client: &TrackerClient, scope: &Self::Scope) -> Result<Vec<Self>> {
        let (project_id, label) = scope;
        let path = format!(
            "projects/{project_id}/stories?with_label={}",
            urlencoding::encode(label)
        );

        let response = client.get(&path).await?;
        let stories: Vec<Story> = response.json().await.map_err(TrackerError::HttpError)?;
        Ok(stories)
    }
}
