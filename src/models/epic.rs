//! Epic model and trait implementations.
//!
//! Epics group the stories carrying their label. Most of the derived
//! reporting in this crate (point totals, state distributions, launch
//! metadata) hangs off this type.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::sync::OnceCell;

use crate::client::TrackerClient;
use crate::dates;
use crate::error::{Result, TrackerError};
use crate::models::{Activity, Label, Story, StoryState};
use crate::traits::{FetchAll, Resource};

/// A Tracker epic.
///
/// An instance reflects exactly one fetch snapshot: its stories and
/// activity feed are fetched on first access and cached for the instance's
/// lifetime, never invalidated.
///
/// # Example
///
/// ```ignore
/// use trackerapi::{TrackerClient, Epic, FetchAll};
///
/// let client = TrackerClient::from_env()?;
/// for epic in Epic::fetch_all(&client, &project_id).await? {
///     let estimate = epic.estimate(&client).await?;
///     println!(
///         "#{} {}: {} planned, {} ongoing, {} accepted",
///         epic.priority, epic.label.name,
///         estimate.total, estimate.ongoing, estimate.accepted,
///     );
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Epic {
    /// Unique epic ID.
    pub id: u64,

    /// The project the epic belongs to.
    pub project_id: u64,

    /// Epic title.
    #[serde(default)]
    pub name: Option<String>,

    /// The label tying stories to this epic.
    pub label: Label,

    /// Externally attached metadata riding along on the payload
    /// (`estimates`, `launch`, `links`). Opaque pass-through; read by the
    /// accessors below but never validated.
    #[serde(default)]
    pub engman_data: Option<Value>,

    /// When the epic was created.
    #[serde(default, deserialize_with = "dates::lenient")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the epic was last updated.
    #[serde(default, deserialize_with = "dates::lenient")]
    pub updated_at: Option<DateTime<Utc>>,

    /// 1-based position in the fetch-all ordering. Assigned while fetching,
    /// not a service field; zero on an epic built any other way, and
    /// meaningless outside the fetch that assigned it.
    #[serde(skip)]
    pub priority: u32,

    /// Remaining response fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,

    #[serde(skip)]
    stories: OnceCell<Vec<Story>>,

    #[serde(skip)]
    activities: OnceCell<Vec<Activity>>,
}

/// Point totals for an epic's feature stories.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct EpicEstimate {
    /// Points across every planned feature. Unscheduled stories are
    /// unplanned scope and do not count here.
    pub total: f64,

    /// Points in flight: started, finished, or delivered.
    pub ongoing: f64,

    /// Points already accepted.
    pub accepted: f64,
}

impl EpicEstimate {
    fn tally(stories: &[Story]) -> Self {
        let mut estimate = EpicEstimate::default();

        for story in stories {
            if !story.is_feature() {
                continue;
            }
            let points = story.points();
            if story.current_state != StoryState::Unscheduled {
                estimate.total += points;
            }
            if matches!(
                story.current_state,
                StoryState::Started | StoryState::Finished | StoryState::Delivered
            ) {
                estimate.ongoing += points;
            }
            if story.current_state == StoryState::Accepted {
                estimate.accepted += points;
            }
        }

        estimate
    }
}

impl Epic {
    /// The epic's stories: every story in the project carrying this epic's
    /// label.
    ///
    /// Fetched on the first call and cached for the instance's lifetime;
    /// concurrent first access is guarded by the cell, so the fetch runs at
    /// most once.
    pub async fn stories(&self, client: &TrackerClient) -> Result<&[Story]> {
        let stories = self
            .stories
            .get_or_try_init(|| async {
                let scope = (self.project_id, self.label.name.clone());
                Story::fetch_all(client, &scope).await
            })
            .await?;
        Ok(stories.as_slice())
    }

    /// The epic's activity feed, fetched on first call and cached.
    pub async fn activities(&self, client: &TrackerClient) -> Result<&[Activity]> {
        let activities = self
            .activities
            .get_or_try_init(|| async {
                let scope = (self.project_id, self.id);
                Activity::fetch_all(client, &scope).await
            })
            .await?;
        Ok(activities.as_slice())
    }

    /// Point totals across the epic's feature stories.
    pub async fn estimate(&self, client: &TrackerClient) -> Result<EpicEstimate> {
        Ok(EpicEstimate::tally(self.stories(client).await?))
    }

    /// How the epic's stories are spread across the lifecycle.
    ///
    /// Every state is always present as a key, zero-defaulted; the counts
    /// sum to the number of stories.
    pub async fn story_distribution(
        &self,
        client: &TrackerClient,
    ) -> Result<BTreeMap<StoryState, u32>> {
        let mut counts: BTreeMap<StoryState, u32> =
            StoryState::ALL.iter().map(|state| (*state, 0)).collect();

        for story in self.stories(client).await? {
            *counts.entry(story.current_state).or_insert(0) += 1;
        }

        Ok(counts)
    }

    /// Whether any story is neither iceboxed nor fully done.
    pub async fn has_outstanding_stories(&self, client: &TrackerClient) -> Result<bool> {
        let outstanding = self.stories(client).await?.iter().any(|story| {
            !matches!(
                story.current_state,
                StoryState::Unscheduled | StoryState::Accepted
            )
        });
        Ok(outstanding)
    }

    /// The `size` of the most recently dated entry in the external
    /// `estimates` metadata, or `None` when no such metadata is attached.
    ///
    /// Entries whose `datetime` does not parse are skipped. The comparison
    /// is strict, so a later entry with an equal timestamp does not replace
    /// the running choice.
    pub fn most_recent_estimate(&self) -> Option<Value> {
        let estimates = self.engman_data.as_ref()?.get("estimates")?.as_array()?;

        // Arbitrarily old sentinel; anything dated earlier never wins.
        let mut latest = Utc.with_ymd_and_hms(1982, 5, 3, 23, 0, 0).single()?;
        let mut size = Value::from(0);

        for entry in estimates {
            let Some(stamp) = entry
                .get("datetime")
                .and_then(Value::as_str)
                .and_then(dates::parse_timestamp)
            else {
                continue;
            };
            if latest < stamp {
                size = entry.get("size").cloned().unwrap_or(Value::Null);
                latest = stamp;
            }
        }

        Some(size)
    }

    /// The launch date from the external metadata, or `None` when absent
    /// or unparseable.
    pub fn launch(&self) -> Option<DateTime<Utc>> {
        self.engman_data
            .as_ref()?
            .get("launch")?
            .as_str()
            .and_then(dates::parse_timestamp)
    }

    /// The external `links` mapping rendered as `"name: url"` strings, in
    /// the mapping's iteration order, or `None` when absent.
    pub fn links(&self) -> Option<Vec<String>> {
        let links = self.engman_data.as_ref()?.get("links")?.as_object()?;

        Some(
            links
                .iter()
                .map(|(name, url)| {
                    let url = url
                        .as_str()
                        .map(str::to_owned)
                        .unwrap_or_else(|| url.to_string());
                    format!("{name}: {url}")
                })
                .collect(),
        )
    }
}

impl Resource for Epic {
    const KIND: &'static str = "Epic";

    fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

#[async_trait]
impl FetchAll for Epic {
    /// The project the epics belong to.
    type Scope = u64;

    #[tracing::instrument(skip(client))]
    async fn fetch_all(client: &TrackerClient, project_id: &u64) -> Result<Vec<Self>> {
        let path = format!("projects/{project_id}/epics");

        let response = client.get(&path).await?;
        let mut epics: Vec<Epic> = response.json().await.map_err(TrackerError::HttpError)?;

        // Priority is fetch-order, 1-based; the service stores no such field.
        for (index, epic) in epics.iter_mut().enumerate() {
            epic.priority = index as u32 + 1;
        }

        Ok(epics)
    }
}
