//! Project model and trait implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::sync::OnceCell;

use crate::client::TrackerClient;
use crate::error::{Result, TrackerError};
use crate::models::Epic;
use crate::traits::{FetchAll, Resource};

/// A Tracker project.
///
/// Projects are the top-level containers; every other resource is reached
/// through one. An instance reflects exactly one fetch snapshot: its epics
/// are fetched on first access and cached for the instance's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique project ID.
    pub id: u64,

    /// Project name.
    pub name: String,

    /// Remaining response fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,

    #[serde(skip)]
    epics: OnceCell<Vec<Epic>>,
}

impl Project {
    /// The project's epics, in service order.
    ///
    /// Fetched on the first call and cached; later calls return the cached
    /// sequence without touching the network. The cache is never
    /// invalidated — concurrent first access is guarded by the cell, so the
    /// fetch runs at most once per instance.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let projects = Project::fetch_all(&client, &()).await?;
    /// for epic in projects[0].epics(&client).await? {
    ///     println!("#{} {}", epic.priority, epic.label.name);
    /// }
    /// ```
    pub async fn epics(&self, client: &TrackerClient) -> Result<&[Epic]> {
        let epics = self
            .epics
            .get_or_try_init(|| Epic::fetch_all(client, &self.id))
            .await?;
        Ok(epics.as_slice())
    }
}

impl Resource for Project {
    const KIND: &'static str = "Project";

    fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

#[async_trait]
impl FetchAll for Project {
    type Scope = ();

    #[tracing::instrument(skip(client))]
    async fn fetch_all(client: &TrackerClient, _scope: &()) -> Result<Vec<Self>> {
        let response = client.get("projects").await?;
        let projects: Vec<Project> = response.json().await.map_err(TrackerError::HttpError)?;
        Ok(projects)
    }
}
