//! FetchAll trait for fetching resource collections.

use async_trait::async_trait;

use crate::client::TrackerClient;
use crate::error::Result;

/// Fetch the full collection of a resource within a scope.
///
/// Implement this trait for resource types that are listed by the API.
/// The scope identifies where the collection lives: nothing for projects,
/// a project id for epics, and so on. The service response is trusted to be
/// complete — there is no pagination.
///
/// # Example
///
/// ```ignore
/// use trackerapi::{TrackerClient, Project, Epic, FetchAll};
///
/// let client = TrackerClient::from_env()?;
/// let projects = Project::fetch_all(&client, &()).await?;
/// let epics = Epic::fetch_all(&client, &projects[0].id).await?;
/// ```
#[async_trait]
pub trait FetchAll: Sized {
    /// The scope the collection is fetched within.
    type Scope: Send + Sync;

    /// Fetch every resource in the scope, in service order.
    ///
    /// # Arguments
    ///
    /// * `client` - The Tracker API client
    /// * `scope` - The scope identifier
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decode fails.
    async fn fetch_all(client: &TrackerClient, scope: &Self::Scope) -> Result<Vec<Self>>;
}
