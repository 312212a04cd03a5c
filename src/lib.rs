//! Pivotal Tracker API client library.
//!
//! A Rust library for interacting with the Pivotal Tracker v5 REST API.
//! Resources (projects, epics, stories, activities) are typed wrappers over
//! the JSON responses, with the resource graph Project → Epic →
//! Story/Activity traversed on demand: each relation is fetched on first
//! access and cached for the instance's lifetime.
//!
//! # Quick Start
//!
//! ```no_run
//! use trackerapi::{FetchAll, Project, TrackerClient};
//!
//! #[tokio::main]
//! async fn main() -> trackerapi::Result<()> {
//!     // Create client from environment variables
//!     let client = TrackerClient::from_env()?;
//!
//!     // List all projects visible to the token
//!     for project in Project::fetch_all(&client, &()).await? {
//!         println!("{}: {}", project.id, project.name);
//!
//!         // Epics are fetched lazily and cached on the project
//!         for epic in project.epics(&client).await? {
//!             let estimate = epic.estimate(&client).await?;
//!             println!(
//!                 "  #{} {} — {} points accepted",
//!                 epic.priority, epic.label.name, estimate.accepted,
//!             );
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! The library is organized around two core traits:
//!
//! - [`FetchAll`] - Fetch the full collection of a resource within a scope
//! - [`Resource`] - Generic by-name access to pass-through response fields
//!
//! Each resource type keeps typed fields for the attributes it computes or
//! intercepts (dates, relations, the fetch-order epic priority) and passes
//! every other response field through untouched. Looking up a field the
//! response did not carry fails with [`TrackerError::UnknownField`] rather
//! than returning an absent value.
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `TRACKER_TOKEN` (required) - Your Tracker API token
//! - `TRACKER_API_URL` (optional) - Base URL (defaults to
//!   `https://www.pivotaltracker.com/services/v5`)
//!
//! # A note on staleness and threads
//!
//! Relation caches are populated at most once per instance and never
//! invalidated: a wrapper reflects the snapshot it was fetched from for its
//! whole lifetime. Concurrent first access to a relation is guarded, so the
//! underlying fetch still runs at most once.

mod client;
mod dates;
mod error;
mod models;
mod traits;

// Re-export core types
pub use client::TrackerClient;
pub use dates::parse_timestamp;
pub use error::{Result, TrackerError};

// Re-export traits
pub use traits::{FetchAll, Resource};

// Re-export models
pub use models::{
    Activity,
    Epic,
    EpicEstimate,
    Label,
    Person,
    Project,
    Story,
    StoryState,
    StoryType,
};
