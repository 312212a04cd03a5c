//! Tests for lazy, memoized relation traversal.
//!
//! Each relation must hit the network exactly once per instance; the
//! `.expect(1)` mock call counts are verified when the mock server drops.

use serde_json::json;
use trackerapi::{Epic, FetchAll, Project, StoryState, TrackerClient};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> TrackerClient {
    TrackerClient::new("test-token", &server.uri()).unwrap()
}

async fn mount_projects(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 99, "name": "Payments"}
        ])))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_project_epics_fetched_once() {
    let mock_server = MockServer::start().await;
    mount_projects(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/projects/99/epics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1205, "project_id": 99, "label": {"name": "payments-rework"}}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let projects = Project::fetch_all(&client, &()).await.unwrap();
    let project = &projects[0];

    let first = project.epics(&client).await.unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].priority, 1);

    // Second access returns the cached snapshot; the mock allows one call.
    let second = project.epics(&client).await.unwrap();
    assert_eq!(second.len(), 1);
}

#[tokio::test]
async fn test_epic_reporting_shares_one_stories_fetch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/99/epics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1205, "project_id": 99, "label": {"name": "payments-rework"}}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/projects/99/stories"))
        .and(query_param("with_label", "payments-rework"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "story_type": "feature", "current_state": "started", "estimate": 3},
            {"id": 2, "story_type": "feature", "current_state": "accepted", "estimate": 5},
            {"id": 3, "story_type": "feature", "current_state": "unscheduled", "estimate": 1}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let epics = Epic::fetch_all(&client, &99).await.unwrap();
    let epic = &epics[0];

    // Every derived operation below shares the one cached stories fetch.
    let estimate = epic.estimate(&client).await.unwrap();
    assert_eq!(estimate.total, 8.0);
    assert_eq!(estimate.ongoing, 3.0);
    assert_eq!(estimate.accepted, 5.0);

    let distribution = epic.story_distribution(&client).await.unwrap();
    assert_eq!(distribution[&StoryState::Started], 1);
    assert_eq!(distribution[&StoryState::Accepted], 1);
    assert_eq!(distribution[&StoryState::Unscheduled], 1);
    assert_eq!(distribution.values().sum::<u32>(), 3);

    assert!(epic.has_outstanding_stories(&client).await.unwrap());

    let stories = epic.stories(&client).await.unwrap();
    assert_eq!(stories.len(), 3);
}

#[tokio::test]
async fn test_epic_activity_feed_cached() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/99/epics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1205, "project_id": 99, "label": {"name": "payments-rework"}}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/projects/99/epics/1205/activity"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "message": "Ada accepted a story",
                "performed_by": {"id": 101, "name": "Ada"}
            }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let epics = Epic::fetch_all(&client, &99).await.unwrap();
    let epic = &epics[0];

    let first = epic.activities(&client).await.unwrap();
    let second = epic.activities(&client).await.unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].performed_by.name.as_deref(), Some("Ada"));
}
