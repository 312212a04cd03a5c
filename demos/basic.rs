//! Basic example demonstrating the Tracker API client.
//!
//! Run with:
//! ```
//! TRACKER_TOKEN=your-token cargo run --example basic
//! ```

use trackerapi::{FetchAll, Project, TrackerClient};

#[tokio::main]
async fn main() -> trackerapi::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    println!("Creating Tracker client...");
    let client = TrackerClient::from_env()?;
    println!("Connected to: {}", client.base_url());

    // List projects visible to the token
    println!("\n--- Listing Projects ---");
    let projects = Project::fetch_all(&client, &()).await?;
    println!("Found {} projects", projects.len());

    for project in &projects {
        println!("  - {} ({})", project.name, project.id);
    }

    // Walk the first project's epics
    if let Some(project) = projects.first() {
        println!("\n--- Epics in {} ---", project.name);
        let epics = project.epics(&client).await?;

        for epic in epics.iter().take(5) {
            let estimate = epic.estimate(&client).await?;
            println!(
                "  #{} {} — total {}, ongoing {}, accepted {}",
                epic.priority,
                epic.label.name,
                estimate.total,
                estimate.ongoing,
                estimate.accepted,
            );

            if let Some(size) = epic.most_recent_estimate() {
                println!("      latest sizing: {size}");
            }
            if let Some(launch) = epic.launch() {
                println!("      launch: {}", launch.date_naive());
            }
            if let Some(links) = epic.links() {
                for link in links {
                    println!("      {link}");
                }
            }

            let distribution = epic.story_distribution(&client).await?;
            for (state, count) in &distribution {
                if *count > 0 {
                    println!("      {state:?}: {count}");
                }
            }
        }

        // Activity feed for the top-priority epic
        if let Some(epic) = epics.first() {
            println!("\n--- Recent activity on {} ---", epic.label.name);
            for activity in epic.activities(&client).await?.iter().take(5) {
                println!(
                    "  {} by {}",
                    activity.message.as_deref().unwrap_or("(no message)"),
                    activity.performed_by.name.as_deref().unwrap_or("unknown"),
                );
            }
        }
    }

    Ok(())
}
