#![allow(dead_code)]

use std::sync::Arc;

use mergington::database::{
    activities_repo, activity_participants_repo, schema, InMemoryActivityStore,
    SqliteActivityStore,
};
use mergington::models::{ActivitiesRow, Activity};
use mergington::services::ActivityService;
use sqlx::sqlite::SqlitePoolOptions;

pub fn activity(name: &str, max_participants: i64, participants: &[&str]) -> Activity {
    Activity {
        name: name.to_string(),
        description: format!("{name} description"),
        schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

pub fn fixtures() -> Vec<Activity> {
    vec![
        activity(
            "Chess Club",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        activity(
            "Gym Class",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        activity("Art Club", 18, &[]),
    ]
}

pub fn memory_store() -> Arc<InMemoryActivityStore> {
    Arc::new(InMemoryActivityStore::new(fixtures()))
}

pub fn memory_service() -> (ActivityService, Arc<InMemoryActivityStore>) {
    let store = memory_store();
    (ActivityService::new(store.clone()), store)
}

pub async fn sqlite_store() -> SqliteActivityStore {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    schema::ensure_schema(&pool).await.unwrap();

    for a in fixtures() {
        activities_repo::insert_activity(
            &pool,
            &ActivitiesRow {
                name: a.name.clone(),
                description: a.description.clone(),
                schedule: a.schedule.clone(),
                max_participants: a.max_participants,
            },
        )
        .await
        .unwrap();
        for email in &a.participants {
            activity_participants_repo::insert_participant_if_absent(&pool, &a.name, email)
                .await
                .unwrap();
        }
    }

    SqliteActivityStore::new(pool)
}
