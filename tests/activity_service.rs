mod common;

use std::sync::Arc;

use mergington::database::ActivityStore;
use mergington::error::ActivityError;
use mergington::services::ActivityService;

async fn participants(store: &dyn ActivityStore, name: &str) -> Vec<String> {
    store
        .find_by_name(name)
        .await
        .unwrap()
        .map(|a| a.participants)
        .unwrap_or_default()
}

#[tokio::test]
async fn list_activities_returns_every_activity_with_participants() {
    let (service, _) = common::memory_service();

    let catalog = service.list_activities().await.unwrap();
    assert_eq!(catalog.len(), 3);
    assert_eq!(
        catalog.names().collect::<Vec<_>>(),
        vec!["Chess Club", "Gym Class", "Art Club"]
    );

    let chess = catalog.get("Chess Club").unwrap();
    assert_eq!(chess.max_participants, 12);
    assert_eq!(
        chess.participants,
        vec!["michael@mergington.edu", "daniel@mergington.edu"]
    );
    assert!(catalog.get("Art Club").unwrap().participants.is_empty());
}

#[tokio::test]
async fn chess_club_scenario() {
    let (service, store) = common::memory_service();

    let msg = service
        .signup("Chess Club", "new@mergington.edu")
        .await
        .unwrap();
    assert_eq!(msg.message, "Signed up new@mergington.edu for Chess Club");
    assert_eq!(
        participants(&*store, "Chess Club").await,
        vec![
            "michael@mergington.edu",
            "daniel@mergington.edu",
            "new@mergington.edu"
        ]
    );

    let err = service
        .signup("Chess Club", "michael@mergington.edu")
        .await
        .unwrap_err();
    assert!(matches!(err, ActivityError::AlreadySignedUp));

    let msg = service
        .remove_participant("Chess Club", "daniel@mergington.edu")
        .await
        .unwrap();
    assert_eq!(msg.message, "Removed daniel@mergington.edu from Chess Club");
    assert_eq!(
        participants(&*store, "Chess Club").await,
        vec!["michael@mergington.edu", "new@mergington.edu"]
    );

    let err = service
        .remove_participant("Chess Club", "absent@mergington.edu")
        .await
        .unwrap_err();
    assert!(matches!(err, ActivityError::ParticipantNotFound));
}

#[tokio::test]
async fn signup_to_unknown_activity_is_not_found_and_mutates_nothing() {
    let (service, store) = common::memory_service();
    let before = store.find_all().await.unwrap();

    let err = service
        .signup("Underwater Basket Weaving", "new@mergington.edu")
        .await
        .unwrap_err();
    assert!(matches!(err, ActivityError::ActivityNotFound));
    assert_eq!(store.find_all().await.unwrap(), before);
}

#[tokio::test]
async fn duplicate_signup_leaves_participants_unchanged() {
    let (service, store) = common::memory_service();
    let before = participants(&*store, "Gym Class").await;

    let err = service
        .signup("Gym Class", "john@mergington.edu")
        .await
        .unwrap_err();
    assert!(matches!(err, ActivityError::AlreadySignedUp));
    assert_eq!(participants(&*store, "Gym Class").await, before);
}

#[tokio::test]
async fn removal_from_unknown_activity_is_not_found() {
    let (service, store) = common::memory_service();
    let before = store.find_all().await.unwrap();

    let err = service
        .remove_participant("Robotics", "john@mergington.edu")
        .await
        .unwrap_err();
    assert!(matches!(err, ActivityError::ActivityNotFound));
    assert_eq!(store.find_all().await.unwrap(), before);
}

#[tokio::test]
async fn capacity_is_not_enforced() {
    let store = Arc::new(mergington::database::InMemoryActivityStore::new(vec![
        common::activity("Tiny Club", 1, &["first@mergington.edu"]),
    ]));
    let service = ActivityService::new(store.clone());

    service
        .signup("Tiny Club", "second@mergington.edu")
        .await
        .unwrap();
    assert_eq!(participants(&*store, "Tiny Club").await.len(), 2);
}

#[tokio::test]
async fn store_failures_surface_as_store_errors() {
    let (service, store) = common::memory_service();
    store.set_offline(true);

    assert!(matches!(
        service.list_activities().await.unwrap_err(),
        ActivityError::Store(_)
    ));
    assert!(matches!(
        service
            .signup("Chess Club", "new@mergington.edu")
            .await
            .unwrap_err(),
        ActivityError::Store(_)
    ));
    assert!(service.health().await.is_err());

    store.set_offline(false);
    assert!(service.health().await.is_ok());
    assert!(!participants(&*store, "Chess Club")
        .await
        .contains(&"new@mergington.edu".to_string()));
}

#[tokio::test]
async fn concurrent_duplicate_signups_admit_exactly_one() {
    let (service, store) = common::memory_service();

    let mut handles = Vec::new();
    for _ in 0..16 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            service.signup("Art Club", "race@mergington.edu").await
        }));
    }

    let mut ok = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => ok += 1,
            Err(ActivityError::AlreadySignedUp) => conflicts += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
    assert_eq!(ok, 1);
    assert_eq!(conflicts, 15);
    assert_eq!(
        participants(&*store, "Art Club").await,
        vec!["race@mergington.edu"]
    );
}
