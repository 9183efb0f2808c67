use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::database::ActivityStore;
use crate::error::StoreError;
use crate::models::Activity;

/// Activity store held in process memory. Each conditional update runs
/// under a single write lock.
#[derive(Debug, Default)]
pub struct InMemoryActivityStore {
    activities: RwLock<Vec<Activity>>,
    offline: AtomicBool,
}

impl InMemoryActivityStore {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self {
            activities: RwLock::new(activities),
            offline: AtomicBool::new(false),
        }
    }

    /// While offline every call fails with `StoreError::Unavailable`.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("in-memory store is offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ActivityStore for InMemoryActivityStore {
    async fn find_all(&self) -> Result<Vec<Activity>, StoreError> {
        self.check_online()?;
        Ok(self.activities.read().await.clone())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Activity>, StoreError> {
        self.check_online()?;
        let activities = self.activities.read().await;
        Ok(activities.iter().find(|a| a.name == name).cloned())
    }

    async fn add_participant_if_absent(
        &self,
        name: &str,
        email: &str,
    ) -> Result<bool, StoreError> {
        self.check_online()?;
        let mut activities = self.activities.write().await;
        let Some(activity) = activities.iter_mut().find(|a| a.name == name) else {
            return Ok(false);
        };
        if activity.has_participant(email) {
            return Ok(false);
        }
        activity.participants.push(email.to_string());
        Ok(true)
    }

    async fn remove_participant_if_present(
        &self,
        name: &str,
        email: &str,
    ) -> Result<bool, StoreError> {
        self.check_online()?;
        let mut activities = self.activities.write().await;
        let Some(activity) = activities.iter_mut().find(|a| a.name == name) else {
            return Ok(false);
        };
        let before = activity.participants.len();
        activity.participants.retain(|p| p != email);
        Ok(activity.participants.len() < before)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check_online()
    }
}
