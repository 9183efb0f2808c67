use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::database::ActivityStore;
use crate::error::{ActivityError, ActivityResult, StoreError};
use crate::models::ActivityCatalog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageView {
    pub message: String,
}

/// Enrollment rules over an injected activity store. Holds no state of its
/// own, so clones share the same store.
#[derive(Clone)]
pub struct ActivityService {
    store: Arc<dyn ActivityStore>,
}

impl ActivityService {
    pub fn new(store: Arc<dyn ActivityStore>) -> Self {
        Self { store }
    }

    pub async fn list_activities(&self) -> ActivityResult<ActivityCatalog> {
        let activities = self.store.find_all().await?;
        Ok(activities.into_iter().collect())
    }

    pub async fn signup(&self, activity_name: &str, email: &str) -> ActivityResult<MessageView> {
        if self.store.find_by_name(activity_name).await?.is_none() {
            warn!(activity = %activity_name, email = %email, "signup for unknown activity");
            return Err(ActivityError::ActivityNotFound);
        }

        if !self
            .store
            .add_participant_if_absent(activity_name, email)
            .await?
        {
            warn!(activity = %activity_name, email = %email, "duplicate signup rejected");
            return Err(ActivityError::AlreadySignedUp);
        }

        info!(activity = %activity_name, email = %email, "participant signed up");
        Ok(MessageView {
            message: format!("Signed up {} for {}", email, activity_name),
        })
    }

    pub async fn remove_participant(
        &self,
        activity_name: &str,
        email: &str,
    ) -> ActivityResult<MessageView> {
        if self.store.find_by_name(activity_name).await?.is_none() {
            warn!(activity = %activity_name, email = %email, "removal from unknown activity");
            return Err(ActivityError::ActivityNotFound);
        }

        if !self
            .store
            .remove_participant_if_present(activity_name, email)
            .await?
        {
            warn!(activity = %activity_name, email = %email, "removal of non-participant");
            return Err(ActivityError::ParticipantNotFound);
        }

        info!(activity = %activity_name, email = %email, "participant removed");
        Ok(MessageView {
            message: format!("Removed {} from {}", email, activity_name),
        })
    }

    pub async fn health(&self) -> Result<(), StoreError> {
        self.store.ping().await
    }
}
