use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::Activity;

/// Persistence for activities, keyed by activity name.
///
/// The conditional participant operations must check and mutate in one
/// atomic step: two concurrent calls with the same `(name, email)` never
/// both return `true`.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Activity>, StoreError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Activity>, StoreError>;

    /// Appends `email` to the end of the participant list unless present.
    /// Returns `true` if it was added.
    async fn add_participant_if_absent(&self, name: &str, email: &str)
        -> Result<bool, StoreError>;

    /// Returns `true` if `email` was present and has been removed.
    async fn remove_participant_if_present(
        &self,
        name: &str,
        email: &str,
    ) -> Result<bool, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}
