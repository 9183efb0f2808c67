use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::database::{activities_repo, activity_participants_repo, ActivityStore};
use crate::error::StoreError;
use crate::models::{group_roster, Activity};

#[derive(Clone)]
pub struct SqliteActivityStore {
    pool: SqlitePool,
}

impl SqliteActivityStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ActivityStore for SqliteActivityStore {
    async fn find_all(&self) -> Result<Vec<Activity>, StoreError> {
        let rows = activities_repo::list_activity_rosters(&self.pool).await?;
        Ok(group_roster(rows))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Activity>, StoreError> {
        let rows = activities_repo::load_activity_roster(&self.pool, name).await?;
        Ok(group_roster(rows).into_iter().next())
    }

    async fn add_participant_if_absent(
        &self,
        name: &str,
        email: &str,
    ) -> Result<bool, StoreError> {
        let added =
            activity_participants_repo::insert_participant_if_absent(&self.pool, name, email)
                .await?;
        Ok(added == 1)
    }

    async fn remove_participant_if_present(
        &self,
        name: &str,
        email: &str,
    ) -> Result<bool, StoreError> {
        let removed =
            activity_participants_repo::delete_participant(&self.pool, name, email).await?;
        Ok(removed == 1)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
