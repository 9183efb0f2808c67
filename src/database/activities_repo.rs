use sqlx::SqlitePool;

use crate::models::{ActivitiesRow, ActivityRosterRow};

const SQL_LIST_ACTIVITY_ROSTERS: &str = r#"
SELECT
  a.name,
  a.description,
  a.schedule,
  a.max_participants,
  p.email
FROM activities a
LEFT JOIN activity_participants p ON p.activity_name = a.name
ORDER BY a.rowid ASC, p.position ASC
"#;

pub async fn list_activity_rosters(pool: &SqlitePool) -> sqlx::Result<Vec<ActivityRosterRow>> {
    sqlx::query_as::<_, ActivityRosterRow>(SQL_LIST_ACTIVITY_ROSTERS)
        .fetch_all(pool)
        .await
}

const SQL_LOAD_ACTIVITY_ROSTER: &str = r#"
SELECT
  a.name,
  a.description,
  a.schedule,
  a.max_participants,
  p.email
FROM activities a
LEFT JOIN activity_participants p ON p.activity_name = a.name
WHERE a.name = ?
ORDER BY p.position ASC
"#;

pub async fn load_activity_roster(
    pool: &SqlitePool,
    name: &str,
) -> sqlx::Result<Vec<ActivityRosterRow>> {
    sqlx::query_as::<_, ActivityRosterRow>(SQL_LOAD_ACTIVITY_ROSTER)
        .bind(name)
        .fetch_all(pool)
        .await
}

const SQL_INSERT_ACTIVITY: &str = r#"
INSERT INTO activities (
  name,
  description,
  schedule,
  max_participants
) VALUES (?, ?, ?, ?)
"#;

pub async fn insert_activity(pool: &SqlitePool, row: &ActivitiesRow) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_ACTIVITY)
        .bind(&row.name)
        .bind(&row.description)
        .bind(&row.schedule)
        .bind(row.max_participants)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}
