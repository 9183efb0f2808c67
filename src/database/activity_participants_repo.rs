use sqlx::SqlitePool;

// Position is computed inside the insert so ordering and the duplicate
// check happen in a single statement. The WHERE clause is required for
// SQLite to parse the upsert after a SELECT.
const SQL_INSERT_PARTICIPANT_IF_ABSENT: &str = r#"
INSERT INTO activity_participants (
  activity_name,
  email,
  position
)
SELECT ?1, ?2, COALESCE(MAX(position), 0) + 1
FROM activity_participants
WHERE activity_name = ?1
ON CONFLICT (activity_name, email) DO NOTHING
"#;

pub async fn insert_participant_if_absent(
    pool: &SqlitePool,
    activity_name: &str,
    email: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_PARTICIPANT_IF_ABSENT)
        .bind(activity_name)
        .bind(email)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

const SQL_DELETE_PARTICIPANT: &str = r#"
DELETE FROM activity_participants
WHERE activity_name = ? AND email = ?
"#;

pub async fn delete_participant(
    pool: &SqlitePool,
    activity_name: &str,
    email: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_PARTICIPANT)
        .bind(activity_name)
        .bind(email)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}
