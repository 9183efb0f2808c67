use sqlx::SqlitePool;
use tracing::info;

const SQL_CREATE_ACTIVITIES: &str = r#"
CREATE TABLE IF NOT EXISTS activities (
  name TEXT PRIMARY KEY NOT NULL,
  description TEXT NOT NULL,
  schedule TEXT NOT NULL,
  max_participants INTEGER NOT NULL CHECK (max_participants > 0)
)
"#;

const SQL_CREATE_ACTIVITY_PARTICIPANTS: &str = r#"
CREATE TABLE IF NOT EXISTS activity_participants (
  activity_name TEXT NOT NULL REFERENCES activities(name),
  email TEXT NOT NULL,
  position INTEGER NOT NULL,
  PRIMARY KEY (activity_name, email)
)
"#;

const SQL_CREATE_PARTICIPANT_POSITION_INDEX: &str = r#"
CREATE INDEX IF NOT EXISTS idx_activity_participants_position
ON activity_participants (activity_name, position)
"#;

/// Creates the tables the store needs if they do not exist yet.
/// Does not load any activities.
pub async fn ensure_schema(pool: &SqlitePool) -> sqlx::Result<()> {
    for stmt in [
        SQL_CREATE_ACTIVITIES,
        SQL_CREATE_ACTIVITY_PARTICIPANTS,
        SQL_CREATE_PARTICIPANT_POSITION_INDEX,
    ] {
        sqlx::query(stmt).execute(pool).await?;
    }
    info!("activity schema ready");
    Ok(())
}
