use super::{ActivitiesRow, Activity};

// One row per (activity, participant) pair from a LEFT JOIN; `email` is NULL
// for activities without participants.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ActivityRosterRow {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    pub email: Option<String>,
}

/// Folds roster rows (ordered by activity, then position) into activities.
pub fn group_roster(rows: Vec<ActivityRosterRow>) -> Vec<Activity> {
    let mut out: Vec<Activity> = Vec::new();
    for row in rows {
        let same_activity = out.last().is_some_and(|a| a.name == row.name);
        if !same_activity {
            out.push(Activity::from_parts(
                ActivitiesRow {
                    name: row.name,
                    description: row.description,
                    schedule: row.schedule,
                    max_participants: row.max_participants,
                },
                Vec::new(),
            ));
        }
        if let (Some(email), Some(activity)) = (row.email, out.last_mut()) {
            activity.participants.push(email);
        }
    }
    out
}
