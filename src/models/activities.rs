use serde::Serialize;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ActivitiesRow {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
}

/// An activity together with its participants in signup order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn from_parts(row: ActivitiesRow, participants: Vec<String>) -> Self {
        Self {
            name: row.name,
            description: row.description,
            schedule: row.schedule,
            max_participants: row.max_participants,
            participants,
        }
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Splits off the key; the remaining attributes are what the API returns.
    pub fn into_entry(self) -> (String, ActivityDetails) {
        (
            self.name,
            ActivityDetails {
                description: self.description,
                schedule: self.schedule,
                max_participants: self.max_participants,
                participants: self.participants,
            },
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    pub participants: Vec<String>,
}

/// Activities keyed by name, serialized as a JSON object in store order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityCatalog {
    entries: Vec<(String, ActivityDetails)>,
}

impl ActivityCatalog {
    pub fn get(&self, name: &str) -> Option<&ActivityDetails> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, details)| details)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Activity> for ActivityCatalog {
    fn from_iter<I: IntoIterator<Item = Activity>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Activity::into_entry).collect(),
        }
    }
}

impl Serialize for ActivityCatalog {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, details) in &self.entries {
            map.serialize_entry(name, details)?;
        }
        map.end()
    }
}
