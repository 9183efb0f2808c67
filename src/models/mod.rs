pub mod activities;
pub mod activity_participants;

pub use activities::{ActivitiesRow, Activity, ActivityCatalog, ActivityDetails};
pub use activity_participants::{group_roster, ActivityRosterRow};
