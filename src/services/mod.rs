pub mod activities_service;

pub use activities_service::{ActivityService, MessageView};
