use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::ActivityError;
use crate::models::ActivityCatalog;
use crate::services::{ActivityService, MessageView};

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: String,
}

pub async fn list_activities_handler(
    State(service): State<ActivityService>,
) -> Result<Json<ActivityCatalog>, ActivityError> {
    service.list_activities().await.map(Json)
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
    State(service): State<ActivityService>,
) -> Result<Json<MessageView>, ActivityError> {
    service.signup(&activity_name, &query.email).await.map(Json)
}

pub async fn remove_participant_handler(
    Path((activity_name, email)): Path<(String, String)>,
    State(service): State<ActivityService>,
) -> Result<Json<MessageView>, ActivityError> {
    service
        .remove_participant(&activity_name, &email)
        .await
        .map(Json)
}
