//! Policyholder handlers

use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    Json,
};

use core_kernel::{PolicyholderId, Record};
use domain_claims::{Policy, Policyholder};

use super::MessageResponse;
use crate::error::ApiError;
use crate::AppState;

/// Create a policyholder
pub async fn create_policyholder(
    State(state): State<AppState>,
    payload: Result<Json<Policyholder>, JsonRejection>,
) -> Result<Json<Policyholder>, ApiError> {
    let Json(holder) = payload?;
    let created = state.service.create_policyholder(holder).await?;
    Ok(Json(created))
}

/// List all policyholders
pub async fn list_policyholders(
    State(state): State<AppState>,
) -> Result<Json<Vec<Policyholder>>, ApiError> {
    Ok(Json(state.service.list_policyholders().await?))
}

/// Get a policyholder by ID
pub async fn get_policyholder(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Policyholder>, ApiError> {
    let Path(id) = path?;
    let holder = state.service.get_policyholder(PolicyholderId::new(id)).await?;
    Ok(Json(holder))
}

/// List the policies owned by a policyholder
pub async fn list_policyholder_policies(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<Policy>>, ApiError> {
    let Path(id) = path?;
    let policies = state
        .service
        .list_policies_for_policyholder(PolicyholderId::new(id))
        .await?;
    Ok(Json(policies))
}

/// Replace a policyholder
pub async fn update_policyholder(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Policyholder>, JsonRejection>,
) -> Result<Json<Policyholder>, ApiError> {
    let Path(id) = path?;
    let Json(holder) = payload?;
    let updated = state
        .service
        .update_policyholder(PolicyholderId::new(id), holder)
        .await?;
    Ok(Json(updated))
}

/// Delete a policyholder; its policies are left in place
pub async fn delete_policyholder(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = path?;
    state.service.delete_policyholder(PolicyholderId::new(id)).await?;
    Ok(Json(MessageResponse::deleted(Policyholder::ENTITY)))
}
