//! Policy handlers

use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    Json,
};

use core_kernel::{PolicyId, Record};
use domain_claims::{Claim, Policy};

use super::MessageResponse;
use crate::error::ApiError;
use crate::AppState;

/// Create a policy for an existing policyholder
pub async fn create_policy(
    State(state): State<AppState>,
    payload: Result<Json<Policy>, JsonRejection>,
) -> Result<Json<Policy>, ApiError> {
    let Json(policy) = payload?;
    let created = state.service.create_policy(policy).await?;
    Ok(Json(created))
}

/// List all policies
pub async fn list_policies(State(state): State<AppState>) -> Result<Json<Vec<Policy>>, ApiError> {
    Ok(Json(state.service.list_policies().await?))
}

/// Get a policy by ID
pub async fn get_policy(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Policy>, ApiError> {
    let Path(id) = path?;
    Ok(Json(state.service.get_policy(PolicyId::new(id)).await?))
}

/// List the claims filed against a policy
pub async fn list_policy_claims(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<Claim>>, ApiError> {
    let Path(id) = path?;
    let claims = state.service.list_claims_for_policy(PolicyId::new(id)).await?;
    Ok(Json(claims))
}

/// Replace a policy
pub async fn update_policy(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Policy>, JsonRejection>,
) -> Result<Json<Policy>, ApiError> {
    let Path(id) = path?;
    let Json(policy) = payload?;
    let updated = state.service.update_policy(PolicyId::new(id), policy).await?;
    Ok(Json(updated))
}

/// Delete a policy; its claims are left in place
pub async fn delete_policy(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = path?;
    state.service.delete_policy(PolicyId::new(id)).await?;
    Ok(Json(MessageResponse::deleted(Policy::ENTITY)))
}
