//! Claims handlers

use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    Json,
};

use core_kernel::{ClaimId, Record};
use domain_claims::Claim;

use super::MessageResponse;
use crate::error::ApiError;
use crate::AppState;

/// File a claim against an existing policy
pub async fn create_claim(
    State(state): State<AppState>,
    payload: Result<Json<Claim>, JsonRejection>,
) -> Result<Json<Claim>, ApiError> {
    let Json(claim) = payload?;
    let created = state.service.create_claim(claim).await?;
    Ok(Json(created))
}

/// List all claims
pub async fn list_claims(State(state): State<AppState>) -> Result<Json<Vec<Claim>>, ApiError> {
    Ok(Json(state.service.list_claims().await?))
}

/// Get a claim by ID
pub async fn get_claim(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Claim>, ApiError> {
    let Path(id) = path?;
    Ok(Json(state.service.get_claim(ClaimId::new(id)).await?))
}

/// Replace a claim
pub async fn update_claim(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Claim>, JsonRejection>,
) -> Result<Json<Claim>, ApiError> {
    let Path(id) = path?;
    let Json(claim) = payload?;
    let updated = state.service.update_claim(ClaimId::new(id), claim).await?;
    Ok(Json(updated))
}

/// Delete a claim
pub async fn delete_claim(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = path?;
    state.service.delete_claim(ClaimId::new(id)).await?;
    Ok(Json(MessageResponse::deleted(Claim::ENTITY)))
}
