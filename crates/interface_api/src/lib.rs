//! HTTP API Layer
//!
//! This crate exposes the claims integrity engine over REST using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: one module per record type, plus health probes
//! - **Error Handling**: `ApiError` maps engine failures to status codes
//! - **Config**: `ApiConfig` selects the storage backend and server address
//!
//! The router does not know which backend it runs on; it only holds a
//! `ClaimsService` built over whichever `Stores` the binary chose.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(ClaimsService::new(Stores::in_memory()), config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_claims::ClaimsService;

use crate::config::ApiConfig;
use crate::handlers::{claims, health, policy, policyholder};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: ClaimsService,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `service` - Integrity engine over the selected stores
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(service: ClaimsService, config: ApiConfig) -> Router {
    let state = AppState { service, config };

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let policyholder_routes = Router::new()
        .route("/policyholder/", post(policyholder::create_policyholder))
        .route("/policyholders/", get(policyholder::list_policyholders))
        .route(
            "/policyholder/:id",
            get(policyholder::get_policyholder)
                .put(policyholder::update_policyholder)
                .delete(policyholder::delete_policyholder),
        )
        .route(
            "/policyholder/:id/policies",
            get(policyholder::list_policyholder_policies),
        );

    let policy_routes = Router::new()
        .route("/policy/", post(policy::create_policy))
        .route("/policies/", get(policy::list_policies))
        .route(
            "/policy/:id",
            get(policy::get_policy)
                .put(policy::update_policy)
                .delete(policy::delete_policy),
        )
        .route("/policy/:id/claims", get(policy::list_policy_claims));

    let claim_routes = Router::new()
        .route("/claim/", post(claims::create_claim))
        .route("/claims/", get(claims::list_claims))
        .route(
            "/claim/:id",
            get(claims::get_claim)
                .put(claims::update_claim)
                .delete(claims::delete_claim),
        );

    Router::new()
        .merge(health_routes)
        .merge(policyholder_routes)
        .merge(policy_routes)
        .merge(claim_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
