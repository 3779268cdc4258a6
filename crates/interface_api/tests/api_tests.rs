//! HTTP API tests
//!
//! These tests drive the router through `axum_test::TestServer` over the
//! in-memory backend and cover:
//! - Success bodies echo the stored record
//! - Rule violations map to 400 with the engine's message
//! - Missing targets map to 404
//! - Malformed bodies are rejected before reaching the engine

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use domain_claims::{ClaimsService, Stores};
use interface_api::config::ApiConfig;
use interface_api::create_router;
use interface_api::error::ErrorResponse;
use interface_api::handlers::MessageResponse;

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn server() -> TestServer {
    let app = create_router(ClaimsService::new(Stores::in_memory()), ApiConfig::default());
    TestServer::new(app).unwrap()
}

/// Server with policyholder 1 and policy 1 (coverage 1000) in place
async fn seeded_server() -> TestServer {
    let server = server();
    server
        .post("/policyholder/")
        .json(&json!({"id": 1, "name": "Ana", "age": 30}))
        .await
        .assert_status_ok();
    server
        .post("/policy/")
        .json(&json!({"id": 1, "policyholder_id": 1, "type": "Health", "coverage_amount": 1000.0}))
        .await
        .assert_status_ok();
    server
}

// ============================================================================
// HEALTH
// ============================================================================

mod health {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let response = server().get("/health").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["status"], "healthy");
    }

    #[tokio::test]
    async fn test_readiness_reports_every_store() {
        let response = server().get("/health/ready").await;
        response.assert_status_ok();

        let body = response.json::<Value>();
        assert_eq!(body["status"], "ready");
        assert_eq!(body["backend"], "memory");
        assert_eq!(body["stores"].as_array().map(Vec::len), Some(3));
    }
}

// ============================================================================
// POLICYHOLDERS
// ============================================================================

mod policyholders {
    use super::*;

    #[tokio::test]
    async fn test_create_echoes_record() {
        let server = server();
        let payload = json!({"id": 7, "name": "Bea", "age": 41});

        let response = server.post("/policyholder/").json(&payload).await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), payload);
    }

    #[tokio::test]
    async fn test_duplicate_is_bad_request() {
        let server = seeded_server().await;

        let response = server
            .post("/policyholder/")
            .json(&json!({"id": 1, "name": "Other", "age": 50}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body = response.json::<ErrorResponse>();
        assert_eq!(body.error, "bad_request");
        assert_eq!(body.message, "Policyholder already exists");
    }

    #[tokio::test]
    async fn test_negative_age_is_bad_request() {
        let response = server()
            .post("/policyholder/")
            .json(&json!({"id": 1, "name": "Ana", "age": -1}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_field_is_bad_request() {
        let response = server()
            .post("/policyholder/")
            .json(&json!({"id": 1, "name": "Ana"}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<ErrorResponse>().error, "bad_request");
    }

    #[tokio::test]
    async fn test_list_returns_created_records() {
        let server = seeded_server().await;
        server
            .post("/policyholder/")
            .json(&json!({"id": 2, "name": "Bo", "age": 22}))
            .await
            .assert_status_ok();

        let list = server.get("/policyholders/").await.json::<Vec<Value>>();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0]["id"], 1);
        assert_eq!(list[1]["id"], 2);
    }

    #[tokio::test]
    async fn test_update_and_get() {
        let server = seeded_server().await;

        server
            .put("/policyholder/1")
            .json(&json!({"id": 1, "name": "Ana Maria", "age": 31}))
            .await
            .assert_status_ok();

        let holder = server.get("/policyholder/1").await.json::<Value>();
        assert_eq!(holder["name"], "Ana Maria");
        assert_eq!(holder["age"], 31);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let response = server()
            .put("/policyholder/9")
            .json(&json!({"id": 9, "name": "Nobody", "age": 1}))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<ErrorResponse>().error, "not_found");
    }

    #[tokio::test]
    async fn test_delete_confirms_and_leaves_policies() {
        let server = seeded_server().await;

        let response = server.delete("/policyholder/1").await;
        response.assert_status_ok();
        assert_eq!(
            response.json::<MessageResponse>().message,
            "Policyholder deleted successfully"
        );

        server.get("/policyholder/1").await.assert_status(StatusCode::NOT_FOUND);
        server.get("/policy/1").await.assert_status_ok();
    }

    #[tokio::test]
    async fn test_policies_of_policyholder() {
        let server = seeded_server().await;

        let policies = server.get("/policyholder/1/policies").await.json::<Vec<Value>>();
        assert_eq!(policies.len(), 1);
        assert_eq!(policies[0]["type"], "Health");
    }
}

// ============================================================================
// POLICIES
// ============================================================================

mod policies {
    use super::*;

    #[tokio::test]
    async fn test_unknown_policyholder_is_bad_request() {
        let response = server()
            .post("/policy/")
            .json(&json!({"id": 1, "policyholder_id": 42, "type": "Auto", "coverage_amount": 500.0}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<ErrorResponse>().message,
            "Policyholder does not exist"
        );
    }

    #[tokio::test]
    async fn test_update_to_unknown_policyholder_is_rejected() {
        let server = seeded_server().await;

        let response = server
            .put("/policy/1")
            .json(&json!({"id": 1, "policyholder_id": 42, "type": "Health", "coverage_amount": 1000.0}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let policy = server.get("/policy/1").await.json::<Value>();
        assert_eq!(policy["policyholder_id"], 1);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        server().delete("/policy/5").await.assert_status(StatusCode::NOT_FOUND);
    }
}

// ============================================================================
// CLAIMS
// ============================================================================

mod claims {
    use super::*;

    #[tokio::test]
    async fn test_claim_over_coverage_is_rejected() {
        let server = seeded_server().await;

        let response = server
            .post("/claim/")
            .json(&json!({"id": 1, "policy_id": 1, "amount_claimed": 1500.0, "status": "Pending"}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<ErrorResponse>().message,
            "Claim amount exceeds policy coverage"
        );
    }

    #[tokio::test]
    async fn test_claim_at_coverage_is_accepted() {
        let server = seeded_server().await;

        let response = server
            .post("/claim/")
            .json(&json!({"id": 1, "policy_id": 1, "amount_claimed": 1000.0, "status": "Approved"}))
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["amount_claimed"], 1000.0);
    }

    #[tokio::test]
    async fn test_unknown_policy_is_bad_request() {
        let server = seeded_server().await;

        let response = server
            .post("/claim/")
            .json(&json!({"id": 2, "policy_id": 99, "amount_claimed": 10.0, "status": "Pending"}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<ErrorResponse>().message, "Policy does not exist");
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_bad_request() {
        let server = seeded_server().await;

        for path in ["/claim/abc", "/policy/1.5", "/policyholder/one/policies"] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::BAD_REQUEST);
            assert_eq!(response.json::<ErrorResponse>().error, "bad_request");
        }

        let response = server
            .put("/claim/abc")
            .json(&json!({"id": 1, "policy_id": 1, "amount_claimed": 1.0, "status": "Pending"}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<ErrorResponse>().error, "bad_request");
    }

    #[tokio::test]
    async fn test_get_missing_claim() {
        let response = server().get("/claim/3").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<ErrorResponse>().message, "Claim not found");
    }

    #[tokio::test]
    async fn test_claim_lifecycle() {
        let server = seeded_server().await;
        let claim = json!({"id": 1, "policy_id": 1, "amount_claimed": 900.0, "status": "Pending"});

        server.post("/claim/").json(&claim).await.assert_status_ok();
        server
            .post("/claim/")
            .json(&claim)
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        server
            .put("/claim/1")
            .json(&json!({"id": 1, "policy_id": 1, "amount_claimed": 950.0, "status": "Approved"}))
            .await
            .assert_status_ok();

        let claims = server.get("/policy/1/claims").await.json::<Vec<Value>>();
        assert_eq!(claims.len(), 1);
        assert_eq!(claims[0]["status"], "Approved");

        let response = server.delete("/claim/1").await;
        response.assert_status_ok();
        assert_eq!(
            response.json::<MessageResponse>().message,
            "Claim deleted successfully"
        );

        server.delete("/claim/1").await.assert_status(StatusCode::NOT_FOUND);
        assert!(server.get("/claims/").await.json::<Vec<Value>>().is_empty());
    }
}
