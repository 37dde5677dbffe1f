//! Maintenance mode tests
//!
//! Kept in their own test binary: the flag is global, so it must not be
//! flipped while other API tests run.
//!
//! Run with: cargo test -p integration-tests --test maintenance_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_maintenance_blocks_non_admins() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = login_admin(&server).await.unwrap();
    let seeker = register(&server, RegisterRequest::seeker()).await.unwrap();

    let response = server
        .post_auth(
            "/api/admin/maintenance",
            &admin.access_token,
            &json!({ "status": true }),
        )
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], true);

    let response = server.get_auth("/api/jobs", &seeker.access_token).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::SERVICE_UNAVAILABLE)
        .await
        .unwrap();
    assert!(error.maintenance);
    assert_eq!(error.code, "MAINTENANCE_MODE");

    let response = server.get("/api/stats").await.unwrap();
    assert_status(response, StatusCode::SERVICE_UNAVAILABLE)
        .await
        .unwrap();

    let response = server
        .get_auth("/api/admin/stats", &admin.access_token)
        .await
        .unwrap();
    let stats: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats["maintenance_mode"], "on");

    // Health probes stay outside the gate
    let response = server.get("/health").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_auth(
            "/api/admin/maintenance",
            &admin.access_token,
            &json!({ "status": false }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get_auth("/api/jobs", &seeker.access_token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}
