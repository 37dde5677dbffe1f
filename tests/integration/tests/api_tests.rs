//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_and_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::seeker();

    let auth = register(&server, request.clone()).await.unwrap();
    assert_eq!(auth.user.email, request.email);
    assert_eq!(auth.user.role, "seeker");
    assert_eq!(auth.token_type, "Bearer");

    let response = server
        .post("/api/login", &LoginRequest::from_register(&request))
        .await
        .unwrap();
    let login: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(login.user.id, auth.user.id);
    assert_ne!(login.access_token, auth.access_token);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::seeker();
    register(&server, request.clone()).await.unwrap();

    let response = server.post("/api/register", &request).await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    assert_eq!(body["errors"]["email"][0], "The email has already been taken.");
}

#[tokio::test]
async fn test_register_as_admin_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/register", &RegisterRequest::unique("admin"))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_register_password_confirmation_mismatch() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::seeker();
    request.password_confirmation = "SomethingElse123!".to_string();

    let response = server.post("/api/register", &request).await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    assert_eq!(
        body["errors"]["password"][0],
        "The password confirmation does not match."
    );

    // Nothing was created, so the matching request still succeeds
    request.password_confirmation = request.password.clone();
    register(&server, request).await.unwrap();
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        email: "nonexistent@example.com".to_string(),
        password: "wrongpass".to_string(),
    };

    let response = server.post("/api/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_logout_revokes_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server, RegisterRequest::seeker()).await.unwrap();

    let response = server
        .post_auth("/api/logout", &auth.access_token, &json!({}))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get_auth("/api/user", &auth.access_token).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_unauthenticated_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/user").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Application Workflow Tests
// ============================================================================

#[tokio::test]
async fn test_apply_requires_resume() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, _, job) = employer_with_job(&server).await.unwrap();

    let request = RegisterRequest::seeker();
    let seeker = register(&server, request.clone()).await.unwrap();
    let apply = json!({ "job_id": job.id });

    // No resume on file yet
    let response = server
        .post_auth("/api/applications", &seeker.access_token, &apply)
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    assert!(error.message.starts_with("Please upload a resume"));

    // Upload one through the profile form
    let form = profile_form_with_resume(&request.name, &request.email).unwrap();
    let response = server
        .post_multipart("/api/user", &seeker.access_token, form)
        .await
        .unwrap();
    let profile: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    let resume_path = profile["user"]["resume_path"].as_str().unwrap().to_string();
    assert!(resume_path.starts_with("resumes/"));
    assert!(resume_path.ends_with(".pdf"));

    let response = server
        .post_auth("/api/applications", &seeker.access_token, &apply)
        .await
        .unwrap();
    let application: ApplicationResponse = assert_json(response, StatusCode::CREATED)
        .await
        .unwrap();
    assert_eq!(application.status, "applied");
    assert_eq!(application.job_id, job.id);
    assert_eq!(application.user_id, seeker.user.id);
    assert_eq!(application.resume_path, resume_path);
}

#[tokio::test]
async fn test_duplicate_application_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, _, job) = employer_with_job(&server).await.unwrap();
    let seeker = seeker_with_resume(&server).await.unwrap();
    let apply = json!({ "job_id": job.id });

    let response = server
        .post_auth("/api/applications", &seeker.access_token, &apply)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/api/applications", &seeker.access_token, &apply)
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    assert_eq!(error.message, "You have already applied for this job.");
}

#[tokio::test]
async fn test_employer_reviews_application() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (employer, _, job) = employer_with_job(&server).await.unwrap();
    let seeker = seeker_with_resume(&server).await.unwrap();

    let response = server
        .post_auth(
            "/api/applications",
            &seeker.access_token,
            &json!({ "job_id": job.id }),
        )
        .await
        .unwrap();
    let application: ApplicationResponse = assert_json(response, StatusCode::CREATED)
        .await
        .unwrap();
    let path = format!("/api/applications/{}", application.id);

    // The applicant cannot move their own application
    let response = server
        .put_auth(&path, &seeker.access_token, &json!({ "status": "shortlisted" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .put_auth(&path, &employer.access_token, &json!({ "status": "shortlisted" }))
        .await
        .unwrap();
    let shortlisted: ApplicationResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(shortlisted.status, "shortlisted");

    // Another employer does not own the hosting company
    let rival = register(&server, RegisterRequest::employer()).await.unwrap();
    let response = server
        .put_auth(&path, &rival.access_token, &json!({ "status": "interview_scheduled" }))
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(
        error.message,
        "Unauthorized. You do not own the company hosting this job."
    );

    // Skipping the interview stages is refused
    let response = server
        .put_auth(&path, &employer.access_token, &json!({ "status": "hired" }))
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    assert_eq!(
        error.message,
        "Cannot change application status from shortlisted to hired."
    );

    let response = server
        .get_auth("/api/employer/applications", &employer.access_token)
        .await
        .unwrap();
    let received: PageResponse<ApplicationResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(received.data.iter().any(|a| a.id == application.id));

    // The applicant withdraws
    let response = server.delete_auth(&path, &seeker.access_token).await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["message"], "Application deleted/withdrawn");

    let response = server.get_auth(&path, &employer.access_token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Ownership Tests
// ============================================================================

#[tokio::test]
async fn test_other_employer_cannot_edit_job() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, company, job) = employer_with_job(&server).await.unwrap();
    let intruder = register(&server, RegisterRequest::employer()).await.unwrap();

    let response = server
        .put_auth(
            &format!("/api/jobs/{}", job.id),
            &intruder.access_token,
            &JobRequest::for_company(company.id),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/companies/{}", company.id), &intruder.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_partial_job_update_keeps_other_fields() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (employer, company, job) = employer_with_job(&server).await.unwrap();
    let path = format!("/api/jobs/{}", job.id);

    let response = server
        .put_auth(&path, &employer.access_token, &json!({ "title": "Renamed role" }))
        .await
        .unwrap();
    let updated: JobResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.title, "Renamed role");
    assert_eq!(updated.company_id, company.id);

    let response = server.get(&path).await.unwrap();
    let stored: JobResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stored.title, "Renamed role");
    assert_eq!(stored.description, "Build and run services");
    assert_eq!(stored.location, "Remote");
    assert_eq!(stored.category.as_deref(), Some("Engineering"));
    assert_eq!(stored.status, "pending");
}

#[tokio::test]
async fn test_partial_company_update_keeps_other_fields() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (employer, company, _) = employer_with_job(&server).await.unwrap();
    let path = format!("/api/companies/{}", company.id);

    let response = server
        .put_auth(&path, &employer.access_token, &json!({ "name": "Renamed Co" }))
        .await
        .unwrap();
    let updated: CompanyResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.name, "Renamed Co");
    assert_eq!(updated.description, company.description);
    assert_eq!(updated.website, company.website);

    let response = server
        .put_auth(&path, &employer.access_token, &json!({ "website": null }))
        .await
        .unwrap();
    let cleared: CompanyResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(cleared.name, "Renamed Co");
    assert!(cleared.website.is_none());
}

#[tokio::test]
async fn test_profile_update_keeps_unsubmitted_fields() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let seeker = seeker_with_resume(&server).await.unwrap();

    let form = reqwest::multipart::Form::new()
        .text("name", "Renamed Seeker")
        .text("email", seeker.user.email.clone());
    let response = server
        .post_multipart("/api/user", &seeker.access_token, form)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get_auth("/api/user", &seeker.access_token).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user.name, "Renamed Seeker");
    assert_eq!(user.skills.as_deref(), Some("rust, sql"));
    assert!(user.resume_path.is_some());
}

#[tokio::test]
async fn test_seeker_cannot_create_company() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let seeker = register(&server, RegisterRequest::seeker()).await.unwrap();

    let response = server
        .post_auth("/api/companies", &seeker.access_token, &CompanyRequest::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_company_delete_cascades() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (employer, company, job) = employer_with_job(&server).await.unwrap();
    let seeker = seeker_with_resume(&server).await.unwrap();

    let response = server
        .post_auth(
            "/api/applications",
            &seeker.access_token,
            &json!({ "job_id": job.id }),
        )
        .await
        .unwrap();
    let application: ApplicationResponse = assert_json(response, StatusCode::CREATED)
        .await
        .unwrap();

    let response = server
        .delete_auth(&format!("/api/companies/{}", company.id), &employer.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&format!("/api/jobs/{}", job.id)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .get_auth(
            &format!("/api/applications/{}", application.id),
            &seeker.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Listing Tests
// ============================================================================

#[tokio::test]
async fn test_job_search_filters() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, _, job) = employer_with_job(&server).await.unwrap();

    let response = server
        .get(&format!("/api/jobs?search={}", job.title.replace(' ', "%20")))
        .await
        .unwrap();
    let page: PageResponse<JobResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.current_page, 1);
    assert!(page.data.iter().any(|j| j.id == job.id));

    let response = server
        .get("/api/jobs?search=no-such-title-anywhere-42")
        .await
        .unwrap();
    let page: PageResponse<JobResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.total, 0);
}

#[tokio::test]
async fn test_invalid_id_path() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/jobs/not-a-number").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_landing_stats_shape() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/stats").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body["stats"]["activeJobs"].is_i64());
    assert!(body["stats"]["companies"].is_i64());
    assert!(body["stats"]["candidates"].is_i64());
    assert!(body["categories"].is_array());
}

#[tokio::test]
async fn test_dashboard_labels_by_role() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let seeker = register(&server, RegisterRequest::seeker()).await.unwrap();

    let response = server
        .get_auth("/api/dashboard-stats", &seeker.access_token)
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["role"], "seeker");
    assert_eq!(body["stats"][0]["label"], "Jobs Applied");
}

// ============================================================================
// Admin Tests
// ============================================================================

#[tokio::test]
async fn test_job_moderation_is_logged() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, _, job) = employer_with_job(&server).await.unwrap();
    assert_eq!(job.status, "pending");
    let admin = login_admin(&server).await.unwrap();

    let response = server
        .patch_auth(
            &format!("/api/admin/jobs/{}/status", job.id),
            &admin.access_token,
            &json!({ "status": "active" }),
        )
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["message"], "Job status updated to active");

    let response = server.get(&format!("/api/jobs/{}", job.id)).await.unwrap();
    let updated: JobResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.status, "active");

    let response = server
        .get_auth("/api/admin/activities", &admin.access_token)
        .await
        .unwrap();
    let page: PageResponse<ActivityLogResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    let entry = page
        .data
        .iter()
        .find(|e| e.target_id == Some(job.id) && e.target_model.as_deref() == Some("Job"))
        .expect("activity entry for the job");
    assert_eq!(entry.action, "update_job_status_active");
    assert_eq!(entry.details.as_deref(), Some("Changed job status to active"));
}

#[tokio::test]
async fn test_admin_routes_require_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let employer = register(&server, RegisterRequest::employer()).await.unwrap();

    let response = server
        .get_auth("/api/admin/stats", &employer.access_token)
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.message, "Unauthorized. Admin access required.");
}

#[tokio::test]
async fn test_admin_cannot_be_deleted() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = login_admin(&server).await.unwrap();

    let response = server
        .delete_auth(
            &format!("/api/admin/users/{}", admin.user.id),
            &admin.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_admin_deletes_user_and_revokes_sessions() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = login_admin(&server).await.unwrap();
    let seeker = register(&server, RegisterRequest::seeker()).await.unwrap();

    let response = server
        .delete_auth(
            &format!("/api/admin/users/{}", seeker.user.id),
            &admin.access_token,
        )
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["message"], "User deleted");

    let response = server.get_auth("/api/user", &seeker.access_token).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}
