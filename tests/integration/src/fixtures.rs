//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use reqwest::{
    multipart::{Form, Part},
    StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::helpers::{assert_json, TestServer, ADMIN_EMAIL, ADMIN_PASSWORD};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
///
/// Tests share one database across runs, so the suffix also carries a
/// per-process random part.
pub fn unique_suffix() -> String {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    let run = uuid::Uuid::new_v4().simple().to_string();
    format!("{}{n}", &run[..8])
}

/// Registration request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub role: String,
}

impl RegisterRequest {
    pub fn unique(role: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test {role} {suffix}"),
            email: format!("{role}{suffix}@example.com"),
            password: "TestPass123!".to_string(),
            password_confirmation: "TestPass123!".to_string(),
            role: role.to_string(),
        }
    }

    pub fn seeker() -> Self {
        Self::unique("seeker")
    }

    pub fn employer() -> Self {
        Self::unique("employer")
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }

    pub fn admin() -> Self {
        Self {
            email: ADMIN_EMAIL.to_string(),
            password: ADMIN_PASSWORD.to_string(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub token_type: String,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub skills: Option<String>,
    pub resume_path: Option<String>,
}

/// Company request
#[derive(Debug, Serialize)]
pub struct CompanyRequest {
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
}

impl CompanyRequest {
    pub fn unique() -> Self {
        Self {
            name: format!("Acme {}", unique_suffix()),
            description: Some("Makes everything".to_string()),
            website: Some("https://acme.example.com".to_string()),
        }
    }
}

/// Company response
#[derive(Debug, Deserialize)]
pub struct CompanyResponse {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
}

/// Job request
#[derive(Debug, Serialize)]
pub struct JobRequest {
    pub company_id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub category: Option<String>,
}

impl JobRequest {
    pub fn for_company(company_id: i64) -> Self {
        Self {
            company_id,
            title: format!("Backend Engineer {}", unique_suffix()),
            description: "Build and run services".to_string(),
            location: "Remote".to_string(),
            job_type: "Full-time".to_string(),
            category: Some("Engineering".to_string()),
        }
    }
}

/// Job response
#[derive(Debug, Deserialize)]
pub struct JobResponse {
    pub id: i64,
    pub company_id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: Option<String>,
    pub status: String,
}

/// Application response
#[derive(Debug, Deserialize)]
pub struct ApplicationResponse {
    pub id: i64,
    pub job_id: i64,
    pub user_id: i64,
    pub resume_path: String,
    pub status: String,
}

/// Error body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    pub code: String,
    #[serde(default)]
    pub maintenance: bool,
}

/// Paginated list
#[derive(Debug, Deserialize)]
pub struct PageResponse<T> {
    pub data: Vec<T>,
    pub current_page: u32,
    pub total: i64,
}

/// Activity log entry
#[derive(Debug, Deserialize)]
pub struct ActivityLogResponse {
    pub action: String,
    pub target_model: Option<String>,
    pub target_id: Option<i64>,
    pub details: Option<String>,
}

/// Multipart profile update that uploads a small PDF resume
pub fn profile_form_with_resume(name: &str, email: &str) -> Result<Form> {
    let resume = Part::bytes(b"%PDF-1.4\n% integration test resume\n".to_vec())
        .file_name("resume.pdf")
        .mime_str("application/pdf")?;

    Ok(Form::new()
        .text("name", name.to_string())
        .text("email", email.to_string())
        .text("skills", "rust, sql")
        .part("resume", resume))
}

// ============================================================================
// Scenario builders
// ============================================================================

/// Register an account and return its credentials and token
pub async fn register(server: &TestServer, request: RegisterRequest) -> Result<AuthResponse> {
    let response = server.post("/api/register", &request).await?;
    assert_json(response, StatusCode::CREATED).await
}

/// Log in as the bootstrap admin
pub async fn login_admin(server: &TestServer) -> Result<AuthResponse> {
    let response = server.post("/api/login", &LoginRequest::admin()).await?;
    assert_json(response, StatusCode::OK).await
}

/// Register an employer with one company and one job
pub async fn employer_with_job(
    server: &TestServer,
) -> Result<(AuthResponse, CompanyResponse, JobResponse)> {
    let employer = register(server, RegisterRequest::employer()).await?;

    let response = server
        .post_auth("/api/companies", &employer.access_token, &CompanyRequest::unique())
        .await?;
    let company: CompanyResponse = assert_json(response, StatusCode::CREATED).await?;

    let response = server
        .post_auth(
            "/api/jobs",
            &employer.access_token,
            &JobRequest::for_company(company.id),
        )
        .await?;
    let job: JobResponse = assert_json(response, StatusCode::CREATED).await?;

    Ok((employer, company, job))
}

/// Register a seeker and upload a resume to their profile
pub async fn seeker_with_resume(server: &TestServer) -> Result<AuthResponse> {
    let request = RegisterRequest::seeker();
    let seeker = register(server, request.clone()).await?;

    let form = profile_form_with_resume(&request.name, &request.email)?;
    let response = server
        .post_multipart("/api/user", &seeker.access_token, form)
        .await?;
    crate::helpers::assert_status(response, StatusCode::OK).await?;

    Ok(seeker)
}
