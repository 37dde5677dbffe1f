//! Route definitions
//!
//! All API routes organized by domain and mounted under /api, behind the
//! maintenance gate. Health probes and uploaded files sit outside it.

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::handlers::{
    admin, applications, auth, companies, dashboard, health, jobs, profile, stats,
};
use crate::middleware::maintenance_gate;
use crate::state::AppState;

/// Create the main router with every route
pub fn create_router(state: &AppState) -> Router<AppState> {
    let storage = &state.config().storage;

    Router::new()
        .nest(
            "/api",
            api_routes().route_layer(from_fn_with_state(state.clone(), maintenance_gate)),
        )
        .merge(health_routes())
        .nest_service(&storage.public_path, ServeDir::new(&storage.upload_dir))
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(job_routes())
        .merge(company_routes())
        .merge(application_routes())
        .merge(account_routes())
        .nest("/admin", admin_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Job routes
fn job_routes() -> Router<AppState> {
    Router::new()
        .route("/jobs", get(jobs::list_jobs).post(jobs::create_job))
        .route(
            "/jobs/:id",
            get(jobs::get_job).put(jobs::update_job).delete(jobs::delete_job),
        )
}

/// Company routes
fn company_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/companies",
            get(companies::list_companies).post(companies::create_company),
        )
        .route(
            "/companies/:id",
            get(companies::get_company)
                .put(companies::update_company)
                .delete(companies::delete_company),
        )
        .route("/employer/companies", get(companies::list_own_companies))
}

/// Application routes
fn application_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/applications",
            get(applications::list_applications).post(applications::apply),
        )
        .route(
            "/applications/:id",
            get(applications::get_application)
                .put(applications::update_application)
                .delete(applications::delete_application),
        )
        .route("/my-applications", get(applications::list_my_applications))
        .route(
            "/employer/applications",
            get(applications::list_received_applications),
        )
}

/// Profile, dashboard and landing routes
fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/user", get(profile::get_profile).post(profile::update_profile))
        .route("/dashboard-stats", get(dashboard::dashboard_stats))
        .route("/stats", get(stats::landing_stats))
}

/// Admin routes, mounted under /admin
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/stats", get(admin::stats))
        .route("/analytics", get(admin::analytics))
        .route("/performance", get(admin::performance))
        .route("/users", get(admin::list_users))
        .route("/users/:id", delete(admin::delete_user))
        .route("/jobs", get(admin::list_jobs))
        .route("/jobs/:id", delete(admin::delete_job))
        .route("/jobs/:id/status", patch(admin::update_job_status))
        .route("/companies", get(admin::list_companies))
        .route("/companies/:id", delete(admin::delete_company))
        .route("/applications", get(admin::list_applications))
        .route(
            "/applications/:id",
            delete(admin::delete_application),
        )
        .route("/activities", get(admin::list_activities))
        .route("/maintenance", post(admin::set_maintenance))
}
