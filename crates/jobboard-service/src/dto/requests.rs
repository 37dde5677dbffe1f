//! Request DTOs for API endpoints
//!
//! Required fields are `Option`s checked with `required`, so a missing key
//! produces a field message instead of a deserialization failure.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use validator::Validate;

/// Keeps an explicit `null` (`Some(None)`) apart from an absent key (`None`)
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(
        required(message = "The name field is required."),
        length(max = 255, message = "The name field must not be greater than 255 characters.")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "The email field is required."),
        email(message = "The email field must be a valid email address.")
    )]
    pub email: Option<String>,

    #[validate(
        required(message = "The password field is required."),
        length(min = 8, message = "The password field must be at least 8 characters.")
    )]
    pub password: Option<String>,

    pub password_confirmation: Option<String>,

    /// `seeker` or `employer`
    #[validate(required(message = "The role field is required."))]
    pub role: Option<String>,
}

impl RegisterRequest {
    /// `password_confirmation` repeats `password`
    pub fn passwords_match(&self) -> bool {
        self.password == self.password_confirmation
    }
}

/// User login request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(
        required(message = "The email field is required."),
        email(message = "The email field must be a valid email address.")
    )]
    pub email: Option<String>,

    #[validate(required(message = "The password field is required."))]
    pub password: Option<String>,
}

// ============================================================================
// Company Requests
// ============================================================================

/// Create a company
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CompanyRequest {
    #[validate(
        required(message = "The name field is required."),
        length(max = 255, message = "The name field must not be greater than 255 characters.")
    )]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(length(
        max = 255,
        message = "The website field must not be greater than 255 characters."
    ))]
    pub website: Option<String>,

    pub logo: Option<String>,
}

/// Partial company edit; absent keys keep their stored values
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCompanyRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "The name field must be between 1 and 255 characters."
    ))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    #[validate(length(
        max = 255,
        message = "The website field must not be greater than 255 characters."
    ))]
    pub website: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    pub logo: Option<Option<String>>,
}

// ============================================================================
// Job Requests
// ============================================================================

/// Create a job posting
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct JobRequest {
    #[validate(required(message = "The company id field is required."))]
    pub company_id: Option<i64>,

    #[validate(
        required(message = "The title field is required."),
        length(max = 255, message = "The title field must not be greater than 255 characters.")
    )]
    pub title: Option<String>,

    #[validate(required(message = "The description field is required."))]
    pub description: Option<String>,

    #[validate(
        required(message = "The location field is required."),
        length(max = 255, message = "The location field must not be greater than 255 characters.")
    )]
    pub location: Option<String>,

    #[validate(length(max = 255, message = "The salary field must not be greater than 255 characters."))]
    pub salary: Option<String>,

    #[serde(rename = "type")]
    #[validate(
        required(message = "The type field is required."),
        length(max = 50, message = "The type field must not be greater than 50 characters.")
    )]
    pub job_type: Option<String>,

    #[validate(length(max = 255, message = "The category field must not be greater than 255 characters."))]
    pub category: Option<String>,

    pub requirements: Option<String>,

    /// `YYYY-MM-DD`
    pub deadline: Option<NaiveDate>,
}

/// Partial job edit; absent keys keep their stored values
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateJobRequest {
    pub company_id: Option<i64>,

    #[validate(length(
        min = 1,
        max = 255,
        message = "The title field must be between 1 and 255 characters."
    ))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "The description field must not be empty."))]
    pub description: Option<String>,

    #[validate(length(
        min = 1,
        max = 255,
        message = "The location field must be between 1 and 255 characters."
    ))]
    pub location: Option<String>,

    #[serde(default, deserialize_with = "present")]
    #[validate(length(max = 255, message = "The salary field must not be greater than 255 characters."))]
    pub salary: Option<Option<String>>,

    #[serde(rename = "type")]
    #[validate(length(
        min = 1,
        max = 50,
        message = "The type field must be between 1 and 50 characters."
    ))]
    pub job_type: Option<String>,

    #[serde(default, deserialize_with = "present")]
    #[validate(length(max = 255, message = "The category field must not be greater than 255 characters."))]
    pub category: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    pub requirements: Option<Option<String>>,

    /// `YYYY-MM-DD`, or `null` to clear
    #[serde(default, deserialize_with = "present")]
    pub deadline: Option<Option<NaiveDate>>,
}

/// Query string of the public job listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobListQuery {
    pub search: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    pub category: Option<String>,
}

/// Admin moderation of a job
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct JobStatusRequest {
    #[validate(required(message = "The status field is required."))]
    pub status: Option<String>,
}

// ============================================================================
// Application Requests
// ============================================================================

/// Apply to a job
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ApplyRequest {
    #[validate(required(message = "The job id field is required."))]
    pub job_id: Option<i64>,

    /// Stored resume to use instead of the profile one
    pub resume: Option<String>,
}

/// Employer status change
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateApplicationRequest {
    #[validate(required(message = "The status field is required."))]
    pub status: Option<String>,
}

// ============================================================================
// Admin Requests
// ============================================================================

/// Maintenance toggle
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct MaintenanceRequest {
    #[validate(required(message = "The status field is required."))]
    pub status: Option<bool>,
}

// ============================================================================
// Profile
// ============================================================================

/// An uploaded resume file
#[derive(Debug, Clone, Default)]
pub struct ResumeUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ResumeUpload {
    /// Lower-case extension of the original file name
    pub fn extension(&self) -> Option<String> {
        std::path::Path::new(&self.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
    }
}

/// Profile update, assembled from a multipart form
///
/// Optional fields are `None` when the form did not carry them and
/// `Some(None)` when they were sent empty.
#[derive(Debug, Clone, Default, Validate)]
pub struct ProfileForm {
    #[validate(
        required(message = "The name field is required."),
        length(max = 255, message = "The name field must not be greater than 255 characters.")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "The email field is required."),
        email(message = "The email field must be a valid email address.")
    )]
    pub email: Option<String>,

    #[validate(length(max = 20, message = "The phone field must not be greater than 20 characters."))]
    pub phone: Option<Option<String>>,

    #[validate(length(max = 255, message = "The title field must not be greater than 255 characters."))]
    pub title: Option<Option<String>>,

    pub bio: Option<Option<String>>,

    #[validate(url(message = "The portfolio url field must be a valid URL."))]
    pub portfolio_url: Option<Option<String>>,

    #[validate(url(message = "The github url field must be a valid URL."))]
    pub github_url: Option<Option<String>>,

    #[validate(url(message = "The linkedin url field must be a valid URL."))]
    pub linkedin_url: Option<Option<String>>,

    pub skills: Option<Option<String>>,

    #[validate(length(max = 255, message = "The department field must not be greater than 255 characters."))]
    pub department: Option<Option<String>>,

    pub education: Option<Option<String>>,

    pub experience: Option<Option<String>>,

    pub resume: Option<ResumeUpload>,
}

impl ProfileForm {
    /// Set a text field by its form name; unknown names are ignored.
    /// Empty values clear optional fields.
    pub fn set_field(&mut self, name: &str, value: String) {
        let value = Some(value).filter(|v| !v.trim().is_empty());
        match name {
            "name" => self.name = value,
            "email" => self.email = value,
            "phone" => self.phone = Some(value),
            "title" => self.title = Some(value),
            "bio" => self.bio = Some(value),
            "portfolio_url" => self.portfolio_url = Some(value),
            "github_url" => self.github_url = Some(value),
            "linkedin_url" => self.linkedin_url = Some(value),
            "skills" => self.skills = Some(value),
            "department" => self.department = Some(value),
            "education" => self.education = Some(value),
            "experience" => self.experience = Some(value),
            _ => {}
        }
    }
}
