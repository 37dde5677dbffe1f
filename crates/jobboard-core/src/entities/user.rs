//! User entity - an account of any role

use chrono::{DateTime, Utc};

use super::assign;
use crate::value_objects::Role;

/// User account with its public profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub phone: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub portfolio_url: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub skills: Option<String>,
    pub department: Option<String>,
    pub education: Option<String>,
    pub experience: Option<String>,
    pub resume_path: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    #[inline]
    pub fn has_resume(&self) -> bool {
        self.resume_path.as_deref().is_some_and(|p| !p.is_empty())
    }

    /// Apply a profile update; fields that were not submitted keep their
    /// stored values, and a `None` resume keeps the stored file
    pub fn apply_profile(&mut self, update: ProfileUpdate) {
        self.name = update.name;
        self.email = update.email;
        assign(&mut self.phone, update.phone);
        assign(&mut self.title, update.title);
        assign(&mut self.bio, update.bio);
        assign(&mut self.portfolio_url, update.portfolio_url);
        assign(&mut self.github_url, update.github_url);
        assign(&mut self.linkedin_url, update.linkedin_url);
        assign(&mut self.skills, update.skills);
        assign(&mut self.department, update.department);
        assign(&mut self.education, update.education);
        assign(&mut self.experience, update.experience);
        if let Some(path) = update.resume_path {
            self.resume_path = Some(path);
        }
        self.updated_at = Utc::now();
    }
}

/// Data needed to insert a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Editable profile fields. Optional fields are `None` when not submitted
/// and `Some(None)` when submitted empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    pub phone: Option<Option<String>>,
    pub title: Option<Option<String>>,
    pub bio: Option<Option<String>>,
    pub portfolio_url: Option<Option<String>>,
    pub github_url: Option<Option<String>>,
    pub linkedin_url: Option<Option<String>>,
    pub skills: Option<Option<String>>,
    pub department: Option<Option<String>>,
    pub education: Option<Option<String>>,
    pub experience: Option<Option<String>>,
    pub resume_path: Option<String>,
}
