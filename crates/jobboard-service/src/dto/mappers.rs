//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs,
//! plus `with_*` helpers that attach loaded relations.

use jobboard_core::{ActivityLog, Application, Company, Job, User};

use super::responses::{
    ActivityLogResponse, ApplicationResponse, CompanyResponse, JobResponse, UserResponse,
    UserSummary,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            phone: user.phone.clone(),
            title: user.title.clone(),
            bio: user.bio.clone(),
            portfolio_url: user.portfolio_url.clone(),
            github_url: user.github_url.clone(),
            linkedin_url: user.linkedin_url.clone(),
            skills: user.skills.clone(),
            department: user.department.clone(),
            education: user.education.clone(),
            experience: user.experience.clone(),
            resume_path: user.resume_path.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

// ============================================================================
// Company Mappers
// ============================================================================

impl From<Company> for CompanyResponse {
    fn from(company: Company) -> Self {
        Self {
            id: company.id,
            user_id: company.user_id,
            name: company.name,
            description: company.description,
            website: company.website,
            logo: company.logo,
            created_at: company.created_at,
            updated_at: company.updated_at,
            user: None,
            jobs: None,
            jobs_count: None,
        }
    }
}

impl From<&Company> for CompanyResponse {
    fn from(company: &Company) -> Self {
        Self::from(company.clone())
    }
}

impl CompanyResponse {
    pub fn with_owner(mut self, owner: Option<&User>) -> Self {
        self.user = owner.map(UserSummary::from);
        self
    }

    pub fn with_jobs(mut self, jobs: Vec<Job>) -> Self {
        self.jobs = Some(jobs.into_iter().map(JobResponse::from).collect());
        self
    }

    pub fn with_jobs_count(mut self, count: i64) -> Self {
        self.jobs_count = Some(count);
        self
    }
}

// ============================================================================
// Job Mappers
// ============================================================================

impl From<Job> for JobResponse {
    fn from(job: Job) -> Self {
        Self {
            id: job.id,
            company_id: job.company_id,
            title: job.title,
            description: job.description,
            location: job.location,
            salary: job.salary,
            job_type: job.job_type,
            category: job.category,
            requirements: job.requirements,
            deadline: job.deadline,
            status: job.status,
            created_at: job.created_at,
            updated_at: job.updated_at,
            company: None,
            applications_count: None,
        }
    }
}

impl From<&Job> for JobResponse {
    fn from(job: &Job) -> Self {
        Self::from(job.clone())
    }
}

impl JobResponse {
    pub fn with_company(mut self, company: Option<&Company>) -> Self {
        self.company = company.map(|c| Box::new(CompanyResponse::from(c)));
        self
    }

    pub fn with_applications_count(mut self, count: i64) -> Self {
        self.applications_count = Some(count);
        self
    }
}

// ============================================================================
// Application Mappers
// ============================================================================

impl From<Application> for ApplicationResponse {
    fn from(application: Application) -> Self {
        Self {
            id: application.id,
            job_id: application.job_id,
            user_id: application.user_id,
            resume_path: application.resume_path,
            status: application.status,
            created_at: application.created_at,
            updated_at: application.updated_at,
            job: None,
            user: None,
        }
    }
}

impl ApplicationResponse {
    pub fn with_job(mut self, job: Option<JobResponse>) -> Self {
        self.job = job;
        self
    }

    pub fn with_applicant(mut self, applicant: Option<&User>) -> Self {
        self.user = applicant.map(UserResponse::from);
        self
    }
}

// ============================================================================
// Activity Log Mappers
// ============================================================================

impl From<ActivityLog> for ActivityLogResponse {
    fn from(log: ActivityLog) -> Self {
        Self {
            id: log.id,
            user_id: log.user_id,
            action: log.action,
            target_model: log.target_model,
            target_id: log.target_id,
            details: log.details,
            ip_address: log.ip_address,
            created_at: log.created_at,
            user: None,
        }
    }
}

impl ActivityLogResponse {
    pub fn with_user(mut self, user: Option<&User>) -> Self {
        self.user = user.map(UserSummary::from);
        self
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use jobboard_core::{JobStatus, Role};

    use super::*;

    fn job() -> Job {
        let now = Utc::now();
        Job {
            id: 5,
            company_id: 2,
            title: "Backend Engineer".to_string(),
            description: "Build APIs".to_string(),
            location: "Remote".to_string(),
            salary: None,
            job_type: "full-time".to_string(),
            category: Some("Engineering".to_string()),
            requirements: None,
            deadline: None,
            status: JobStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    fn company() -> Company {
        let now = Utc::now();
        Company {
            id: 2,
            user_id: 9,
            name: "Acme".to_string(),
            description: None,
            website: None,
            logo: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_job_response_serializes_type_and_status() {
        let json = serde_json::to_value(JobResponse::from(job())).unwrap();
        assert_eq!(json["type"], "full-time");
        assert_eq!(json["status"], "pending");
        assert!(json.get("company").is_none());
        assert!(json.get("applications_count").is_none());
    }

    #[test]
    fn test_job_with_company() {
        let response = JobResponse::from(job())
            .with_company(Some(&company()))
            .with_applications_count(3);
        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["company"]["name"], "Acme");
        assert_eq!(json["applications_count"], 3);
    }

    #[test]
    fn test_user_response_has_no_password() {
        let now = Utc::now();
        let user = User {
            id: 1,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            role: Role::Seeker,
            phone: None,
            title: None,
            bio: None,
            portfolio_url: None,
            github_url: None,
            linkedin_url: None,
            skills: None,
            department: None,
            education: None,
            experience: None,
            resume_path: None,
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_value(UserResponse::from(&user)).unwrap();
        assert_eq!(json["role"], "seeker");
        assert!(json.get("password").is_none());
        assert!(json.get("password_hash").is_none());
    }
}
