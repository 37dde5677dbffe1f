//! User entity <-> model mapper

use jobboard_core::entities::User;
use jobboard_core::error::DomainError;

use crate::models::UserModel;

impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        Ok(User {
            id: model.id,
            name: model.name,
            email: model.email,
            role: model.role.parse()?,
            phone: model.phone,
            title: model.title,
            bio: model.bio,
            portfolio_url: model.portfolio_url,
            github_url: model.github_url,
            linkedin_url: model.linkedin_url,
            skills: model.skills,
            department: model.department,
            education: model.education,
            experience: model.experience,
            resume_path: model.resume_path,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
