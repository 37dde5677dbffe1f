//! Profile service - the caller's own account

use jobboard_core::{authorize, Action, DomainError, ProfileUpdate, Target, User};
use tracing::{info, instrument};

use crate::dto::{ProfileForm, ProfileResponse, UserResponse};

use super::auth::Authenticated;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::storage::ResumeStorage;

pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    pub fn show(&self, caller: &Authenticated) -> UserResponse {
        UserResponse::from(&caller.user)
    }

    /// Update profile fields and optionally replace the resume
    #[instrument(skip(self, caller, form), fields(user_id = caller.user.id))]
    pub async fn update(
        &self,
        caller: &Authenticated,
        form: ProfileForm,
    ) -> ServiceResult<ProfileResponse> {
        let mut user: User = caller.user.clone();
        authorize(
            &caller.actor(),
            Action::Update,
            &Target::User {
                id: user.id,
                role: user.role,
            },
        )
        .into_result()?;

        let email = form.email.unwrap_or_default().trim().to_string();
        if self
            .ctx
            .user_repo()
            .email_exists(&email, Some(user.id))
            .await?
        {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let resume_path = match &form.resume {
            Some(upload) => Some(ResumeStorage::new(self.ctx.storage()).store(upload).await?),
            None => None,
        };

        user.apply_profile(ProfileUpdate {
            name: form.name.unwrap_or_default(),
            email,
            phone: form.phone,
            title: form.title,
            bio: form.bio,
            portfolio_url: form.portfolio_url,
            github_url: form.github_url,
            linkedin_url: form.linkedin_url,
            skills: form.skills,
            department: form.department,
            education: form.education,
            experience: form.experience,
            resume_path,
        });

        self.ctx.user_repo().update_profile(&user).await?;

        info!("Profile updated");

        Ok(ProfileResponse {
            user: UserResponse::from(&user),
            message: "Profile updated successfully",
        })
    }
}
