//! Authentication service
//!
//! Handles registration, login, logout, and resolving bearer tokens into
//! the calling user. Every token is bound to a session record in Redis.

use std::str::FromStr;

use jobboard_cache::SessionData;
use jobboard_common::AppError;
use jobboard_core::{Actor, DomainError, NewUser, Role, User};
use tracing::{debug, info, instrument, warn};

use crate::dto::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::maintenance::MaintenanceService;

/// A caller whose bearer token resolved to a live session
#[derive(Debug, Clone)]
pub struct Authenticated {
    pub user: User,
    pub session_id: String,
}

impl Authenticated {
    pub fn actor(&self) -> Actor {
        Actor::new(self.user.id, self.user.role)
    }
}

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new seeker or employer and sign them in
    #[instrument(skip(self, request, ip_address), fields(email = ?request.email))]
    pub async fn register(
        &self,
        request: RegisterRequest,
        ip_address: Option<String>,
    ) -> ServiceResult<AuthResponse> {
        if MaintenanceService::new(self.ctx).current().await?.is_on() {
            warn!("Registration refused during maintenance");
            return Err(DomainError::UnderMaintenance.into());
        }

        if !request.passwords_match() {
            return Err(ServiceError::validation(
                "password",
                "The password confirmation does not match.",
            ));
        }

        let role_input = request.role.unwrap_or_default();
        let role = Role::from_str(&role_input)?;
        if !role.is_self_assignable() {
            return Err(DomainError::InvalidRole(role_input).into());
        }

        let email = request.email.unwrap_or_default().trim().to_string();
        if self.ctx.user_repo().email_exists(&email, None).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let password_hash = self
            .ctx
            .password_service()
            .hash(&request.password.unwrap_or_default())
            .await?;

        let user = self
            .ctx
            .user_repo()
            .create(&NewUser {
                name: request.name.unwrap_or_default(),
                email,
                password_hash,
                role,
            })
            .await?;

        info!(user_id = user.id, role = %user.role, "User registered successfully");

        self.issue_session(user, ip_address).await
    }

    /// Login with email and password
    ///
    /// During maintenance only admins get a session, and only after their
    /// credentials check out.
    #[instrument(skip(self, request, ip_address), fields(email = ?request.email))]
    pub async fn login(
        &self,
        request: LoginRequest,
        ip_address: Option<String>,
    ) -> ServiceResult<AuthResponse> {
        let email = request.email.unwrap_or_default();
        let user = self
            .ctx
            .user_repo()
            .find_by_email(email.trim())
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        if let Err(e) = self
            .ctx
            .password_service()
            .verify_or_error(&request.password.unwrap_or_default(), &password_hash)
            .await
        {
            warn!(user_id = user.id, "Login failed: invalid password");
            return Err(e.into());
        }

        if !user.is_admin() && MaintenanceService::new(self.ctx).current().await?.is_on() {
            warn!(user_id = user.id, "Login refused during maintenance");
            return Err(DomainError::UnderMaintenance.into());
        }

        info!(user_id = user.id, "User logged in successfully");

        self.issue_session(user, ip_address).await
    }

    /// Revoke the presented session only
    #[instrument(skip(self))]
    pub async fn logout(&self, session_id: &str) -> ServiceResult<()> {
        let revoked = self.ctx.session_store().revoke(session_id).await?;
        debug!(revoked, "Session revoked");
        Ok(())
    }

    /// Resolve a bearer token into the user behind it
    ///
    /// Fails with `InvalidToken` when the signature is bad, the session was
    /// revoked, or the user no longer exists.
    #[instrument(skip(self, token))]
    pub async fn resolve(&self, token: &str) -> ServiceResult<Authenticated> {
        let claims = self.ctx.jwt_service().decode_token(token)?;
        let user_id = claims.user_id()?;

        let session = self
            .ctx
            .session_store()
            .get(&claims.sid)
            .await?
            .filter(|session| session.user_id == user_id)
            .ok_or(ServiceError::App(AppError::InvalidToken))?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(session.user_id)
            .await?
            .ok_or(ServiceError::App(AppError::InvalidToken))?;

        Ok(Authenticated {
            user,
            session_id: claims.sid,
        })
    }

    async fn issue_session(
        &self,
        user: User,
        ip_address: Option<String>,
    ) -> ServiceResult<AuthResponse> {
        let token = self.ctx.jwt_service().issue(user.id)?;

        let mut data = SessionData::new(user.id);
        if let Some(ip) = ip_address {
            data = data.with_ip_address(ip);
        }
        self.ctx
            .session_store()
            .create(&token.session_id, &data)
            .await?;

        Ok(AuthResponse {
            user: UserResponse::from(&user),
            access_token: token.access_token,
            token_type: token.token_type,
        })
    }
}
