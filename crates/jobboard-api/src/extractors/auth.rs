//! Authentication extractor
//!
//! Resolves the bearer token into a live session. The maintenance gate may
//! already have done so, in which case the result is taken from the request
//! extensions.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use jobboard_core::{Actor, User};
use jobboard_service::{AuthService, Authenticated};

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated caller
#[derive(Debug, Clone)]
pub struct AuthUser(pub Authenticated);

impl AuthUser {
    pub fn actor(&self) -> Actor {
        self.0.actor()
    }

    pub fn user(&self) -> &User {
        &self.0.user
    }

    pub fn session_id(&self) -> &str {
        &self.0.session_id
    }
}

/// Bearer token from the Authorization header, if any
async fn bearer_token<S: Send + Sync>(parts: &mut Parts, state: &S) -> Option<String> {
    TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
        .await
        .ok()
        .map(|TypedHeader(Authorization(bearer))| bearer.token().to_string())
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(authenticated) = parts.extensions.get::<Authenticated>() {
            return Ok(Self(authenticated.clone()));
        }

        let token = bearer_token(parts, state).await.ok_or(ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);
        let authenticated = AuthService::new(app_state.service_context())
            .resolve(&token)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid access token");
                ApiError::from(e)
            })?;

        parts.extensions.insert(authenticated.clone());
        Ok(Self(authenticated))
    }
}
