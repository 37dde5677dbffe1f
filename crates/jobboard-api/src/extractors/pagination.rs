//! Pagination extractor
//!
//! Reads `?page=N`; anything missing or unparsable is page 1. Page sizes are
//! fixed per endpoint by the services.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

/// Raw pagination query parameters
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub page: Option<String>,
}

/// Requested page, 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery(pub u32);

impl Default for PageQuery {
    fn default() -> Self {
        Self(1)
    }
}

impl From<PageParams> for PageQuery {
    fn from(params: PageParams) -> Self {
        let page = params
            .page
            .and_then(|p| p.trim().parse::<u32>().ok())
            .filter(|p| *p > 0)
            .unwrap_or(1);
        Self(page)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(Self::from(params))
    }
}
