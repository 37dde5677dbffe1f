//! Multipart profile form extractor

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
};
use jobboard_service::dto::{ProfileForm, ResumeUpload};
use validator::Validate;

use crate::response::ApiError;

const RESUME_FIELD: &str = "resume";

/// Profile fields plus an optional `resume` file, validated
#[derive(Debug, Clone)]
pub struct ProfileMultipart(pub ProfileForm);

#[async_trait]
impl<S> FromRequest<S> for ProfileMultipart
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| ApiError::invalid_body(e.body_text()))?;

        let mut form = ProfileForm::default();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::invalid_body(e.body_text()))?
        {
            let name = field.name().unwrap_or_default().to_string();

            if name == RESUME_FIELD {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::invalid_body(e.body_text()))?;
                // Browsers send an empty part when no file was picked
                if !file_name.is_empty() || !bytes.is_empty() {
                    form.resume = Some(ResumeUpload {
                        file_name,
                        bytes: bytes.to_vec(),
                    });
                }
            } else {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::invalid_body(e.body_text()))?;
                form.set_field(&name, value);
            }
        }

        form.validate()?;

        Ok(Self(form))
    }
}
