//! Resume file storage on the local disk

use std::path::PathBuf;

use jobboard_common::{AppError, StorageConfig};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::ResumeUpload;

use super::error::{ServiceError, ServiceResult};

const RESUME_DIR: &str = "resumes";
const RESUME_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

/// Writes uploaded resumes under `{upload_dir}/resumes`
pub struct ResumeStorage<'a> {
    config: &'a StorageConfig,
}

impl<'a> ResumeStorage<'a> {
    pub fn new(config: &'a StorageConfig) -> Self {
        Self { config }
    }

    /// Check type and size; returns the normalized extension
    pub fn validate(&self, upload: &ResumeUpload) -> ServiceResult<String> {
        let extension = upload
            .extension()
            .filter(|ext| RESUME_EXTENSIONS.contains(&ext.as_str()))
            .ok_or_else(|| {
                ServiceError::validation(
                    "resume",
                    "The resume field must be a file of type: pdf, doc, docx.",
                )
            })?;

        if upload.bytes.len() > self.config.max_resume_bytes() {
            return Err(ServiceError::validation(
                "resume",
                format!(
                    "The resume field must not be greater than {} kilobytes.",
                    self.config.max_resume_kb
                ),
            ));
        }

        Ok(extension)
    }

    /// Store the file under a fresh name; returns the relative path to record
    #[instrument(skip(self, upload), fields(file_name = %upload.file_name, size = upload.bytes.len()))]
    pub async fn store(&self, upload: &ResumeUpload) -> ServiceResult<String> {
        let extension = self.validate(upload)?;

        let dir: PathBuf = self.config.upload_dir.join(RESUME_DIR);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        let file_name = format!("{}.{extension}", Uuid::new_v4());
        tokio::fs::write(dir.join(&file_name), &upload.bytes)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        let relative = format!("{RESUME_DIR}/{file_name}");
        info!(path = %relative, "Stored resume");
        Ok(relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(dir: PathBuf) -> StorageConfig {
        StorageConfig {
            upload_dir: dir,
            public_path: "/storage".to_string(),
            max_resume_kb: 1,
        }
    }

    fn upload(name: &str, size: usize) -> ResumeUpload {
        ResumeUpload {
            file_name: name.to_string(),
            bytes: vec![b'x'; size],
        }
    }

    #[test]
    fn test_rejects_other_types() {
        let config = config(std::env::temp_dir());
        let storage = ResumeStorage::new(&config);
        let err = storage.validate(&upload("cv.exe", 10)).unwrap_err();
        assert_eq!(err.field(), Some("resume"));
        assert!(storage.validate(&upload("cv", 10)).is_err());
        assert_eq!(storage.validate(&upload("CV.Docx", 10)).unwrap(), "docx");
    }

    #[test]
    fn test_rejects_large_files() {
        let config = config(std::env::temp_dir());
        let storage = ResumeStorage::new(&config);
        assert!(storage.validate(&upload("cv.pdf", 1024)).is_ok());
        let err = storage.validate(&upload("cv.pdf", 1025)).unwrap_err();
        assert_eq!(err.status_code(), 422);
    }

    #[tokio::test]
    async fn test_store_writes_file() {
        let dir = std::env::temp_dir().join(format!("jobboard-storage-{}", Uuid::new_v4()));
        let config = config(dir.clone());
        let storage = ResumeStorage::new(&config);

        let path = storage.store(&upload("cv.pdf", 16)).await.unwrap();
        assert!(path.starts_with("resumes/"));
        assert!(path.ends_with(".pdf"));
        let written = tokio::fs::read(dir.join(&path)).await.unwrap();
        assert_eq!(written.len(), 16);

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
