//! Image upload service implementation.

use std::path::Path;
use std::sync::Arc;

use imgup_shared::S3Config;
use tracing::{debug, info, instrument, warn};

use super::error::UploadError;
use super::mime::image_content_type;
use super::source::{FileSource, LocalFileSource};
use crate::storage::{ObjectAcl, ObjectStore, PutObjectRequest, public_url, storage_key};

/// Uploads local images to an object store and returns their public URLs.
///
/// Holds no mutable state, so one instance can serve concurrent uploads.
pub struct ImageUploadService<S: ObjectStore, F: FileSource = LocalFileSource> {
    store: Arc<S>,
    files: F,
    config: S3Config,
}

impl<S: ObjectStore> ImageUploadService<S> {
    /// Create a service reading images from the local filesystem.
    #[must_use]
    pub fn new(store: Arc<S>, config: S3Config) -> Self {
        Self::with_file_source(store, LocalFileSource, config)
    }
}

impl<S: ObjectStore, F: FileSource> ImageUploadService<S, F> {
    /// Create a service with a custom file source.
    #[must_use]
    pub fn with_file_source(store: Arc<S>, files: F, config: S3Config) -> Self {
        Self {
            store,
            files,
            config,
        }
    }

    /// Generate the storage key for an image path.
    ///
    /// Format: `uploads/{file_name}`. Only the final path segment is kept;
    /// the name itself is not sanitized.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the path is empty, has no final file
    /// name (`/`, `..`) or the file name is not valid UTF-8.
    pub fn generate_storage_key(image_path: &Path) -> Result<String, UploadError> {
        if image_path.as_os_str().is_empty() {
            return Err(UploadError::invalid_argument("image path is empty"));
        }

        let file_name = image_path.file_name().ok_or_else(|| {
            UploadError::invalid_argument(format!("{} has no file name", image_path.display()))
        })?;
        let file_name = file_name.to_str().ok_or_else(|| {
            UploadError::invalid_argument(format!(
                "{} has a non UTF-8 file name",
                image_path.display()
            ))
        })?;

        Ok(storage_key(file_name))
    }

    /// Upload an image and return its public URL.
    ///
    /// Makes one filesystem read and at most one object store request. The
    /// path is validated before any I/O.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path is empty or has no file name (`InvalidArgument`)
    /// - The file cannot be read (`FileRead`)
    /// - The object store request fails (`Upload`)
    pub async fn upload_image(&self, image_path: impl AsRef<Path>) -> Result<String, UploadError> {
        self.upload(image_path.as_ref()).await
    }

    #[instrument(skip(self, image_path), fields(path = %image_path.display()))]
    async fn upload(&self, image_path: &Path) -> Result<String, UploadError> {
        let key = Self::generate_storage_key(image_path)
            .inspect_err(|e| warn!(error = %e, "Rejected image path"))?;

        let body = self
            .files
            .read(image_path)
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to read image");
                UploadError::file_read(image_path, e)
            })?;

        let content_type = image_content_type(image_path);
        debug!(
            %key,
            size = body.len(),
            content_type = content_type.unwrap_or("<store default>"),
            "Uploading image"
        );

        let request = PutObjectRequest {
            bucket: self.config.bucket.clone(),
            key: key.clone(),
            body,
            acl: ObjectAcl::PublicRead,
            content_type: content_type.map(String::from),
        };

        if let Err(err) = self.store.put_object(request).await {
            warn!(%key, error = %err, "Image upload failed");
            return Err(err.into());
        }

        let url = public_url(&self.config, &key);
        info!(%key, %url, "Image uploaded");
        Ok(url)
    }
}
